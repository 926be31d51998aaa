// Ordinary messages - translate the serenity message for the responder and
// carry out whatever it decides.

use crate::core::errors::BoxError;
use crate::core::responder::{InboundMessage, MessageReaction};
use crate::discord::responder::send_response;
use crate::discord::Data;
use async_trait::async_trait;
use poise::serenity_prelude as serenity;

/// The two side effects a reaction can have on the channel it came from.
#[async_trait]
pub trait ReplyTarget: Send + Sync {
    async fn send_reply(&self, text: &str, repetition_count: u32) -> Result<(), BoxError>;
    async fn delete_original(&self) -> Result<(), BoxError>;
}

/// A live serenity message and the name its reply is credited to.
struct MessageTarget<'a> {
    ctx: &'a serenity::Context,
    msg: &'a serenity::Message,
    author_name: &'a str,
}

#[async_trait]
impl<'a> ReplyTarget for MessageTarget<'a> {
    async fn send_reply(&self, text: &str, repetition_count: u32) -> Result<(), BoxError> {
        send_response(self.ctx, self.msg, self.author_name, text, repetition_count).await?;
        Ok(())
    }

    async fn delete_original(&self) -> Result<(), BoxError> {
        self.msg.delete(&self.ctx.http).await?;
        Ok(())
    }
}

pub async fn on_message(
    ctx: &serenity::Context,
    msg: &serenity::Message,
    data: &Data,
) -> Result<(), BoxError> {
    let inbound = InboundMessage {
        author_is_bot: msg.author.bot,
        ..InboundMessage::new(msg.content.clone(), display_name(msg))
    };

    let reaction = data.responder.react(&inbound);
    let target = MessageTarget {
        ctx,
        msg,
        author_name: &inbound.author_display_name,
    };

    carry_out(reaction, &target).await
}

/// Apply a reaction: at most one reply, then the delete if asked for.
pub async fn carry_out(reaction: MessageReaction, target: &dyn ReplyTarget) -> Result<(), BoxError> {
    match reaction {
        MessageReaction::Ignore => Ok(()),
        MessageReaction::Reply {
            text,
            repetition_count,
            delete_original,
        } => {
            target.send_reply(&text, repetition_count).await?;

            // Send and delete are independent; a failed delete leaves the reply in place.
            if delete_original {
                if let Err(e) = target.delete_original().await {
                    tracing::warn!("Failed to delete original message: {}", e);
                }
            }

            Ok(())
        }
    }
}

/// Guild nickname, then global display name, then username.
pub fn display_name(msg: &serenity::Message) -> String {
    msg.member
        .as_ref()
        .and_then(|member| member.nick.clone())
        .or_else(|| msg.author.global_name.clone())
        .unwrap_or_else(|| msg.author.name.clone())
}
