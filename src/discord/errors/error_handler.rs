// Framework error hook.
//
// Translates poise's error variants into the core taxonomy at one place:
// - UnknownCommand     -> CommandError::NotFound (only for a named invocation)
// - Command            -> whatever the command returned (already tagged)
// - ArgumentParse      -> CommandError::Other
// - EventHandler       -> generic hook, no channel notice
//
// Errors the policy hands back are the end of the line; they get logged here.

use crate::core::errors::{
    handle_command_error, handle_handler_error, BoxError, ChannelNotifier, CommandError,
    HandlerEvent,
};
use crate::discord::{Data, Error};
use async_trait::async_trait;
use poise::serenity_prelude as serenity;

/// Posts notices to the channel a command came from.
pub struct ChannelReply<'a> {
    http: &'a serenity::Http,
    channel_id: serenity::ChannelId,
}

impl<'a> ChannelReply<'a> {
    pub fn new(http: &'a serenity::Http, channel_id: serenity::ChannelId) -> Self {
        Self { http, channel_id }
    }
}

#[async_trait]
impl<'a> ChannelNotifier for ChannelReply<'a> {
    async fn notify(&self, text: &str) -> Result<(), BoxError> {
        self.channel_id.say(self.http, text).await?;
        Ok(())
    }
}

pub async fn on_error(error: poise::FrameworkError<'_, Data, Error>) {
    match error {
        poise::FrameworkError::UnknownCommand {
            ctx, msg, prefix, ..
        } => {
            // A lone prefix or "? some words" is chat, not a command attempt.
            let Some(name) = invoked_command(&msg.content, prefix) else {
                return;
            };
            let notifier = ChannelReply::new(&ctx.http, msg.channel_id);
            log_surfaced(
                resolve_command_error(CommandError::NotFound(name.to_string()), &notifier).await,
            );
        }
        poise::FrameworkError::Command { error, ctx, .. } => {
            let notifier = ChannelReply::new(ctx.http(), ctx.channel_id());
            log_surfaced(resolve_command_error(error, &notifier).await);
        }
        poise::FrameworkError::ArgumentParse {
            error, input, ctx, ..
        } => {
            tracing::debug!(command = %ctx.command().name, ?input, "Could not parse arguments");
            let notifier = ChannelReply::new(ctx.http(), ctx.channel_id());
            log_surfaced(resolve_command_error(CommandError::other(error), &notifier).await);
        }
        poise::FrameworkError::EventHandler { error, event, .. } => {
            let handler = HandlerEvent::Event(event.snake_case_name().to_string());
            let surfaced = handle_handler_error(&handler, Box::new(error), None).await;
            tracing::error!("Error in {} handler: {}", event.snake_case_name(), surfaced);
        }
        other => {
            if let Err(e) = poise::builtins::on_error(other).await {
                tracing::error!("Error while handling error: {}", e);
            }
        }
    }
}

/// The command word right after the prefix.
///
/// `None` when nothing follows the prefix or it is followed by whitespace.
fn invoked_command<'a>(content: &'a str, prefix: &str) -> Option<&'a str> {
    let rest = content.strip_prefix(prefix)?;
    if rest.is_empty() || rest.starts_with(char::is_whitespace) {
        return None;
    }
    rest.split_whitespace().next()
}

/// Run the command-error policy, falling through to the generic hook for
/// anything it doesn't absorb. Returns what the generic hook surfaced.
async fn resolve_command_error(
    error: CommandError,
    notifier: &dyn ChannelNotifier,
) -> Option<BoxError> {
    match handle_command_error(error, notifier).await {
        Ok(()) => None,
        Err(propagated) => Some(
            handle_handler_error(&HandlerEvent::CommandError, propagated, Some(notifier)).await,
        ),
    }
}

fn log_surfaced(surfaced: Option<BoxError>) {
    if let Some(error) = surfaced {
        tracing::error!("Command error: {}", error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::{COMMAND_ERROR_NOTICE, WRONG_COMMAND_NOTICE};
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingNotifier {
        sent: Mutex<Vec<String>>,
    }

    impl RecordingNotifier {
        fn sent(&self) -> Vec<String> {
            self.sent.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ChannelNotifier for RecordingNotifier {
        async fn notify(&self, text: &str) -> Result<(), BoxError> {
            self.sent.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }

    #[derive(Debug, thiserror::Error)]
    #[error("board is full")]
    struct BoardFull;

    #[test]
    fn bare_prefix_and_spaced_text_are_not_invocations() {
        assert_eq!(invoked_command("?", "?"), None);
        assert_eq!(invoked_command("? hi", "?"), None);
        assert_eq!(invoked_command("?\twhat", "?"), None);
        assert_eq!(invoked_command("hello", "?"), None);
    }

    #[test]
    fn named_invocation_yields_the_command_word() {
        assert_eq!(invoked_command("?tac", "?"), Some("tac"));
        assert_eq!(invoked_command("?tac toe", "?"), Some("tac"));
    }

    #[tokio::test]
    async fn unknown_command_gets_one_notice_and_nothing_surfaces() {
        let notifier = RecordingNotifier::default();

        let surfaced = resolve_command_error(CommandError::NotFound("tac".into()), &notifier).await;

        assert!(surfaced.is_none());
        assert_eq!(notifier.sent(), vec![WRONG_COMMAND_NOTICE.to_string()]);
    }

    #[tokio::test]
    async fn wrapped_failure_notifies_and_surfaces_the_inner_cause() {
        let notifier = RecordingNotifier::default();

        let surfaced = resolve_command_error(CommandError::wrapped("tic", BoardFull), &notifier)
            .await
            .unwrap();

        assert!(surfaced.downcast_ref::<BoardFull>().is_some());
        assert!(surfaced.downcast_ref::<CommandError>().is_none());
        assert_eq!(notifier.sent(), vec![COMMAND_ERROR_NOTICE.to_string()]);
    }
}
