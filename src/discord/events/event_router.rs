// Event handler for non-command gateway events.
//
// The framework has already offered every message to the command router by
// the time we see it here, so this only deals with lifecycle notices and the
// heuristic responder.

pub mod message_handler;

use crate::core::errors::CommandError;
use crate::core::session::ReadyTransition;
use crate::discord::commands::presence;
use crate::discord::{Data, Error};
use poise::serenity_prelude as serenity;

pub async fn event_handler(
    ctx: &serenity::Context,
    event: &serenity::FullEvent,
    _framework: poise::FrameworkContext<'_, Data, Error>,
    data: &Data,
) -> Result<(), Error> {
    match event {
        serenity::FullEvent::Ready { data_about_bot } => {
            match data.session.mark_ready() {
                ReadyTransition::FirstReady => {
                    presence::on_ready(ctx, data.session.prefix());
                    tracing::info!(user = %data_about_bot.user.name, "Bot ready.");
                }
                ReadyTransition::Reconnected => tracing::info!("Bot reconnected"),
            }
        }
        serenity::FullEvent::ShardStageUpdate { event } => on_stage_update(data, event),
        serenity::FullEvent::Message { new_message } => {
            message_handler::on_message(ctx, new_message, data)
                .await
                .map_err(CommandError::other)?;
        }
        _ => {}
    }

    Ok(())
}

/// Connect/disconnect hooks. Logging plus phase bookkeeping, nothing that can fail.
fn on_stage_update(data: &Data, event: &serenity::ShardStageUpdateEvent) {
    match event.new {
        serenity::ConnectionStage::Connected => {
            data.session.mark_connected();
            tracing::info!(shard = event.shard_id.0, "OkBot has connected.");
        }
        serenity::ConnectionStage::Disconnected => {
            data.session.mark_disconnected();
            tracing::info!(shard = event.shard_id.0, "OkBot has disconnected.");
        }
        _ => data.session.begin_connect(),
    }

    tracing::debug!(
        shard = event.shard_id.0,
        phase = ?data.session.phase(),
        ready = data.session.is_ready(),
        "Session stage changed"
    );
}
