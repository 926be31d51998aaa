// Discord command for setting reminders.
//
// The core validates the request and tracks pending reminders per user.
// Here we wait out the delay in a background task, then ping the author in
// the channel the reminder was set from.

use crate::core::errors::{BoxError, CommandError};
use crate::core::reminders::Reminder;
use crate::discord::{Context, Error};
use chrono::Utc;
use poise::serenity_prelude::{self as serenity, Mentionable};
use std::sync::Arc;

/// Set reminder [time] [unit = s,m,h,d,M]
#[poise::command(prefix_command)]
pub async fn remindme(ctx: Context<'_>, amount: String, unit: String) -> Result<(), Error> {
    schedule_reminder(ctx, &amount, &unit)
        .await
        .map_err(|e| CommandError::wrapped("remindme", e))
}

async fn schedule_reminder(ctx: Context<'_>, amount: &str, unit: &str) -> Result<(), BoxError> {
    let user_id = ctx.author().id;

    let reminder = match ctx
        .data()
        .reminders
        .schedule(user_id.get(), amount, unit, Utc::now())
    {
        Ok(reminder) => reminder,
        Err(e) => {
            ctx.say(format!(
                "Couldn't set that reminder: {}\nUsage: `{}remindme <amount> <unit>` with unit one of s, m, h, d, M",
                e,
                ctx.data().session.prefix()
            ))
            .await?;
            return Ok(());
        }
    };

    spawn_delivery(ctx, &reminder);

    ctx.say(format!(
        "Reminder set! I'll ping you in {} (<t:{}:R>). Pending reminders: {}.",
        reminder.describe(),
        reminder.due_at.timestamp(),
        ctx.data().reminders.pending_for(user_id.get())
    ))
    .await?;

    Ok(())
}

fn spawn_delivery(ctx: Context<'_>, reminder: &Reminder) {
    let reminders = Arc::clone(&ctx.data().reminders);
    let http = ctx.serenity_context().http.clone();
    let channel_id = ctx.channel_id();
    let user_id = ctx.author().id;
    let delay = reminder.delay;
    let content = format!(
        "{} Reminder! You asked me to ping you {} ago.",
        user_id.mention(),
        reminder.describe()
    );

    tokio::spawn(async move {
        tokio::time::sleep(delay).await;

        if let Err(e) = channel_id
            .send_message(
                &http,
                serenity::CreateMessage::new()
                    .content(content)
                    .allowed_mentions(serenity::CreateAllowedMentions::new().users(vec![user_id])),
            )
            .await
        {
            tracing::error!("Failed to send reminder: {}", e);
        }

        reminders.complete(user_id.get());
    });
}
