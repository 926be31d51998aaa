use crate::core::errors::CommandError;
use crate::discord::{Context, Error};

/// Get current link to website, where you can change your response background.
#[poise::command(prefix_command)]
pub async fn background(ctx: Context<'_>) -> Result<(), Error> {
    ctx.say(background_message(&ctx.data().background_url))
        .await
        .map_err(|e| CommandError::wrapped("background", e))?;
    Ok(())
}

fn background_message(url: &str) -> String {
    format!("Change your background on our site:\n{}", url)
}
