use crate::core::errors::{BoxError, CommandError};
use crate::core::search::{search_caption, search_link};
use crate::discord::{Context, Error};
use poise::serenity_prelude as serenity;

/// Returns a google link for a query
#[poise::command(prefix_command)]
pub async fn google(ctx: Context<'_>, #[rest] query: String) -> Result<(), Error> {
    send_search_link(ctx, &query)
        .await
        .map_err(|e| CommandError::wrapped("google", e))
}

async fn send_search_link(ctx: Context<'_>, query: &str) -> Result<(), BoxError> {
    let link = search_link(query)?;

    let button = serenity::CreateButton::new_link(link.as_str()).label("Google");
    let reply = poise::CreateReply::default()
        .content(search_caption(query))
        .components(vec![serenity::CreateActionRow::Buttons(vec![button])]);

    ctx.send(reply).await?;
    Ok(())
}
