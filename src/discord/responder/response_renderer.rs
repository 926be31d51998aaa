// Renders a responder reply as an embed credited to the original author.

use poise::serenity_prelude as serenity;

const RESPONSE_COLOUR: u32 = 0xF1C40F;

pub fn repetition_footer(repetition_count: u32) -> String {
    match repetition_count {
        0 | 1 => "Said once".to_string(),
        n => format!("Said {} times", n),
    }
}

pub fn build_response_embed(
    text: &str,
    author_name: &str,
    avatar_url: String,
    repetition_count: u32,
) -> serenity::CreateEmbed {
    serenity::CreateEmbed::new()
        .author(serenity::CreateEmbedAuthor::new(author_name).icon_url(avatar_url))
        .description(text)
        .color(RESPONSE_COLOUR)
        .footer(serenity::CreateEmbedFooter::new(repetition_footer(
            repetition_count,
        )))
}

/// Post the reply in the channel the message came from.
pub async fn send_response(
    ctx: &serenity::Context,
    msg: &serenity::Message,
    author_name: &str,
    text: &str,
    repetition_count: u32,
) -> Result<(), serenity::Error> {
    let embed = build_response_embed(text, author_name, msg.author.face(), repetition_count);

    msg.channel_id
        .send_message(&ctx.http, serenity::CreateMessage::new().embed(embed))
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footer_reports_the_repetition_count() {
        assert_eq!(repetition_footer(0), "Said once");
        assert_eq!(repetition_footer(1), "Said once");
        assert_eq!(repetition_footer(4), "Said 4 times");
    }

    #[test]
    fn embed_carries_text_author_and_count() {
        let embed = build_response_embed(
            "Alice says OK OK OK",
            "Alice",
            "https://cdn.example/avatar.png".to_string(),
            3,
        );

        let json = serde_json::to_value(&embed).unwrap();

        assert_eq!(json["description"], "Alice says OK OK OK");
        assert_eq!(json["author"]["name"], "Alice");
        assert_eq!(json["footer"]["text"], "Said 3 times");
    }
}
