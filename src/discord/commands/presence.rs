// Bot presence.
//
// Discord-layer glue only: the session decides *when* presence is set
// (first Ready), this decides *what* it says.

use poise::serenity_prelude as serenity;

/// Status line pointing people at the help command.
pub fn help_status(prefix: char) -> String {
    format!("Type {}help", prefix)
}

/// Called on the first Ready so users can discover the commands.
pub fn on_ready(ctx: &serenity::Context, prefix: char) {
    let activity = serenity::ActivityData::playing(help_status(prefix));
    ctx.set_presence(Some(activity), serenity::OnlineStatus::Online);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_uses_the_configured_prefix() {
        assert_eq!(help_status('?'), "Type ?help");
        assert_eq!(help_status('!'), "Type !help");
    }
}
