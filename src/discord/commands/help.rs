use crate::core::errors::{BoxError, CommandError};
use crate::discord::{Context, Error};
use poise::serenity_prelude as serenity;
use std::collections::HashMap;

// Category definitions with emojis and order
const CATEGORY_ORDER: &[&str] = &["Games", "Utilities", "Profile"];

fn get_category_emoji(category: &str) -> &'static str {
    match category {
        "Games" => "🎮",
        "Utilities" => "🧰",
        "Profile" => "🖼️",
        _ => "•",
    }
}

struct CommandMetadata {
    category: &'static str,
    priority: i32,
    usage: Option<&'static str>,
}

fn get_command_metadata(name: &str) -> CommandMetadata {
    match name {
        "tic" => CommandMetadata {
            category: "Games",
            priority: 100,
            usage: None,
        },
        "google" => CommandMetadata {
            category: "Utilities",
            priority: 80,
            usage: Some("<query...>"),
        },
        "remindme" => CommandMetadata {
            category: "Utilities",
            priority: 70,
            usage: Some("<amount> <unit>"),
        },
        "background" => CommandMetadata {
            category: "Profile",
            priority: 50,
            usage: None,
        },
        _ => CommandMetadata {
            category: "Utilities",
            priority: 0,
            usage: None,
        },
    }
}

/// Show a categorized list of commands.
#[poise::command(prefix_command)]
pub async fn help(ctx: Context<'_>) -> Result<(), Error> {
    send_help(ctx)
        .await
        .map_err(|e| CommandError::wrapped("help", e))
}

async fn send_help(ctx: Context<'_>) -> Result<(), BoxError> {
    let prefix = ctx.data().session.prefix();

    let listed: Vec<(&str, Option<&str>)> = ctx
        .framework()
        .options()
        .commands
        .iter()
        .filter(|command| !command.hide_in_help && command.name != "help")
        .map(|command| (command.name.as_str(), command.description.as_deref()))
        .collect();

    let mut embed = serenity::CreateEmbed::new()
        .title("OkBot Command Guide")
        .description(format!(
            "Every command starts with `{}`. Anything else you say may get a reply of its own.",
            prefix
        ))
        .color(serenity::Colour::from_rgb(88, 101, 242));

    for (title, entries) in build_sections(prefix, &listed) {
        embed = embed.field(title, entries.join("\n"), false);
    }

    ctx.send(poise::CreateReply::default().embed(embed)).await?;

    Ok(())
}

/// Group commands into titled sections, in category order, highest priority first.
fn build_sections(prefix: char, commands: &[(&str, Option<&str>)]) -> Vec<(String, Vec<String>)> {
    let mut categories: HashMap<&str, Vec<(i32, String)>> = HashMap::new();

    for (name, description) in commands {
        let metadata = get_command_metadata(name);

        let mut entry = format!("• **{}{}**", prefix, name);
        if let Some(usage) = metadata.usage {
            entry.push_str(&format!(" `{}`", usage));
        }
        entry.push_str(&format!(
            " - {}",
            description.unwrap_or("No description provided.")
        ));

        categories
            .entry(metadata.category)
            .or_default()
            .push((metadata.priority, entry));
    }

    let mut sorted_categories: Vec<&str> = categories.keys().copied().collect();
    sorted_categories.sort_by(|a, b| {
        let pos_a = CATEGORY_ORDER.iter().position(|x| x == a).unwrap_or(999);
        let pos_b = CATEGORY_ORDER.iter().position(|x| x == b).unwrap_or(999);
        pos_a.cmp(&pos_b).then(a.cmp(b))
    });

    sorted_categories
        .into_iter()
        .map(|category| {
            let mut entries = categories.remove(category).unwrap_or_default();
            entries.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));

            let title = format!("{} {}", get_category_emoji(category), category);
            (title, entries.into_iter().map(|(_, entry)| entry).collect())
        })
        .collect()
}
