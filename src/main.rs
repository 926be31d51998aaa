// This is the entry point of the bot.
//
// **Architecture Overview:**
// - `core/` = Business logic (platform-agnostic)
// - `infra/` = Environment and randomness adapters for core traits
// - `discord/` = Discord-specific adapters (commands, events, error hook)
//
// This file's job is to:
// 1. Load configuration
// 2. Build the session and services (dependency injection)
// 3. Set up the Discord framework
// 4. Map startup failures to exit statuses

// These attrs point each module declaration at a more descriptive root file
// so we don't end up with half a dozen mod.rs files that all look the same.
#[path = "core/core_layer.rs"]
mod core;
#[path = "discord/discord_layer.rs"]
mod discord;
#[path = "infra/infra_layer.rs"]
mod infra;

use crate::core::errors::StartupError;
use crate::core::reminders::ReminderService;
use crate::core::responder::{RepetitionHeuristic, ResponderService};
use crate::core::session::SessionState;
use crate::discord::commands::all_commands;
use crate::discord::Data;
use crate::infra::config::BotConfig;
use crate::infra::random::ThreadRngSource;
use anyhow::Context as _;
use poise::serenity_prelude as serenity;
use std::process::ExitCode;
use std::sync::Arc;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging so we can see what's happening
    tracing_subscriber::fmt::init();

    // Load environment variables from .env file (if it exists)
    dotenv::dotenv().ok();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{}", err);
            ExitCode::from(err.exit_status())
        }
    }
}

async fn run() -> Result<(), StartupError> {
    // A missing token stops us here, before any connection is attempted.
    let config = BotConfig::from_env()?;
    tracing::debug!(?config, "Configuration loaded");

    start(config).await
}

/// Connect and serve until the gateway client gives up.
async fn start(config: BotConfig) -> Result<(), StartupError> {
    // ========================================================================
    // DEPENDENCY INJECTION
    // ========================================================================
    // Exactly one session per process, built here and shared with everything
    // that needs it.

    let session = Arc::new(SessionState::new(config.prefix));

    let responder = Arc::new(ResponderService::new(
        RepetitionHeuristic::new(config.heuristic.clone()),
        ThreadRngSource,
        config.prefix,
    ));

    let data = Data {
        session: Arc::clone(&session),
        responder,
        reminders: Arc::new(ReminderService::new()),
        background_url: config.background_url.clone(),
    };

    // ========================================================================
    // DISCORD FRAMEWORK SETUP
    // ========================================================================

    let intents = serenity::GatewayIntents::GUILD_MESSAGES
        | serenity::GatewayIntents::DIRECT_MESSAGES
        | serenity::GatewayIntents::MESSAGE_CONTENT // Required to read message content
        | serenity::GatewayIntents::GUILDS;

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: all_commands(),
            prefix_options: poise::PrefixFrameworkOptions {
                prefix: Some(config.prefix.to_string()),
                ignore_bots: true,
                mention_as_prefix: false,
                ..Default::default()
            },
            // Event handler for messages and lifecycle events
            event_handler: |ctx, event, framework, data| {
                Box::pin(discord::events::event_handler(ctx, event, framework, data))
            },
            on_error: |error| Box::pin(discord::errors::on_error(error)),
            ..Default::default()
        })
        .setup(|_ctx, ready, framework| {
            Box::pin(async move {
                tracing::info!(
                    user = %ready.user.name,
                    commands = framework.options().commands.len(),
                    "Framework set up"
                );
                Ok(data)
            })
        })
        .build();

    session.begin_connect();

    // Shard runners reconnect on their own once connected.
    let mut client = serenity::ClientBuilder::new(&config.token, intents)
        .framework(framework)
        .await
        .context("Error creating client")?;

    client.start().await.context("Error running bot")?;

    Ok(())
}
