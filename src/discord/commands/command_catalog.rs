// Discord commands module.
// Each command gets its own file; this file holds the shared command types
// and the list the framework registers.

pub mod background;
pub mod google;
pub mod help;
pub mod presence;
pub mod remindme;
pub mod tictactoe;

use crate::core::errors::CommandError;
use crate::core::reminders::ReminderService;
use crate::core::responder::{RepetitionHeuristic, ResponderService};
use crate::core::session::SessionState;
use crate::infra::random::ThreadRngSource;
use std::sync::Arc;

pub type Responder = ResponderService<RepetitionHeuristic, ThreadRngSource>;

/// Shared state handed to every command and event.
pub struct Data {
    pub session: Arc<SessionState>,
    pub responder: Arc<Responder>,
    pub reminders: Arc<ReminderService>,
    pub background_url: String,
}

pub type Error = CommandError;
pub type Context<'a> = poise::Context<'a, Data, Error>;

/// Every command the bot answers to.
pub fn all_commands() -> Vec<poise::Command<Data, Error>> {
    vec![
        tictactoe::tic(),
        google::google(),
        remindme::remindme(),
        background::background(),
        help::help(),
    ]
}
