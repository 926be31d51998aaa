// The core module contains all business logic.
// Each feature gets its own submodule, and none of them know about Discord.

#[path = "session/session_service.rs"]
pub mod session;

#[path = "responder/mod.rs"]
pub mod responder;

#[path = "errors/mod.rs"]
pub mod errors;

#[path = "reminders/reminder_service.rs"]
pub mod reminders;

#[path = "search/search_links.rs"]
pub mod search;

#[path = "tictactoe/tictactoe_game.rs"]
pub mod tictactoe;
