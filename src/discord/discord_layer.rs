// Discord layer - commands, event handlers and the error hook.

#[path = "commands/command_catalog.rs"]
pub mod commands;

#[path = "events/event_router.rs"]
pub mod events;

#[path = "errors/error_handler.rs"]
pub mod errors;

#[path = "responder/response_renderer.rs"]
pub mod responder;

// Re-export command types for convenience
pub use commands::{Context, Data, Error};
