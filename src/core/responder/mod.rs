// Core responder module - the heuristic auto-reply and the moderation
// decision that rides along with it.
// Following the same pattern as the errors module.

pub mod heuristic;
pub mod responder_models;
pub mod responder_service;

pub use heuristic::*;
pub use responder_models::*;
pub use responder_service::*;
