// Core error module - error taxonomy and the policy that decides what gets
// reported, absorbed or propagated.

pub mod command_errors;
pub mod startup_errors;

pub use command_errors::*;
pub use startup_errors::*;
