// Command error classification.
//
// Handlers report failures exactly once, at the command boundary, as a
// tagged `CommandError`. The policy functions below then decide:
// - Unknown command -> tell the user, absorb
// - Wrapped failure -> propagate the inner cause, never the wrapper
// - Anything else   -> propagate unchanged
//
// The generic hook always hands the error back; it only adds a notice when
// the thing that failed was command-error handling itself.

use async_trait::async_trait;
use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

pub const WRONG_COMMAND_NOTICE: &str = "Wrong command";
pub const COMMAND_ERROR_NOTICE: &str = "A command error occurred.";

// ============================================================================
// ERRORS
// ============================================================================

#[derive(Debug, Error)]
pub enum CommandError {
    /// The router found no command for a prefixed message.
    #[error("Unknown command: {0}")]
    NotFound(String),

    /// A handler failed; `source` is the real cause.
    #[error("Command `{command}` failed: {source}")]
    Wrapped {
        command: String,
        #[source]
        source: BoxError,
    },

    #[error("{0}")]
    Other(BoxError),
}

impl CommandError {
    pub fn wrapped(command: &str, source: impl Into<BoxError>) -> Self {
        Self::Wrapped {
            command: command.to_string(),
            source: source.into(),
        }
    }

    pub fn other(error: impl Into<BoxError>) -> Self {
        Self::Other(error.into())
    }
}

/// Which handler failed, as seen by the generic error hook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerEvent {
    /// Handling a command error failed.
    CommandError,
    /// Any other event handler, by event name.
    Event(String),
}

// ============================================================================
// NOTIFICATION PORT
// ============================================================================

/// Somewhere a short notice can be posted, usually the originating channel.
#[async_trait]
pub trait ChannelNotifier: Send + Sync {
    async fn notify(&self, text: &str) -> Result<(), BoxError>;
}

// ============================================================================
// POLICY
// ============================================================================

/// Resolve a failed command.
///
/// Returns `Ok(())` when the error was dealt with here, or the error that
/// must keep travelling up.
pub async fn handle_command_error(
    error: CommandError,
    notifier: &dyn ChannelNotifier,
) -> Result<(), BoxError> {
    match error {
        CommandError::NotFound(name) => {
            tracing::debug!(command = %name, "Unknown command");
            notifier.notify(WRONG_COMMAND_NOTICE).await
        }
        CommandError::Wrapped { source, .. } => Err(source),
        CommandError::Other(error) => Err(error),
    }
}

/// Generic hook for errors that escaped a handler.
///
/// Never absorbs anything: the error comes back out for the caller to surface.
pub async fn handle_handler_error(
    event: &HandlerEvent,
    error: BoxError,
    notifier: Option<&dyn ChannelNotifier>,
) -> BoxError {
    if *event == HandlerEvent::CommandError {
        if let Some(notifier) = notifier {
            if let Err(e) = notifier.notify(COMMAND_ERROR_NOTICE).await {
                tracing::warn!("Failed to send command error notice: {}", e);
            }
        }
    }

    error
}
