// Startup failures and the process exit status each one maps to.

use thiserror::Error;

/// Exit status when the gateway token is missing.
pub const EXIT_MISSING_TOKEN: u8 = 1;

/// Exit status for every other startup failure.
pub const EXIT_STARTUP_FAILURE: u8 = 2;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Token is not initialized. Be sure to set environment variable {0}")]
    MissingToken(&'static str),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Unexpected exception while initializing bot: {0:#}")]
    Client(#[from] anyhow::Error),
}

impl StartupError {
    pub fn exit_status(&self) -> u8 {
        match self {
            StartupError::MissingToken(_) => EXIT_MISSING_TOKEN,
            StartupError::InvalidConfig(_) | StartupError::Client(_) => EXIT_STARTUP_FAILURE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_token_has_its_own_exit_status() {
        let error = StartupError::MissingToken("DISCORD_TOKEN");

        assert_eq!(error.exit_status(), 1);
        assert!(error.to_string().contains("DISCORD_TOKEN"));
    }

    #[test]
    fn other_startup_failures_share_exit_status_two() {
        let invalid = StartupError::InvalidConfig("prefix must be one character".into());
        let client = StartupError::from(anyhow::anyhow!("gateway refused"));

        assert_eq!(invalid.exit_status(), 2);
        assert_eq!(client.exit_status(), 2);
        assert!(client.to_string().contains("gateway refused"));
    }
}
