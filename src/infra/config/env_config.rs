// Process configuration read from environment variables.
//
// `main` loads `.env` first, so everything here sees the merged environment.
// Loading goes through a key lookup closure so tests never touch the real
// process environment.

use crate::core::errors::StartupError;
use crate::core::responder::HeuristicConfig;
use std::fmt;
use std::path::Path;

pub const TOKEN_VAR: &str = "DISCORD_TOKEN";
pub const PREFIX_VAR: &str = "BOT_PREFIX";
pub const BACKGROUND_URL_VAR: &str = "BACKGROUND_URL";
pub const RESPONDER_CONFIG_VAR: &str = "RESPONDER_CONFIG_FILE";

pub const DEFAULT_PREFIX: char = '?';
pub const DEFAULT_BACKGROUND_URL: &str = "http://vps-348e48ae.vps.ovh.net/";

#[derive(Clone)]
pub struct BotConfig {
    pub token: String,
    pub prefix: char,
    pub background_url: String,
    pub heuristic: HeuristicConfig,
}

// Keep the token out of logs.
impl fmt::Debug for BotConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BotConfig")
            .field("token", &"<redacted>")
            .field("prefix", &self.prefix)
            .field("background_url", &self.background_url)
            .field("heuristic", &self.heuristic)
            .finish()
    }
}

impl BotConfig {
    pub fn from_env() -> Result<Self, StartupError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, StartupError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = lookup(TOKEN_VAR)
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or(StartupError::MissingToken(TOKEN_VAR))?;

        let prefix = match lookup(PREFIX_VAR) {
            Some(raw) => parse_prefix(&raw)?,
            None => DEFAULT_PREFIX,
        };

        let background_url = lookup(BACKGROUND_URL_VAR)
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| DEFAULT_BACKGROUND_URL.to_string());

        let heuristic = match lookup(RESPONDER_CONFIG_VAR) {
            Some(path) => load_heuristic_config(Path::new(path.trim()))?,
            None => HeuristicConfig::default(),
        };

        Ok(Self {
            token,
            prefix,
            background_url,
            heuristic,
        })
    }
}

fn parse_prefix(raw: &str) -> Result<char, StartupError> {
    let mut chars = raw.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(prefix), None) => Ok(prefix),
        _ => Err(StartupError::InvalidConfig(format!(
            "{} must be exactly one character, got {:?}",
            PREFIX_VAR, raw
        ))),
    }
}

fn load_heuristic_config(path: &Path) -> Result<HeuristicConfig, StartupError> {
    let raw = std::fs::read_to_string(path).map_err(|e| {
        StartupError::InvalidConfig(format!("cannot read {}: {}", path.display(), e))
    })?;

    serde_json::from_str(&raw).map_err(|e| {
        StartupError::InvalidConfig(format!("cannot parse {}: {}", path.display(), e))
    })
}
