// Responder domain models.
//
// Pure data, no Discord types. The Discord layer builds an `InboundMessage`
// from each serenity message and turns the `MessageReaction` back into
// Discord actions.

use serde::{Deserialize, Serialize};

/// A message as the responder sees it. Consumed per event, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundMessage {
    pub content: String,
    pub author_display_name: String,
    pub author_is_bot: bool,
}

impl InboundMessage {
    pub fn new(content: impl Into<String>, author_display_name: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            author_display_name: author_display_name.into(),
            author_is_bot: false,
        }
    }

    #[cfg(test)]
    pub fn from_bot(mut self) -> Self {
        self.author_is_bot = true;
        self
    }
}

/// Output of a response heuristic.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResponseDecision {
    pub reply_text: Option<String>,
    /// How often the dominant word repeats in the message.
    pub repetition_count: u32,
}

impl ResponseDecision {
    pub fn silent(repetition_count: u32) -> Self {
        Self {
            reply_text: None,
            repetition_count,
        }
    }

    pub fn reply(text: impl Into<String>, repetition_count: u32) -> Self {
        Self {
            reply_text: Some(text.into()),
            repetition_count,
        }
    }

    /// Reply text, with an empty string treated the same as no reply.
    pub fn text(&self) -> Option<&str> {
        self.reply_text.as_deref().filter(|text| !text.is_empty())
    }
}

/// What should happen in response to an ordinary (non-command) message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageReaction {
    /// Nothing to send.
    Ignore,
    /// Send a rendered response, then delete the triggering message if asked to.
    Reply {
        text: String,
        repetition_count: u32,
        delete_original: bool,
    },
}

/// Settings for the trigger-word heuristic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeuristicConfig {
    /// Words that get echoed back when a message consists only of them.
    pub triggers: Vec<String>,
    /// Messages repeating a trigger more often than this are left alone.
    pub max_repetitions: u32,
}

impl Default for HeuristicConfig {
    fn default() -> Self {
        Self {
            triggers: vec![
                "ok".to_string(),
                "okay".to_string(),
                "okey".to_string(),
                "k".to_string(),
            ],
            max_repetitions: 50,
        }
    }
}
