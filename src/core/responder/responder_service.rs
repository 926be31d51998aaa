// Responder service - decides how the bot reacts to an ordinary message.
//
// Command dispatch is not in here: the framework routes commands before this
// runs. This service covers everything after that point:
// - Bot authors are dropped before anything is evaluated
// - Empty and prefixed messages never get a heuristic reply
// - Low repetition counts get their message replaced (reply + delete)
// - Everything else has a 2 in 2000 chance of an easter-egg reply

use super::heuristic::ResponseHeuristic;
use super::responder_models::{InboundMessage, MessageReaction};

/// Upper bound (inclusive) of the easter-egg draw. The lower bound is 1.
pub const EASTER_EGG_ROLL_MAX: u32 = 2000;

/// Draws at or above this trigger the easter egg (1999 and 2000).
pub const EASTER_EGG_THRESHOLD: u32 = 1999;

/// Replies with a repetition count at or below this also delete the original message.
pub const DELETE_AT_OR_BELOW: u32 = 2;

/// Source of uniform random integers.
pub trait RandomSource: Send + Sync {
    /// A uniform draw from `low..=high`.
    fn roll(&self, low: u32, high: u32) -> u32;
}

pub struct ResponderService<H: ResponseHeuristic, R: RandomSource> {
    heuristic: H,
    rng: R,
    prefix: char,
}

impl<H: ResponseHeuristic, R: RandomSource> ResponderService<H, R> {
    pub fn new(heuristic: H, rng: R, prefix: char) -> Self {
        Self {
            heuristic,
            rng,
            prefix,
        }
    }

    /// Decide the reaction to a message that has already been offered to the command router.
    pub fn react(&self, message: &InboundMessage) -> MessageReaction {
        if message.author_is_bot {
            return MessageReaction::Ignore;
        }

        let decision = self
            .heuristic
            .evaluate(&message.content, &message.author_display_name);

        if message.content.is_empty() || message.content.starts_with(self.prefix) {
            return MessageReaction::Ignore;
        }

        if let Some(text) = decision.text() {
            return MessageReaction::Reply {
                text: text.to_string(),
                repetition_count: decision.repetition_count,
                delete_original: decision.repetition_count <= DELETE_AT_OR_BELOW,
            };
        }

        if self.rng.roll(1, EASTER_EGG_ROLL_MAX) >= EASTER_EGG_THRESHOLD {
            return MessageReaction::Reply {
                text: message.author_display_name.clone(),
                repetition_count: decision.repetition_count,
                delete_original: false,
            };
        }

        MessageReaction::Ignore
    }
}
