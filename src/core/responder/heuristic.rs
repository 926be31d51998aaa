// The response heuristic - decides whether a message deserves an echo and
// how repetitive it is.

use super::responder_models::{HeuristicConfig, ResponseDecision};
use std::collections::HashMap;

/// Pure text analysis: message content plus author nickname in, decision out.
///
/// Implementations must be deterministic and free of side effects; the
/// responder only branches on the two values they return.
pub trait ResponseHeuristic: Send + Sync {
    fn evaluate(&self, content: &str, nickname: &str) -> ResponseDecision;
}

/// Echoes messages made up of a single trigger word, however many times it is repeated.
pub struct RepetitionHeuristic {
    triggers: Vec<String>,
    max_repetitions: u32,
}

impl RepetitionHeuristic {
    pub fn new(config: HeuristicConfig) -> Self {
        let triggers = config
            .triggers
            .iter()
            .map(|t| t.trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();

        Self {
            triggers,
            max_repetitions: config.max_repetitions,
        }
    }

    /// Lowercased words with surrounding punctuation stripped.
    fn words(content: &str) -> Vec<String> {
        content
            .split_whitespace()
            .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()).to_lowercase())
            .filter(|w| !w.is_empty())
            .collect()
    }

    /// Occurrences of the most frequent word.
    fn dominant_count(words: &[String]) -> u32 {
        let mut counts: HashMap<&str, u32> = HashMap::new();
        for word in words {
            *counts.entry(word.as_str()).or_insert(0) += 1;
        }
        counts.values().copied().max().unwrap_or(0)
    }
}

impl Default for RepetitionHeuristic {
    fn default() -> Self {
        Self::new(HeuristicConfig::default())
    }
}

impl ResponseHeuristic for RepetitionHeuristic {
    fn evaluate(&self, content: &str, nickname: &str) -> ResponseDecision {
        let words = Self::words(content);
        let count = Self::dominant_count(&words);

        let Some(first) = words.first() else {
            return ResponseDecision::silent(0);
        };

        let single_word = words.iter().all(|w| w == first);
        if !single_word || !self.triggers.contains(first) || count > self.max_repetitions {
            return ResponseDecision::silent(count);
        }

        let shout = vec![first.to_uppercase(); count as usize].join(" ");
        ResponseDecision::reply(format!("{} says {}", nickname, shout), count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_trigger_is_echoed() {
        let heuristic = RepetitionHeuristic::default();

        let decision = heuristic.evaluate("ok", "Alice");

        assert_eq!(decision.text(), Some("Alice says OK"));
        assert_eq!(decision.repetition_count, 1);
    }

    #[test]
    fn repeated_trigger_counts_every_occurrence() {
        let heuristic = RepetitionHeuristic::default();

        let decision = heuristic.evaluate("OK ok! ok...", "Bob");

        assert_eq!(decision.text(), Some("Bob says OK OK OK"));
        assert_eq!(decision.repetition_count, 3);
    }

    #[test]
    fn ordinary_text_gets_no_reply() {
        let heuristic = RepetitionHeuristic::default();

        let decision = heuristic.evaluate("hello hello world", "Alice");

        assert_eq!(decision.text(), None);
        assert_eq!(decision.repetition_count, 2);
    }

    #[test]
    fn trigger_mixed_with_other_words_is_ignored() {
        let heuristic = RepetitionHeuristic::default();

        let decision = heuristic.evaluate("ok then", "Alice");

        assert_eq!(decision.text(), None);
        assert_eq!(decision.repetition_count, 1);
    }

    #[test]
    fn empty_or_punctuation_only_content_counts_zero() {
        let heuristic = RepetitionHeuristic::default();

        assert_eq!(heuristic.evaluate("", "Alice"), ResponseDecision::silent(0));
        assert_eq!(heuristic.evaluate("?!  ...", "Alice"), ResponseDecision::silent(0));
    }

    #[test]
    fn repetitions_above_the_cap_are_left_alone() {
        let heuristic = RepetitionHeuristic::new(HeuristicConfig {
            triggers: vec!["ok".to_string()],
            max_repetitions: 3,
        });

        let decision = heuristic.evaluate("ok ok ok ok", "Alice");

        assert_eq!(decision.text(), None);
        assert_eq!(decision.repetition_count, 4);
    }

    #[test]
    fn custom_triggers_are_normalised() {
        let heuristic = RepetitionHeuristic::new(HeuristicConfig {
            triggers: vec!["  Yes ".to_string(), "".to_string()],
            max_repetitions: 10,
        });

        assert_eq!(heuristic.evaluate("yes", "Carol").text(), Some("Carol says YES"));
        assert_eq!(heuristic.evaluate("ok", "Carol").text(), None);
    }

    #[test]
    fn evaluation_is_deterministic() {
        let heuristic = RepetitionHeuristic::default();

        let first = heuristic.evaluate("k k", "Dave");
        let second = heuristic.evaluate("k k", "Dave");

        assert_eq!(first, second);
    }
}
