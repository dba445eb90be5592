//! Text-rule primitive shared by the rubric checks and the defect scan.
//!
//! A [`TextRule`] is an any-of list of regex patterns evaluated over the raw
//! artifact text. Rules are data, not code, so check tables stay pluggable.

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// An any-of set of regex patterns over raw artifact text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TextRule {
    /// Patterns; the rule matches when any of them does.
    pub any_of: Vec<String>,
}

impl TextRule {
    /// Build a rule from pattern literals.
    pub fn any(patterns: &[&str]) -> Self {
        Self {
            any_of: patterns.iter().map(|p| (*p).to_string()).collect(),
        }
    }

    /// True when any pattern matches the text.
    ///
    /// An invalid pattern counts as a non-match (logged at warn level) so
    /// that analysis over caller-supplied rule tables stays total.
    pub fn matches(&self, text: &str) -> bool {
        self.any_of.iter().any(|pattern| match Regex::new(pattern) {
            Ok(re) => re.is_match(text),
            Err(err) => {
                warn!(event = "rule.invalid_pattern", pattern = %pattern, error = %err);
                false
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_of_matches_first_or_later_pattern() {
        let rule = TextRule::any(&[r"setInterval\s*\(", r"setTimeout\s*\("]);
        assert!(rule.matches("setInterval(tick, 1000);"));
        assert!(rule.matches("setTimeout(tick, 1000);"));
        assert!(!rule.matches("requestAnimationFrame(tick);"));
    }

    #[test]
    fn test_invalid_pattern_is_a_non_match() {
        let rule = TextRule::any(&["[unclosed"]);
        assert!(!rule.matches("anything"));
    }

    #[test]
    fn test_serde_roundtrip() {
        let rule = TextRule::any(&[r"\bscore\b"]);
        let json = serde_json::to_string(&rule).expect("serialize");
        let deserialized: TextRule = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(rule, deserialized);
    }
}
