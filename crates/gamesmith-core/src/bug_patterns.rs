//! Named defect signatures with protection exemptions.
//!
//! A pattern counts as found only when its detection rule matches and its
//! protection rule does not. The shipped table covers the defects the
//! generator is known to reintroduce; callers may supply their own table.

use serde::{Deserialize, Serialize};

use crate::rules::TextRule;

/// A named structural defect signature plus its exemption signature.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BugPattern {
    /// Stable identifier.
    pub name: String,

    /// Human-readable description used in issue strings.
    pub description: String,

    /// Signature indicating the defect is present.
    pub detection: TextRule,

    /// Signature indicating the defect is guarded against.
    pub protection: TextRule,

    /// Critical patterns produce "critical:" issues, others "potential:".
    /// Severity does not change the score penalty.
    pub critical: bool,
}

/// One found pattern.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PatternHit {
    pub name: String,
    pub description: String,
    pub critical: bool,
}

impl PatternHit {
    /// Issue string as it appears in reports and quick validation.
    pub fn issue(&self) -> String {
        if self.critical {
            format!("critical: {}", self.description)
        } else {
            format!("potential: {}", self.description)
        }
    }
}

/// Scan the artifact text against a pattern table.
pub fn scan_bug_patterns(patterns: &[BugPattern], text: &str) -> Vec<PatternHit> {
    patterns
        .iter()
        .filter(|p| p.detection.matches(text) && !p.protection.matches(text))
        .map(|p| PatternHit {
            name: p.name.clone(),
            description: p.description.clone(),
            critical: p.critical,
        })
        .collect()
}

/// Default pattern table for generated paddle-and-ball minigames.
pub fn default_bug_patterns() -> Vec<BugPattern> {
    vec![
        BugPattern {
            name: "ball_pinned_to_paddle".to_string(),
            description: "ball position is pinned to the paddle outside a pre-start guard"
                .to_string(),
            detection: TextRule::any(&[r"ball\s*\.\s*x\s*=\s*paddle\s*\.\s*x"]),
            protection: TextRule::any(&[r"!\s*gameStarted"]),
            critical: true,
        },
        BugPattern {
            name: "unguarded_velocity_reversal".to_string(),
            description: "collision response reverses velocity without a directional guard"
                .to_string(),
            detection: TextRule::any(&[
                r"ball\s*\.\s*(vy|dy)\s*=\s*-\s*ball\s*\.\s*(vy|dy)",
                r"ball\s*\.\s*(vy|dy)\s*\*=\s*-1",
            ]),
            protection: TextRule::any(&[r"ball\s*\.\s*(vy|dy)\s*[<>]"]),
            critical: false,
        },
        BugPattern {
            name: "game_over_without_return".to_string(),
            description: "game-over flag is set without a subsequent early return".to_string(),
            detection: TextRule::any(&[r"gameOver\s*=\s*true"]),
            protection: TextRule::any(&[
                r"gameOver\s*=\s*true\s*;?[\s\S]{0,120}?\breturn\b",
                r"if\s*\(\s*gameOver\s*\)\s*\{?\s*return",
            ]),
            critical: true,
        },
    ]
}
