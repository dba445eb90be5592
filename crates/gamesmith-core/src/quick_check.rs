//! Narrow per-category re-validation between repair attempts.
//!
//! Deliberately cheaper than a full analyzer pass: each category is probed
//! with a handful of signatures rather than its full subcheck list, and only
//! the defect scan is re-run in full. A clean quick validation therefore does
//! not guarantee that a full re-analysis of the category would also be clean;
//! the two tiers trade accuracy for cost and must not be collapsed.

use crate::bug_patterns::{scan_bug_patterns, BugPattern};
use crate::domain::CheckCategory;
use crate::rules::TextRule;

/// Re-check only the given categories over the new artifact text.
///
/// Returns the remaining issue strings; empty means the repair attempt is
/// considered resolved.
pub fn quick_validate(
    text: &str,
    categories: &[CheckCategory],
    patterns: &[BugPattern],
) -> Vec<String> {
    let mut issues = Vec::new();
    for category in categories {
        probe_category(*category, text, patterns, &mut issues);
    }
    issues
}

fn probe_category(
    category: CheckCategory,
    text: &str,
    patterns: &[BugPattern],
    issues: &mut Vec<String>,
) {
    match category {
        CheckCategory::SdkIntegration => {
            if TextRule::any(&[r"\.rawData\b"]).matches(text) {
                issues.push("sdk_integration: known-wrong rawData alias still present".to_string());
            }
            if !TextRule::any(&[r"\.payload\b"]).matches(text) {
                issues.push("sdk_integration: payload field not read".to_string());
            }
        }
        CheckCategory::SensorProcessing => {
            if !TextRule::any(&[
                r"function\s+(handleSensor|processSensor|onSensor)\w*\s*\(",
                r"(handleSensor|processSensor|onSensor)\w*\s*=\s*(async\s*)?\(",
            ])
            .matches(text)
            {
                issues.push("sensor_processing: no dedicated sensor handler".to_string());
            }
            if !TextRule::any(&[r"paddle\s*\.\s*[xy]\s*[+\-]?="]).matches(text) {
                issues.push("sensor_processing: paddle not driven by sensor input".to_string());
            }
        }
        CheckCategory::MainLoop => {
            if !TextRule::any(&[r"requestAnimationFrame\s*\("]).matches(text) {
                issues.push("main_loop: no frame scheduling call".to_string());
            }
            if !TextRule::any(&[r"function\s+update\s*\(", r"\bupdate\s*=\s*\([^)]*\)\s*=>"])
                .matches(text)
            {
                issues.push("main_loop: update function missing".to_string());
            }
        }
        CheckCategory::Timer => {
            if !TextRule::any(&[
                r"(timeLeft|timeRemaining|countdown)\s*--",
                r"(timeLeft|timeRemaining|countdown)\s*-=\s*1",
            ])
            .matches(text)
            {
                issues.push("timer: countdown is never decremented".to_string());
            }
            if !TextRule::any(&[
                r"(timeLeft|timeRemaining|countdown)\s*<=?\s*0",
                r"(timeLeft|timeRemaining|countdown)\s*===?\s*0",
            ])
            .matches(text)
            {
                issues.push("timer: no expiry threshold check".to_string());
            }
        }
        CheckCategory::DefectScan => {
            for hit in scan_bug_patterns(patterns, text) {
                issues.push(format!("defect_scan: {}", hit.issue()));
            }
        }
        CheckCategory::StateManagement => {
            if !TextRule::any(&[r"\bgameOver\b"]).matches(text) {
                issues.push("state_management: game-over flag missing".to_string());
            }
            if !TextRule::any(&[r"\bscore\b"]).matches(text) {
                issues.push("state_management: score variable missing".to_string());
            }
        }
        CheckCategory::UiRefresh => {
            if !TextRule::any(&[r"function\s+(updateUI|updateHud|refreshHud)\s*\("]).matches(text) {
                issues.push("ui_refresh: no hud update function".to_string());
            }
        }
    }
}
