//! Static quality analysis of generated minigame artifacts.
//!
//! Runs seven independent weighted checks over the raw artifact text and
//! produces a [`TestReport`]. The analyzer is deterministic, pure and total:
//! absence of a feature scores zero, it is never raised as an error.
//!
//! Six checks are table-driven subcheck lists; the seventh is the
//! inverse-scored defect-pattern scan from [`crate::bug_patterns`].

use std::collections::BTreeMap;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::bug_patterns::{default_bug_patterns, scan_bug_patterns, BugPattern};
use crate::domain::{Artifact, CheckCategory, CheckResult, Grade, TestReport};
use crate::rules::TextRule;

// ---------------------------------------------------------------------------
// Check tables
// ---------------------------------------------------------------------------

/// One boolean probe within a check.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubcheckSpec {
    /// Short label used in issue strings.
    pub label: String,

    /// Rule evaluated against the artifact text.
    pub rule: TextRule,

    /// When true the subcheck passes only if the rule does NOT match
    /// (e.g. a known-wrong field alias must be absent).
    pub expect_absent: bool,
}

impl SubcheckSpec {
    pub fn present(label: &str, patterns: &[&str]) -> Self {
        Self {
            label: label.to_string(),
            rule: TextRule::any(patterns),
            expect_absent: false,
        }
    }

    pub fn absent(label: &str, patterns: &[&str]) -> Self {
        Self {
            label: label.to_string(),
            rule: TextRule::any(patterns),
            expect_absent: true,
        }
    }

    pub fn passes(&self, text: &str) -> bool {
        self.rule.matches(text) != self.expect_absent
    }
}

/// One weighted check: a category, a weight and its subcheck list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckSpec {
    pub category: CheckCategory,
    pub name: String,
    pub weight: u32,
    pub subchecks: Vec<SubcheckSpec>,
}

/// Analyzer configuration: the rubric as an explicit parameter object.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnalyzerConfig {
    /// Aggregate score required to pass.
    pub pass_threshold: u32,

    /// Subcheck-driven checks (six of the seven categories).
    pub checks: Vec<CheckSpec>,

    /// Weight of the defect-pattern scan.
    pub defect_scan_weight: u32,

    /// Points deducted per found pattern, regardless of severity.
    pub defect_penalty: u32,

    /// Pattern table for the defect scan.
    pub bug_patterns: Vec<BugPattern>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            pass_threshold: 60,
            checks: default_check_specs(),
            defect_scan_weight: 20,
            defect_penalty: 7,
            bug_patterns: default_bug_patterns(),
        }
    }
}

/// The shipped rubric for bridge-connected paddle minigames.
pub fn default_check_specs() -> Vec<CheckSpec> {
    vec![
        CheckSpec {
            category: CheckCategory::SdkIntegration,
            name: "sdk_integration".to_string(),
            weight: 20,
            subchecks: vec![
                SubcheckSpec::present("game bridge constructed", &[r"new\s+GameBridge\s*\("]),
                SubcheckSpec::present(
                    "bridge started",
                    &[r"\b(bridge|sdk)\s*\.\s*(start|init)\s*\("],
                ),
                SubcheckSpec::present("ready event wired", &[r#"\.on\s*\(\s*['"]ready['"]"#]),
                SubcheckSpec::present(
                    "sensor event wired",
                    &[r#"\.on\s*\(\s*['"]sensor(data)?['"]"#],
                ),
                SubcheckSpec::present(
                    "disconnect event wired",
                    &[r#"\.on\s*\(\s*['"]disconnect['"]"#],
                ),
                SubcheckSpec::present("payload field read", &[r"\.payload\b"]),
                SubcheckSpec::absent("rawData alias not used", &[r"\.rawData\b"]),
                SubcheckSpec::present("payload unwrapped", &[r"\{[^}]*\}\s*=\s*\w+\.payload"]),
            ],
        },
        CheckSpec {
            category: CheckCategory::SensorProcessing,
            name: "sensor_processing".to_string(),
            weight: 15,
            subchecks: vec![
                SubcheckSpec::present(
                    "dedicated sensor handler",
                    &[
                        r"function\s+(handleSensor|processSensor|onSensor)\w*\s*\(",
                        r"(handleSensor|processSensor|onSensor)\w*\s*=\s*(async\s*)?\(",
                    ],
                ),
                SubcheckSpec::present("orientation axes read", &[r"\b(alpha|beta|gamma)\b"]),
                SubcheckSpec::present(
                    "input clamped to bounds",
                    &[
                        r"Math\.max\s*\([^;\n]*Math\.min\s*\(",
                        r"Math\.min\s*\([^;\n]*Math\.max\s*\(",
                        r"\bclamp\s*\(",
                    ],
                ),
                SubcheckSpec::present(
                    "paddle driven by sensor input",
                    &[r"paddle\s*\.\s*[xy]\s*[+\-]?="],
                ),
            ],
        },
        CheckSpec {
            category: CheckCategory::MainLoop,
            name: "main_loop".to_string(),
            weight: 15,
            subchecks: vec![
                SubcheckSpec::present(
                    "update function",
                    &[r"function\s+update\s*\(", r"\bupdate\s*=\s*\([^)]*\)\s*=>"],
                ),
                SubcheckSpec::present(
                    "render function",
                    &[
                        r"function\s+(render|draw)\s*\(",
                        r"\b(render|draw)\s*=\s*\([^)]*\)\s*=>",
                    ],
                ),
                SubcheckSpec::present(
                    "loop function",
                    &[r"function\s+(gameLoop|mainLoop|tick)\s*\("],
                ),
                SubcheckSpec::present("frame scheduling", &[r"requestAnimationFrame\s*\("]),
            ],
        },
        CheckSpec {
            category: CheckCategory::Timer,
            name: "timer".to_string(),
            weight: 15,
            subchecks: vec![
                SubcheckSpec::present(
                    "countdown variable",
                    &[r"\b(timeLeft|timeRemaining|countdown)\b"],
                ),
                SubcheckSpec::present("interval primitive", &[r"setInterval\s*\("]),
                SubcheckSpec::present(
                    "countdown decremented",
                    &[
                        r"(timeLeft|timeRemaining|countdown)\s*--",
                        r"(timeLeft|timeRemaining|countdown)\s*-=\s*1",
                    ],
                ),
                SubcheckSpec::present(
                    "expiry threshold checked",
                    &[
                        r"(timeLeft|timeRemaining|countdown)\s*<=?\s*0",
                        r"(timeLeft|timeRemaining|countdown)\s*===?\s*0",
                    ],
                ),
            ],
        },
        CheckSpec {
            category: CheckCategory::StateManagement,
            name: "state_management".to_string(),
            weight: 10,
            subchecks: vec![
                SubcheckSpec::present("game-over flag", &[r"\bgameOver\b"]),
                SubcheckSpec::present("score variable", &[r"\bscore\b"]),
                SubcheckSpec::present("lives variable", &[r"\blives\b"]),
                SubcheckSpec::present("started flag", &[r"\bgameStarted\b"]),
            ],
        },
        CheckSpec {
            category: CheckCategory::UiRefresh,
            name: "ui_refresh".to_string(),
            weight: 5,
            subchecks: vec![
                SubcheckSpec::present(
                    "hud update function",
                    &[r"function\s+(updateUI|updateHud|refreshHud)\s*\("],
                ),
                SubcheckSpec::present(
                    "score bound to element",
                    &[
                        r"(scoreEl|scoreElement|scoreDisplay)\s*\.\s*(textContent|innerText)",
                        r#"getElementById\s*\(\s*['"]score"#,
                    ],
                ),
                SubcheckSpec::present(
                    "lives bound to element",
                    &[
                        r"(livesEl|livesElement|livesDisplay)\s*\.\s*(textContent|innerText)",
                        r#"getElementById\s*\(\s*['"]lives"#,
                    ],
                ),
            ],
        },
    ]
}

// ---------------------------------------------------------------------------
// Evaluation
// ---------------------------------------------------------------------------

/// Score an artifact against the default rubric.
pub fn test_artifact(artifact: &Artifact, artifact_id: &str) -> TestReport {
    test_artifact_with(&AnalyzerConfig::default(), artifact, artifact_id)
}

/// Score an artifact against an explicit rubric configuration.
pub fn test_artifact_with(
    config: &AnalyzerConfig,
    artifact: &Artifact,
    artifact_id: &str,
) -> TestReport {
    let mut checks = BTreeMap::new();
    for spec in &config.checks {
        checks.insert(spec.category, evaluate_check(spec, &artifact.text));
    }
    checks.insert(
        CheckCategory::DefectScan,
        evaluate_defect_scan(config, &artifact.text),
    );

    let score: u32 = checks.values().map(|c| c.score).sum();
    let grade = Grade::from_score(score);
    let passed = score >= config.pass_threshold;

    debug!(
        event = "analyzer.report",
        artifact_id = %artifact_id,
        score,
        grade = %grade,
        passed,
    );

    TestReport {
        artifact_id: artifact_id.to_string(),
        evaluated_at: Utc::now(),
        checks,
        score,
        grade,
        passed,
    }
}

fn evaluate_check(spec: &CheckSpec, text: &str) -> CheckResult {
    let total = spec.subchecks.len() as u32;
    let mut passed = 0u32;
    let mut issues = Vec::new();

    for sub in &spec.subchecks {
        if sub.passes(text) {
            passed += 1;
        } else {
            issues.push(format!("{}: {}", spec.name, sub.label));
        }
    }

    let success = passed == total;
    let score = if success {
        spec.weight
    } else if total == 0 {
        0
    } else {
        passed * spec.weight / total
    };

    CheckResult {
        category: spec.category,
        name: spec.name.clone(),
        passed_subchecks: passed,
        total_subchecks: total,
        success,
        score,
        weight: spec.weight,
        issues,
    }
}

fn evaluate_defect_scan(config: &AnalyzerConfig, text: &str) -> CheckResult {
    let hits = scan_bug_patterns(&config.bug_patterns, text);
    let total = config.bug_patterns.len() as u32;
    let found = hits.len() as u32;

    CheckResult {
        category: CheckCategory::DefectScan,
        name: "defect_scan".to_string(),
        passed_subchecks: total - found,
        total_subchecks: total,
        success: found == 0,
        score: config
            .defect_scan_weight
            .saturating_sub(found * config.defect_penalty),
        weight: config.defect_scan_weight,
        issues: hits.iter().map(|h| h.issue()).collect(),
    }
}
