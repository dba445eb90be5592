//! Scoring report types: check categories, per-check results, letter grades.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The seven scoring categories of the quality rubric.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum CheckCategory {
    SdkIntegration,
    SensorProcessing,
    MainLoop,
    Timer,
    DefectScan,
    StateManagement,
    UiRefresh,
}

impl CheckCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            CheckCategory::SdkIntegration => "sdk_integration",
            CheckCategory::SensorProcessing => "sensor_processing",
            CheckCategory::MainLoop => "main_loop",
            CheckCategory::Timer => "timer",
            CheckCategory::DefectScan => "defect_scan",
            CheckCategory::StateManagement => "state_management",
            CheckCategory::UiRefresh => "ui_refresh",
        }
    }
}

impl fmt::Display for CheckCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Letter grade derived from the aggregate score.
///
/// Variants are declared worst-to-best so the derived ordering follows the
/// score thresholds.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Grade {
    F,
    D,
    C,
    CPlus,
    B,
    BPlus,
    A,
    APlus,
}

impl Grade {
    /// Map an aggregate score (0–100) to its grade.
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= 90 => Grade::APlus,
            s if s >= 85 => Grade::A,
            s if s >= 80 => Grade::BPlus,
            s if s >= 75 => Grade::B,
            s if s >= 70 => Grade::CPlus,
            s if s >= 65 => Grade::C,
            s if s >= 60 => Grade::D,
            _ => Grade::F,
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::BPlus => "B+",
            Grade::B => "B",
            Grade::CPlus => "C+",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        };
        f.write_str(s)
    }
}

/// Outcome of one weighted check category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckResult {
    /// Which category this result belongs to.
    pub category: CheckCategory,

    /// Check name (for reporting).
    pub name: String,

    /// Subchecks that passed.
    pub passed_subchecks: u32,

    /// Subchecks evaluated.
    pub total_subchecks: u32,

    /// True iff every subcheck passed.
    pub success: bool,

    /// Points awarded: the full weight on success, otherwise
    /// `passed * weight / total` (integer floor).
    pub score: u32,

    /// Maximum points this check can award.
    pub weight: u32,

    /// One entry per failed subcheck or found defect pattern.
    pub issues: Vec<String>,
}

/// Aggregate scoring result for one artifact version.
///
/// Created fresh by every analyzer run and never mutated afterward.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TestReport {
    /// Caller-supplied artifact identifier.
    pub artifact_id: String,

    /// When the analysis ran.
    pub evaluated_at: DateTime<Utc>,

    /// Per-category results, in stable category order.
    pub checks: BTreeMap<CheckCategory, CheckResult>,

    /// Sum of all check scores (0–100).
    pub score: u32,

    /// Letter grade for `score`.
    pub grade: Grade,

    /// True iff `score` meets the pass threshold.
    pub passed: bool,
}

impl TestReport {
    /// Checks that did not fully pass, in category order.
    pub fn failing_checks(&self) -> Vec<&CheckResult> {
        self.checks.values().filter(|c| !c.success).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_thresholds() {
        assert_eq!(Grade::from_score(100), Grade::APlus);
        assert_eq!(Grade::from_score(90), Grade::APlus);
        assert_eq!(Grade::from_score(89), Grade::A);
        assert_eq!(Grade::from_score(85), Grade::A);
        assert_eq!(Grade::from_score(80), Grade::BPlus);
        assert_eq!(Grade::from_score(75), Grade::B);
        assert_eq!(Grade::from_score(70), Grade::CPlus);
        assert_eq!(Grade::from_score(65), Grade::C);
        assert_eq!(Grade::from_score(62), Grade::D);
        assert_eq!(Grade::from_score(60), Grade::D);
        assert_eq!(Grade::from_score(59), Grade::F);
        assert_eq!(Grade::from_score(0), Grade::F);
    }

    #[test]
    fn test_grade_is_monotonic_in_score() {
        for score in 0u32..100 {
            assert!(Grade::from_score(score) <= Grade::from_score(score + 1));
        }
    }

    #[test]
    fn test_grade_display() {
        assert_eq!(Grade::APlus.to_string(), "A+");
        assert_eq!(Grade::BPlus.to_string(), "B+");
        assert_eq!(Grade::F.to_string(), "F");
    }

    #[test]
    fn test_category_serde_uses_snake_case() {
        let json = serde_json::to_string(&CheckCategory::SdkIntegration).expect("serialize");
        assert_eq!(json, "\"sdk_integration\"");
    }

    #[test]
    fn test_check_result_serde_roundtrip() {
        let result = CheckResult {
            category: CheckCategory::Timer,
            name: "timer".to_string(),
            passed_subchecks: 3,
            total_subchecks: 4,
            success: false,
            score: 11,
            weight: 15,
            issues: vec!["timer: countdown is never decremented".to_string()],
        };
        let json = serde_json::to_string(&result).expect("serialize");
        let deserialized: CheckResult = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(result, deserialized);
    }
}
