//! Bounded repair orchestration.
//!
//! Given a failing [`TestReport`], drives an external [`CodeRepairer`]
//! through a bounded number of attempts, re-validating narrowly after each
//! one. Every failure mode — backend errors, per-attempt timeouts, an
//! elapsed overall deadline, exhausted retries — is absorbed into the
//! returned [`RepairResult`]; the orchestrator itself never errors.
//!
//! Each successful attempt replaces the current artifact wholesale. A later
//! attempt can therefore silently lose a fix applied by an earlier one if
//! the backend regenerates unrelated regions; this is a known limitation of
//! the replace-whole-artifact policy, kept for its simplicity.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::time::{timeout, Instant};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::bug_patterns::default_bug_patterns;
use crate::domain::{Artifact, CheckCategory, RepairAttempt, RepairError, RepairResult, TestReport};
use crate::quick_check::quick_validate;
use crate::repairer::CodeRepairer;

/// Policy governing one repair invocation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RepairPolicy {
    /// Maximum number of repair attempts before giving up.
    pub max_attempts: u32,

    /// Timeout applied to each individual backend call.
    pub attempt_timeout: Duration,

    /// Optional deadline spanning the whole retry loop. When it elapses
    /// mid-loop the orchestrator stops and returns the best artifact so far.
    pub overall_deadline: Option<Duration>,
}

impl Default for RepairPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            attempt_timeout: Duration::from_secs(60),
            overall_deadline: None,
        }
    }
}

/// Drive the bounded repair loop for a failing report.
///
/// Passing reports return immediately: success, zero attempts, empty log,
/// artifact unchanged. Otherwise the failing checks are extracted as one
/// batch of issues and the backend is invoked up to `max_attempts` times,
/// with a narrow quick validation of the originally failing categories after
/// each applied attempt. Cancellation is cooperative: dropping the returned
/// future aborts the in-flight backend call at its next await point without
/// affecting other invocations.
pub async fn fix_defects(
    repairer: &dyn CodeRepairer,
    artifact: Artifact,
    report: &TestReport,
    policy: &RepairPolicy,
) -> RepairResult {
    if report.passed {
        return RepairResult {
            success: true,
            final_artifact: artifact,
            attempts: 0,
            fix_log: Vec::new(),
            message: None,
        };
    }

    let failing = report.failing_checks();
    let categories: Vec<CheckCategory> = failing.iter().map(|c| c.category).collect();
    let issues: Vec<String> = failing.iter().flat_map(|c| c.issues.clone()).collect();
    let patterns = default_bug_patterns();

    let run_id = Uuid::new_v4();
    info!(
        event = "repair.started",
        run_id = %run_id,
        artifact_id = %report.artifact_id,
        failing_checks = failing.len(),
        issues = issues.len(),
    );

    let deadline = policy.overall_deadline.map(|d| Instant::now() + d);
    let mut current = artifact;
    let mut fix_log: Vec<RepairAttempt> = Vec::new();

    for attempt in 1..=policy.max_attempts {
        let budget = match remaining_budget(deadline, policy.attempt_timeout) {
            Some(budget) => budget,
            None => {
                info!(event = "repair.deadline_elapsed", run_id = %run_id, attempt);
                let attempts = fix_log.len() as u32;
                return RepairResult {
                    success: false,
                    final_artifact: current,
                    attempts,
                    fix_log,
                    message: Some("overall repair deadline elapsed".to_string()),
                };
            }
        };

        match timeout(budget, repairer.repair(&current.text, &issues, attempt)).await {
            Err(_) => {
                let err = RepairError::Timeout(budget.as_millis() as u64);
                warn!(event = "repair.attempt_timeout", run_id = %run_id, attempt);
                fix_log.push(RepairAttempt::failed(attempt, err.to_string()));
            }
            Ok(Err(err)) => {
                warn!(event = "repair.attempt_failed", run_id = %run_id, attempt, error = %err);
                fix_log.push(RepairAttempt::failed(attempt, err.to_string()));
            }
            Ok(Ok(text)) => {
                current = Artifact::new(text);
                fix_log.push(RepairAttempt::applied(
                    attempt,
                    issues.clone(),
                    current.digest(),
                ));

                let remaining = quick_validate(&current.text, &categories, &patterns);
                if remaining.is_empty() {
                    info!(event = "repair.resolved", run_id = %run_id, attempts = attempt);
                    return RepairResult {
                        success: true,
                        final_artifact: current,
                        attempts: attempt,
                        fix_log,
                        message: None,
                    };
                }
                debug!(
                    event = "repair.residual_issues",
                    run_id = %run_id,
                    attempt,
                    remaining = remaining.len(),
                );
            }
        }
    }

    info!(event = "repair.exhausted", run_id = %run_id, attempts = policy.max_attempts);
    RepairResult {
        success: false,
        final_artifact: current,
        attempts: policy.max_attempts,
        fix_log,
        message: Some("residual defects may remain".to_string()),
    }
}

fn remaining_budget(deadline: Option<Instant>, attempt_timeout: Duration) -> Option<Duration> {
    match deadline {
        None => Some(attempt_timeout),
        Some(deadline) => {
            let now = Instant::now();
            if now >= deadline {
                None
            } else {
                Some(attempt_timeout.min(deadline - now))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_default() {
        let policy = RepairPolicy::default();
        assert_eq!(policy.max_attempts, 3);
        assert_eq!(policy.attempt_timeout, Duration::from_secs(60));
        assert!(policy.overall_deadline.is_none());
    }

    #[test]
    fn test_policy_serde_roundtrip() {
        let policy = RepairPolicy {
            max_attempts: 2,
            attempt_timeout: Duration::from_millis(500),
            overall_deadline: Some(Duration::from_secs(5)),
        };
        let json = serde_json::to_string(&policy).expect("serialize");
        let deserialized: RepairPolicy = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(policy, deserialized);
    }

    #[tokio::test(start_paused = true)]
    async fn test_remaining_budget_caps_at_deadline() {
        let deadline = Some(Instant::now() + Duration::from_secs(10));
        let budget = remaining_budget(deadline, Duration::from_secs(60)).expect("budget");
        assert!(budget <= Duration::from_secs(10));

        tokio::time::advance(Duration::from_secs(11)).await;
        assert!(remaining_budget(deadline, Duration::from_secs(60)).is_none());
    }
}
