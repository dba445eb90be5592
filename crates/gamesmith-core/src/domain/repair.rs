//! Repair-loop audit records and the orchestrator result object.

use serde::{Deserialize, Serialize};

use crate::domain::artifact::Artifact;

/// One iteration of the repair loop, appended to the fix log in order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RepairAttempt {
    /// 1-based attempt number.
    pub sequence: u32,

    /// Issue batch handed to the repairer on this attempt.
    pub issues_addressed: Vec<String>,

    /// Whether the repairer produced a replacement artifact.
    pub applied: bool,

    /// Opaque failure message when `applied` is false.
    pub error: Option<String>,

    /// Digest of the replacement artifact when `applied` is true.
    pub artifact_digest: Option<String>,
}

impl RepairAttempt {
    /// Record a successful attempt that replaced the artifact.
    pub fn applied(sequence: u32, issues_addressed: Vec<String>, artifact_digest: String) -> Self {
        Self {
            sequence,
            issues_addressed,
            applied: true,
            error: None,
            artifact_digest: Some(artifact_digest),
        }
    }

    /// Record a failed attempt; the current artifact is kept as-is.
    pub fn failed(sequence: u32, error: impl Into<String>) -> Self {
        Self {
            sequence,
            issues_addressed: Vec::new(),
            applied: false,
            error: Some(error.into()),
            artifact_digest: None,
        }
    }
}

/// Final outcome of one repair invocation.
///
/// The orchestrator never returns an `Err`: exhausted retries, per-attempt
/// failures and deadline expiry are all expressed through `success`,
/// `fix_log` and `message`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RepairResult {
    /// True iff quick validation reported clean before attempts ran out.
    pub success: bool,

    /// Last artifact version held by the loop (possibly improved even when
    /// `success` is false; the original when every attempt failed).
    pub final_artifact: Artifact,

    /// Attempts actually issued (0 when the report already passed).
    pub attempts: u32,

    /// Ordered history of attempts; never longer than the policy maximum.
    pub fix_log: Vec<RepairAttempt>,

    /// Present on unresolved outcomes.
    pub message: Option<String>,
}
