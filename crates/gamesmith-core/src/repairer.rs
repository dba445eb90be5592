//! External repair capability boundary.

use async_trait::async_trait;

use crate::domain::RepairError;

/// Trait for external generative repair backends.
///
/// Implementations receive the full artifact text, the batch of issue
/// descriptions and the 1-based attempt number, and return a complete
/// replacement artifact text. A backend that cannot produce extractable
/// program text (e.g. no recognizable program boundaries in its output)
/// must return an error rather than partial output.
///
/// Backends are stateless from the orchestrator's point of view and may be
/// shared across concurrent pipeline invocations.
#[async_trait]
pub trait CodeRepairer: Send + Sync {
    async fn repair(
        &self,
        artifact_text: &str,
        issues: &[String],
        attempt: u32,
    ) -> Result<String, RepairError>;
}
