//! Domain-level error taxonomy for gamesmith.

/// Errors produced by template assembly.
///
/// These are fatal contract violations: no partial output is produced and no
/// repair is attempted on this failure class.
#[derive(Debug, thiserror::Error)]
pub enum AssembleError {
    #[error("structure template is missing marker {marker:?}")]
    MissingMarker { marker: &'static str },

    #[error("structure template contains marker {marker:?} more than once")]
    AmbiguousMarker { marker: &'static str },

    #[error("logic markers out of order: {begin:?} must precede {end:?}")]
    MarkersOutOfOrder {
        begin: &'static str,
        end: &'static str,
    },
}

/// Errors surfaced by an external code repairer.
///
/// Recoverable per attempt: the orchestrator folds them into the fix log as
/// opaque strings and continues with the next attempt.
#[derive(Debug, thiserror::Error)]
pub enum RepairError {
    #[error("repair backend failed: {0}")]
    Backend(String),

    #[error("repair output contained no extractable program text")]
    NoExtractableOutput,

    #[error("repair attempt timed out after {0}ms")]
    Timeout(u64),
}
