//! Gamesmith Core Library
//!
//! Quality harness and bounded self-repair loop for generated minigame
//! artifacts: template assembly, a weighted static scoring rubric, a
//! defect-pattern scan with protection exemptions, and an orchestrated
//! retry loop around an external generative repairer.
//!
//! Callers can distinguish three pipeline outcomes: assembly failed
//! (`Err(AssembleError)` — fatal, no repair attempted), fully resolved
//! (`RepairResult { success: true, .. }`), and partially improved but
//! unresolved (`RepairResult { success: false, .. }`).

pub mod analyzer;
pub mod assembler;
pub mod bug_patterns;
pub mod domain;
pub mod quick_check;
pub mod render;
pub mod repair_loop;
pub mod repairer;
pub mod rules;
pub mod telemetry;

pub use analyzer::{
    default_check_specs, test_artifact, test_artifact_with, AnalyzerConfig, CheckSpec, SubcheckSpec,
};
pub use assembler::{assemble, LOGIC_BEGIN_MARKER, LOGIC_END_MARKER};
pub use bug_patterns::{default_bug_patterns, scan_bug_patterns, BugPattern, PatternHit};
pub use domain::{
    Artifact, AssembleError, CheckCategory, CheckResult, Grade, RepairAttempt, RepairError,
    RepairResult, TestReport,
};
pub use quick_check::quick_validate;
pub use render::render;
pub use repair_loop::{fix_defects, RepairPolicy};
pub use repairer::CodeRepairer;
pub use rules::TextRule;
pub use telemetry::init_tracing;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
