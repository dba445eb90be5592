//! Program artifact under analysis and repair.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// A complete program text being graded or repaired.
///
/// Artifacts are immutable per version: every repair attempt produces a new
/// `Artifact` that replaces the previous one wholesale, never a diff.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Artifact {
    /// Full program text.
    pub text: String,
}

impl Artifact {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Hex-encoded sha256 of the artifact text, used for audit records.
    pub fn digest(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.text.as_bytes());
        hex::encode(hasher.finalize())
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
