//! Error types for the settlement analysis.
//!
//! Validation failure is the only way a computation is aborted; the
//! arithmetic itself never fails (all divisions are guarded).

use thiserror::Error;

/// Result type for analysis operations.
pub type Result<T> = std::result::Result<T, ValidationFailure>;

/// The contract input failed validation.
///
/// Carries the ordered, human-readable pendency messages produced by the
/// validator. Callers must not render analysis results when this is
/// returned; the pendencies are the output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("contract input rejected with {} pendency(ies)", .pendencies.len())]
pub struct ValidationFailure {
    /// Ordered problem descriptions, one per violated rule
    pub pendencies: Vec<String>,
}

impl ValidationFailure {
    /// Wraps a non-empty list of pendency messages.
    pub fn new(pendencies: Vec<String>) -> Self {
        Self { pendencies }
    }
}
