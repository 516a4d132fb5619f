//! Error kinds raised by the AHP engine.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Failures of matrix construction, solving, consistency and synthesis.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AhpError {
    /// Fewer than two elements, a non-positive ratio, or a malformed pair.
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },

    /// Power iteration exhausted its cap without stabilizing.
    #[error("Priority vector did not converge after {iterations} iterations (residual {residual:e})")]
    NonConvergence { iterations: usize, residual: f64 },

    /// Consistency ratio above the accepted threshold.
    #[error(
        "Judgments for '{comparison}' are inconsistent: CR {consistency_ratio:.4} exceeds {threshold:.2}"
    )]
    InconsistentJudgments {
        comparison: String,
        consistency_ratio: f64,
        threshold: f64,
    },

    /// Alternative sets differ across criteria, or a block is missing.
    #[error("Hierarchy mismatch: {reason}")]
    HierarchyMismatch { reason: String },
}

impl AhpError {
    /// Creates an invalid input error.
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        AhpError::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Creates a hierarchy mismatch error.
    pub fn hierarchy_mismatch(reason: impl Into<String>) -> Self {
        AhpError::HierarchyMismatch {
            reason: reason.into(),
        }
    }

    /// Returns the error code used when this error crosses into the application layer.
    pub fn code(&self) -> ErrorCode {
        match self {
            AhpError::InvalidInput { .. } => ErrorCode::InvalidInput,
            AhpError::NonConvergence { .. } => ErrorCode::NonConvergence,
            AhpError::InconsistentJudgments { .. } => ErrorCode::InconsistentJudgments,
            AhpError::HierarchyMismatch { .. } => ErrorCode::HierarchyMismatch,
        }
    }

    /// True for errors the caller may choose to override (re-elicit or proceed).
    pub fn is_recoverable(&self) -> bool {
        matches!(self, AhpError::InconsistentJudgments { .. })
    }
}

impl From<AhpError> for DomainError {
    fn from(err: AhpError) -> Self {
        let code = err.code();
        let message = err.to_string();
        let domain = DomainError::new(code, message);

        match err {
            AhpError::InvalidInput { reason } | AhpError::HierarchyMismatch { reason } => {
                domain.with_detail("reason", reason)
            }
            AhpError::NonConvergence {
                iterations,
                residual,
            } => domain
                .with_detail("iterations", iterations.to_string())
                .with_detail("residual", residual.to_string()),
            AhpError::InconsistentJudgments {
                comparison,
                consistency_ratio,
                threshold,
            } => domain
                .with_detail("comparison", comparison)
                .with_detail("consistency_ratio", consistency_ratio.to_string())
                .with_detail("threshold", threshold.to_string()),
        }
    }
}
