//! Domain layer errors.
//!
//! All errors are:
//! - Cloneable (callers may need to inspect and re-wrap)
//! - Categorizable (for CLI display)
//! - Actionable (provides suggestions)

use thiserror::Error;

/// Root domain error type.
///
/// Domain errors are data-integrity violations: a record that should not have
/// been able to exist in that shape reached the core. They are always fatal.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid application '{reference}': {reason}")]
    InvalidApplication { reference: String, reason: String },

    /// An application marked `InReview` carries no review record.
    ///
    /// The in-review document embeds the review reason verbatim, so there is
    /// no sensible degraded rendering for this case.
    #[error("Application '{reference}' is in review but has no review record")]
    MissingReview { reference: String },

    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidApplication { reference, reason } => vec![
                format!("Application '{}' failed validation: {}", reference, reason),
                "Fix the record in the backing store before requesting a document".into(),
            ],
            Self::MissingReview { reference } => vec![
                format!("Application '{}' is flagged as in review", reference),
                "Attach the review record, or correct the lifecycle state".into(),
            ],
            Self::MissingRequiredField { field } => {
                vec![format!("Set the '{}' field before building", field)]
            }
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidApplication { .. } => ErrorCategory::Validation,
            Self::MissingReview { .. } => ErrorCategory::Integrity,
            Self::MissingRequiredField { .. } => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Integrity,
    Internal,
}
