//! Application layer errors.
//!
//! These errors represent collaborator failures during orchestration, not
//! business logic. Business logic errors are `DomainError` from
//! `crate::domain`.
//!
//! A missing application or an unsupported lifecycle state is deliberately
//! NOT represented here — those degrade to a logged warning plus an absent
//! result instead of an error.

use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while orchestrating document generation.
#[derive(Debug, Error, Clone)]
pub enum GenerationError {
    /// The backing store could not be queried (connectivity, poisoned lock).
    #[error("Application store unavailable: {reason}")]
    StoreUnavailable { reason: String },

    /// No template path is registered for a logical template name.
    #[error("No template registered under '{name}'")]
    UnknownTemplate { name: String },

    /// View rendering failed.
    #[error("View rendering failed for '{template_ref}': {reason}")]
    RenderingFailed { template_ref: String, reason: String },

    /// HTML-to-PDF conversion failed.
    #[error("PDF conversion failed: {reason}")]
    PdfConversion { reason: String },
}

impl GenerationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::StoreUnavailable { reason } => vec![
                format!("Store failure: {}", reason),
                "Check that the application store is reachable and retry".into(),
            ],
            Self::UnknownTemplate { name } => vec![
                format!("Missing template mapping for '{}'", name),
                "Register the template with the path provider".into(),
            ],
            Self::RenderingFailed { template_ref, .. } => vec![
                format!("Could not render '{}'", template_ref),
                "Check that the template exists under the configured base URI".into(),
            ],
            Self::PdfConversion { .. } => vec![
                "The markup could not be converted to PDF".into(),
                "Re-run with -vv to see the renderer diagnostics".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::StoreUnavailable { .. } => ErrorCategory::Internal,
            Self::UnknownTemplate { .. } => ErrorCategory::NotFound,
            Self::RenderingFailed { .. } => ErrorCategory::Internal,
            Self::PdfConversion { .. } => ErrorCategory::Internal,
        }
    }
}
