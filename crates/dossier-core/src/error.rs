//! Unified error handling for Dossier Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::GenerationError;
use crate::domain::DomainError;

/// Root error type for Dossier Core operations.
///
/// This enum wraps all possible errors that can occur when using dossier-core,
/// providing a unified interface for error handling.
///
/// Note that "application not found" and "unsupported lifecycle state" are NOT
/// errors: [`crate::application::DocumentService::generate`] degrades those to
/// a logged warning plus an absent result. Everything represented here is
/// fatal and propagates to the caller unchanged.
#[derive(Debug, Error, Clone)]
pub enum DossierError {
    /// Errors from the domain layer (data-integrity violations).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (collaborator failures).
    #[error("Generation error: {0}")]
    Generation(#[from] GenerationError),

    /// Configuration or setup errors (rejected at construction time).
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl DossierError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Generation(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {}", message),
                "Check the document settings (support email, signature, tax rate)".into(),
            ],
            Self::Internal { .. } => vec![
                "This appears to be a bug in Dossier".into(),
                "Please report this issue at: https://github.com/dossier-dev/dossier/issues".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Integrity => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Generation(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type DossierResult<T> = Result<T, DossierError>;
