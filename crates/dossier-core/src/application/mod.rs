//! Application layer for Dossier.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (DocumentService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **View models**: Flat per-state projections driving rendering
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod config;
pub mod error;
pub mod pdf;
pub mod ports;
pub mod services;
pub mod view_model;

// Re-export main service and configuration
pub use config::GeneratorConfig;
pub use services::DocumentService;

// Re-export port traits (for adapter implementation)
pub use ports::{ApplicationRepository, PdfRenderer, TemplatePathProvider, ViewRenderer};

pub use error::GenerationError;
