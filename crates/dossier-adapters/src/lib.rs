//! Infrastructure adapters for Dossier.
//!
//! This crate implements the ports defined in `dossier_core::application::ports`.
//! It contains all external dependencies and I/O-adjacent concerns.

pub mod builtin_templates;
pub mod path_provider;
pub mod pdf;
pub mod renderer;
pub mod repository;
pub mod seed;

// Re-export commonly used adapters
pub use path_provider::StaticPathProvider;
pub use pdf::MinimalPdfRenderer;
pub use renderer::SubstitutionViewRenderer;
pub use repository::InMemoryApplicationRepository;
