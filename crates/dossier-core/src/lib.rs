//! Dossier Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Dossier
//! document generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          dossier-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │           (DocumentService)             │
//! │     Orchestrates Document Generation    │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │  (Driven: Repository, Paths, Renderer,  │
//! │            PdfRenderer)                 │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    dossier-adapters (Infrastructure)    │
//! │  (InMemoryApplicationRepository, etc)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (Application, Person, Product, Fund)   │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use dossier_core::{
//!     application::{DocumentService, GeneratorConfig},
//! };
//!
//! // 1. Immutable configuration, validated once up front
//! let config = GeneratorConfig::new("support@example.com", "The Dossier Team", tax_rate)?;
//!
//! // 2. Use application service (with injected adapters)
//! let service = DocumentService::new(repository, paths, views, pdf, config)?;
//! let bytes = service.generate(application_id, "https://docs.example.com/")?;
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        DocumentService, GeneratorConfig,
        pdf::{HeaderOptions, HeaderRepeat, PageNumbers, PdfArtifact, PdfOptions},
        ports::{ApplicationRepository, PdfRenderer, TemplatePathProvider, ViewRenderer},
        view_model::{ActivatedView, DocumentView, InReviewView, PendingView},
    };
    pub use crate::domain::{
        Application, ApplicationBuilder, ApplicationState, Fund, LegalEntity, Person, Product,
        Review,
    };
    pub use crate::error::{DossierError, DossierResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
