//! Core domain layer for Dossier.
//!
//! This module contains pure business logic: the application aggregate, its
//! lifecycle states, and the portfolio arithmetic. All I/O, templating, and
//! rendering concerns are handled via ports (traits) defined in the
//! application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Immutable entities**: Domain records are read-only inputs; generation
//!   never mutates them
//! - **Rich domain model**: Behavior (name formatting, portfolio totals)
//!   lives on the entities, not in services

// Public API - what the world sees
pub mod entities;
pub mod error;

// Re-exports for convenience
pub use entities::{
    Application, ApplicationBuilder, ApplicationState, Fund, LegalEntity, Person, Product, Review,
};

pub use error::{DomainError, ErrorCategory};
