//! Application services - orchestrate use cases.
//!
//! `DocumentService` coordinates the ports to accomplish the one use case:
//! "generate the PDF document for an application". The per-state view-model
//! builders live beside it as pure functions.

pub mod document_service;
pub mod view_builders;

pub use document_service::DocumentService;
