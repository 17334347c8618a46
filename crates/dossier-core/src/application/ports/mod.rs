//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `dossier-adapters` implement
//! these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `ApplicationRepository`: record lookup
//!   - `TemplatePathProvider`: logical name → path fragment
//!   - `ViewRenderer`: view model → markup
//!   - `PdfRenderer`: markup → PDF artifact
//!
//! Configuration is deliberately NOT a port: it is the immutable
//! [`crate::application::GeneratorConfig`] value injected at construction.

pub mod output;

pub use output::{ApplicationRepository, PdfRenderer, TemplatePathProvider, ViewRenderer};
