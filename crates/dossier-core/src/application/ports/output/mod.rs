//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what document generation needs from external systems.
//! The `dossier-adapters` crate provides implementations.

use uuid::Uuid;

use crate::application::pdf::{PdfArtifact, PdfOptions};
use crate::application::view_model::DocumentView;
use crate::error::DossierResult;

/// Port for application lookup.
///
/// Implemented by:
/// - `dossier_adapters::repository::InMemoryApplicationRepository` (demo/testing)
/// - a database-backed repository in production deployments
///
/// ## Design Notes
///
/// - `Ok(None)` is the one non-fatal absence signal: the id matched nothing.
/// - Any `Err` is a store failure and propagates to the caller unchanged.
/// - At most one record can match an id; a store that can hold duplicates is
///   out of contract.
pub trait ApplicationRepository: Send + Sync {
    /// Fetch the application with the given identifier, if it exists.
    fn find_by_id(&self, id: Uuid) -> DossierResult<Option<crate::domain::Application>>;
}

/// Port for resolving logical template names to path fragments.
///
/// Implemented by:
/// - `dossier_adapters::StaticPathProvider` (fixed routing table)
pub trait TemplatePathProvider: Send + Sync {
    /// Resolve a logical name (e.g. `"PendingApplication"`) to a path
    /// fragment that, concatenated with the base URI, locates the template.
    fn resolve(&self, logical_name: &str) -> DossierResult<String>;
}

/// Port for rendering a view model into markup.
///
/// Implemented by:
/// - `dossier_adapters::SubstitutionViewRenderer` (variable substitution)
pub trait ViewRenderer: Send + Sync {
    /// Render the view at the resolved template reference into markup.
    fn render(&self, template_ref: &str, view: &DocumentView) -> DossierResult<String>;
}

/// Port for converting markup to a PDF artifact.
///
/// Implemented by:
/// - `dossier_adapters::MinimalPdfRenderer` (single-column lopdf output)
pub trait PdfRenderer: Send + Sync {
    /// Render markup with the given fixed layout options.
    fn render_from_html(&self, markup: &str, options: &PdfOptions) -> DossierResult<PdfArtifact>;
}
