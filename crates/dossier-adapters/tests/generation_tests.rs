//! End-to-end generation through the built-in adapters.
//!
//! Wires the seeded in-memory repository, the static path provider, the
//! substitution renderer, and the minimal PDF renderer into a
//! `DocumentService` and drives full generations.

use std::sync::{Arc, Mutex};

use rust_decimal::Decimal;
use uuid::Uuid;

use dossier_adapters::{
    InMemoryApplicationRepository, MinimalPdfRenderer, StaticPathProvider,
    SubstitutionViewRenderer, seed,
};
use dossier_core::application::pdf::{PdfArtifact, PdfOptions};
use dossier_core::application::ports::{PdfRenderer, ViewRenderer};
use dossier_core::application::view_model::DocumentView;
use dossier_core::application::{DocumentService, GeneratorConfig};
use dossier_core::error::DossierResult;

const BASE_URI: &str = "https://docs.example.test/";

fn config() -> GeneratorConfig {
    GeneratorConfig::new("support@example.test", "The Dossier Team", Decimal::new(2, 1))
        .expect("config is valid")
}

fn seeded_service() -> DocumentService {
    DocumentService::new(
        Box::new(InMemoryApplicationRepository::with_seed().expect("seed data is valid")),
        Box::new(StaticPathProvider::new()),
        Box::new(SubstitutionViewRenderer::with_builtin()),
        Box::new(MinimalPdfRenderer::new()),
        config(),
    )
    .expect("service construction succeeds")
}

#[test]
fn activated_application_yields_pdf_bytes() {
    let service = seeded_service();
    let bytes = service
        .generate(seed::ACTIVATED_ID, BASE_URI)
        .expect("generation succeeds")
        .expect("activated application has a document");
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn pending_application_yields_pdf_bytes() {
    let service = seeded_service();
    let bytes = service
        .generate(seed::PENDING_ID, BASE_URI)
        .expect("generation succeeds")
        .expect("pending application has a document");
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn unknown_id_returns_none() {
    let service = seeded_service();
    let result = service
        .generate(Uuid::nil(), BASE_URI)
        .expect("absence is not an error");
    assert!(result.is_none());
}

#[test]
fn closed_application_returns_none() {
    let service = seeded_service();
    let result = service
        .generate(seed::CLOSED_ID, BASE_URI)
        .expect("unsupported state is not an error");
    assert!(result.is_none());
}

/// Wraps the real substitution renderer, keeping a copy of the markup so the
/// test can inspect what the PDF stage would receive.
#[derive(Clone)]
struct InspectingRenderer {
    inner: SubstitutionViewRenderer,
    markup: Arc<Mutex<Vec<String>>>,
}

impl InspectingRenderer {
    fn new() -> Self {
        Self {
            inner: SubstitutionViewRenderer::with_builtin(),
            markup: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl ViewRenderer for InspectingRenderer {
    fn render(&self, template_ref: &str, view: &DocumentView) -> DossierResult<String> {
        let markup = self.inner.render(template_ref, view)?;
        self.markup.lock().unwrap().push(markup.clone());
        Ok(markup)
    }
}

#[test]
fn in_review_markup_carries_reference_and_fica_message() {
    let renderer = InspectingRenderer::new();
    let service = DocumentService::new(
        Box::new(InMemoryApplicationRepository::with_seed().unwrap()),
        Box::new(StaticPathProvider::new()),
        Box::new(renderer.clone()),
        Box::new(MinimalPdfRenderer::new()),
        config(),
    )
    .unwrap();

    service
        .generate(seed::IN_REVIEW_ID, BASE_URI)
        .unwrap()
        .expect("in-review application has a document");

    let markup = renderer.markup.lock().unwrap();
    assert_eq!(markup.len(), 1);
    assert!(markup[0].contains("APP-1004"));
    // The seeded review reason mentions an address, so the FICA message wins.
    assert!(
        markup[0].contains(
            "Your application has been placed in review pending outstanding \
             address verification for FICA purposes."
        )
    );
}

#[test]
fn legal_entity_application_surfaces_the_entity() {
    let renderer = InspectingRenderer::new();
    let service = DocumentService::new(
        Box::new(InMemoryApplicationRepository::with_seed().unwrap()),
        Box::new(StaticPathProvider::new()),
        Box::new(renderer.clone()),
        Box::new(MinimalPdfRenderer::new()),
        config(),
    )
    .unwrap();

    service
        .generate(seed::ACTIVATED_ENTITY_ID, BASE_URI)
        .unwrap()
        .expect("activated application has a document");

    let markup = renderer.markup.lock().unwrap();
    assert!(markup[0].contains("Karoo Trading"));
}

/// Fails on purpose so collaborator errors can be observed end to end.
struct BrokenPdfRenderer;

impl PdfRenderer for BrokenPdfRenderer {
    fn render_from_html(&self, _markup: &str, _options: &PdfOptions) -> DossierResult<PdfArtifact> {
        Err(dossier_core::application::GenerationError::PdfConversion {
            reason: "engine unavailable".into(),
        }
        .into())
    }
}

#[test]
fn pdf_stage_failure_propagates() {
    let service = DocumentService::new(
        Box::new(InMemoryApplicationRepository::with_seed().unwrap()),
        Box::new(StaticPathProvider::new()),
        Box::new(SubstitutionViewRenderer::with_builtin()),
        Box::new(BrokenPdfRenderer),
        config(),
    )
    .unwrap();

    let result = service.generate(seed::ACTIVATED_ID, BASE_URI);
    assert!(result.is_err());
}
