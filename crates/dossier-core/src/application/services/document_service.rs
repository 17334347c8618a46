//! Document Service - main application orchestrator.
//!
//! This service coordinates the document generation workflow:
//! 1. Fetch the application by identifier
//! 2. Dispatch on its lifecycle state to a view-model builder
//! 3. Render the view through the view renderer
//! 4. Convert the markup to PDF bytes
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).

use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::{
    application::{
        GeneratorConfig,
        pdf::PdfOptions,
        ports::{ApplicationRepository, PdfRenderer, TemplatePathProvider, ViewRenderer},
        services::view_builders,
        view_model::DocumentView,
    },
    domain::{Application, ApplicationState},
    error::DossierResult,
};

/// Main document generation service.
///
/// Stateless and synchronous: one call to [`Self::generate`] performs one
/// fetch, one render, one PDF conversion. Collaborators are injected once at
/// construction and treated as immutable for the service's lifetime;
/// concurrent calls are safe exactly when the injected collaborators are.
/// No retries happen at this layer.
pub struct DocumentService {
    repository: Box<dyn ApplicationRepository>,
    paths: Box<dyn TemplatePathProvider>,
    views: Box<dyn ViewRenderer>,
    pdf: Box<dyn PdfRenderer>,
    config: GeneratorConfig,
}

impl DocumentService {
    /// Create a new document service with the given adapters.
    ///
    /// Fails fast: an invalid configuration is rejected here, before any
    /// `generate` call can occur. (Missing collaborators are unrepresentable
    /// — ownership of the boxed ports is required to call this at all.)
    pub fn new(
        repository: Box<dyn ApplicationRepository>,
        paths: Box<dyn TemplatePathProvider>,
        views: Box<dyn ViewRenderer>,
        pdf: Box<dyn PdfRenderer>,
        config: GeneratorConfig,
    ) -> DossierResult<Self> {
        config.validate()?;
        Ok(Self {
            repository,
            paths,
            views,
            pdf,
            config,
        })
    }

    /// Generate the PDF document for an application.
    ///
    /// Returns `Ok(None)` on the two degraded-but-non-fatal paths — no
    /// application matches the id, or the application's state has no
    /// document — after emitting exactly one warning. Every collaborator
    /// failure propagates unchanged as `Err`.
    #[instrument(skip_all, fields(application_id = %application_id))]
    pub fn generate(
        &self,
        application_id: Uuid,
        base_uri: &str,
    ) -> DossierResult<Option<Vec<u8>>> {
        let Some(application) = self.repository.find_by_id(application_id)? else {
            warn!(%application_id, "No application found for id");
            return Ok(None);
        };

        let base_uri = normalize_base_uri(base_uri);

        let Some(view) = self.build_view(&application)? else {
            warn!(
                reference = %application.reference_number,
                state = %application.state,
                "Application is in a state with no document; nothing generated"
            );
            return Ok(None);
        };

        let path = self.paths.resolve(view.template_name())?;
        let template_ref = format!("{base_uri}{path}");

        let markup = self.views.render(&template_ref, &view)?;
        let artifact = self.pdf.render_from_html(&markup, &PdfOptions::default())?;

        info!(
            reference = %view.reference_number(),
            bytes = artifact.len(),
            "Document generated"
        );
        Ok(Some(artifact.into_bytes()))
    }

    /// Dispatch on the lifecycle state.
    ///
    /// Exhaustive by construction: the `None` arm is the only path permitted
    /// to degrade, and adding a state to [`ApplicationState`] forces a
    /// decision here.
    fn build_view(&self, application: &Application) -> DossierResult<Option<DocumentView>> {
        let view = match application.state {
            ApplicationState::Pending => Some(DocumentView::Pending(
                view_builders::build_pending(application, &self.config),
            )),
            ApplicationState::Activated => Some(DocumentView::Activated(
                view_builders::build_activated(application, &self.config),
            )),
            ApplicationState::InReview => Some(DocumentView::InReview(
                view_builders::build_in_review(application, &self.config)?,
            )),
            ApplicationState::Closed | ApplicationState::Rejected => None,
        };
        Ok(view)
    }
}

/// Drop the final character only if it is a path separator, so base URI +
/// path fragment never concatenates into a doubled separator.
///
/// The reference behavior computed a substring by offset arithmetic and could
/// corrupt multi-character URIs; this is the intended semantics.
fn normalize_base_uri(base_uri: &str) -> &str {
    base_uri.strip_suffix('/').unwrap_or(base_uri)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::pdf::{PdfArtifact, PdfOptions};
    use crate::domain::{Fund, Person, Product, Review};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::sync::{Arc, Mutex};

    // ── hand-rolled fakes ─────────────────────────────────────────────────

    struct FakeRepository {
        applications: Vec<Application>,
    }

    impl ApplicationRepository for FakeRepository {
        fn find_by_id(&self, id: Uuid) -> DossierResult<Option<Application>> {
            Ok(self.applications.iter().find(|a| a.id == id).cloned())
        }
    }

    struct FailingRepository;

    impl ApplicationRepository for FailingRepository {
        fn find_by_id(&self, _id: Uuid) -> DossierResult<Option<Application>> {
            Err(crate::application::GenerationError::StoreUnavailable {
                reason: "backing store offline".into(),
            }
            .into())
        }
    }

    struct FakePaths;

    impl TemplatePathProvider for FakePaths {
        fn resolve(&self, logical_name: &str) -> DossierResult<String> {
            Ok(match logical_name {
                "PendingApplication" => "/tpl/pending.html".into(),
                "ActivatedApplication" => "/tpl/activated.html".into(),
                "InReviewApplication" => "/tpl/in-review.html".into(),
                other => {
                    return Err(crate::application::GenerationError::UnknownTemplate {
                        name: other.into(),
                    }
                    .into());
                }
            })
        }
    }

    /// Records every template reference it was asked to render.
    #[derive(Clone, Default)]
    struct RecordingRenderer {
        calls: Arc<Mutex<Vec<String>>>,
    }

    impl ViewRenderer for RecordingRenderer {
        fn render(&self, template_ref: &str, view: &DocumentView) -> DossierResult<String> {
            self.calls.lock().unwrap().push(template_ref.to_string());
            Ok(format!("<html>{}</html>", view.reference_number()))
        }
    }

    /// Records the markup it receives and returns fixed bytes.
    #[derive(Clone, Default)]
    struct RecordingPdf {
        markup: Arc<Mutex<Vec<String>>>,
    }

    impl PdfRenderer for RecordingPdf {
        fn render_from_html(
            &self,
            markup: &str,
            _options: &PdfOptions,
        ) -> DossierResult<PdfArtifact> {
            self.markup.lock().unwrap().push(markup.to_string());
            Ok(PdfArtifact::new(b"%PDF-fake".to_vec()))
        }
    }

    // ── fixtures ──────────────────────────────────────────────────────────

    fn d(value: i64, scale: u32) -> Decimal {
        Decimal::new(value, scale)
    }

    fn config() -> GeneratorConfig {
        GeneratorConfig::new("support@example.com", "The Dossier Team", d(2, 1)).unwrap()
    }

    fn application(state: ApplicationState) -> Application {
        let mut app = Application {
            id: Uuid::new_v4(),
            reference_number: "APP-3001".into(),
            state,
            person: Person::new("Lerato", "Khumalo"),
            applied_on: NaiveDate::from_ymd_opt(2026, 2, 2).unwrap(),
            is_legal_entity: false,
            legal_entity: None,
            products: vec![Product::new("P1", vec![Fund::new(d(100, 0), d(10, 0))])],
            current_review: None,
        };
        if state == ApplicationState::InReview {
            app.current_review = Some(Review::new(
                "suspicious activity",
                "j.naidoo",
                app.applied_on,
            ));
        }
        app
    }

    fn service_with(applications: Vec<Application>) -> (DocumentService, RecordingRenderer, RecordingPdf) {
        let renderer = RecordingRenderer::default();
        let pdf = RecordingPdf::default();
        let service = DocumentService::new(
            Box::new(FakeRepository { applications }),
            Box::new(FakePaths),
            Box::new(renderer.clone()),
            Box::new(pdf.clone()),
            config(),
        )
        .unwrap();
        (service, renderer, pdf)
    }

    // ── tests ─────────────────────────────────────────────────────────────

    #[test]
    fn generates_bytes_for_activated_application() {
        let app = application(ApplicationState::Activated);
        let id = app.id;
        let (service, _, pdf) = service_with(vec![app]);

        let bytes = service.generate(id, "https://docs.example.test").unwrap();
        assert_eq!(bytes, Some(b"%PDF-fake".to_vec()));

        // The PDF renderer saw markup carrying the reference number.
        let markup = pdf.markup.lock().unwrap();
        assert_eq!(markup.len(), 1);
        assert!(markup[0].contains("APP-3001"));
    }

    #[test]
    fn unknown_id_degrades_to_none() {
        let (service, renderer, _) = service_with(vec![]);
        let result = service.generate(Uuid::new_v4(), "https://host").unwrap();
        assert!(result.is_none());
        assert!(renderer.calls.lock().unwrap().is_empty());
    }

    #[test]
    fn unsupported_state_degrades_to_none() {
        let app = application(ApplicationState::Closed);
        let id = app.id;
        let (service, renderer, _) = service_with(vec![app]);

        let result = service.generate(id, "https://host").unwrap();
        assert!(result.is_none());
        assert!(renderer.calls.lock().unwrap().is_empty());
    }

    #[test]
    fn repository_failure_propagates_as_error() {
        let service = DocumentService::new(
            Box::new(FailingRepository),
            Box::new(FakePaths),
            Box::new(RecordingRenderer::default()),
            Box::new(RecordingPdf::default()),
            config(),
        )
        .unwrap();

        let result = service.generate(Uuid::new_v4(), "https://host");
        assert!(result.is_err());
    }

    #[test]
    fn trailing_separator_is_not_doubled() {
        let app = application(ApplicationState::Pending);
        let id = app.id;
        let (service, renderer, _) = service_with(vec![app]);

        service.generate(id, "https://host/").unwrap();

        let calls = renderer.calls.lock().unwrap();
        assert_eq!(calls.as_slice(), ["https://host/tpl/pending.html"]);
    }

    #[test]
    fn base_uri_without_separator_is_untouched() {
        let app = application(ApplicationState::InReview);
        let id = app.id;
        let (service, renderer, _) = service_with(vec![app]);

        service.generate(id, "https://host").unwrap();

        let calls = renderer.calls.lock().unwrap();
        assert_eq!(calls.as_slice(), ["https://host/tpl/in-review.html"]);
    }

    #[test]
    fn construction_rejects_invalid_config() {
        let bad = GeneratorConfig {
            support_email: "nope".into(),
            signature: "Sig".into(),
            tax_rate: Decimal::ZERO,
        };
        let result = DocumentService::new(
            Box::new(FakeRepository {
                applications: vec![],
            }),
            Box::new(FakePaths),
            Box::new(RecordingRenderer::default()),
            Box::new(RecordingPdf::default()),
            bad,
        );
        assert!(result.is_err());
    }

    #[test]
    fn normalize_strips_exactly_one_trailing_slash() {
        assert_eq!(normalize_base_uri("https://host/"), "https://host");
        assert_eq!(normalize_base_uri("https://host"), "https://host");
        assert_eq!(normalize_base_uri("https://host//"), "https://host/");
        assert_eq!(normalize_base_uri(""), "");
    }
}
