//! Simple variable-substitution view renderer.
//!
//! Templates are registered under path fragments; the service hands in a
//! fully-resolved template reference (base URI + fragment) and the renderer
//! matches it by suffix. Rendering is a single-pass `{{VARIABLE}}`
//! replacement — adequate for the built-in templates, and replaceable by a
//! real engine behind the same port without touching the core.

use std::collections::HashMap;

use rust_decimal::Decimal;
use tracing::instrument;

use dossier_core::{
    application::{
        GenerationError,
        ports::ViewRenderer,
        view_model::{ActivatedView, DocumentView, InReviewView, PendingView},
    },
    domain::{Fund, LegalEntity},
    error::DossierResult,
};

use crate::builtin_templates;

/// Renderer using basic variable substitution over registered templates.
#[derive(Debug, Clone, Default)]
pub struct SubstitutionViewRenderer {
    /// Keyed by path fragment; matched against the tail of the resolved
    /// template reference.
    templates: HashMap<String, String>,
}

impl SubstitutionViewRenderer {
    /// Create an empty renderer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a renderer with the built-in templates registered.
    pub fn with_builtin() -> Self {
        let mut renderer = Self::new();
        for (path, markup) in builtin_templates::all_templates() {
            renderer.register(path, markup);
        }
        renderer
    }

    /// Register (or replace) a template under a path fragment.
    pub fn register(&mut self, path: impl Into<String>, markup: impl Into<String>) {
        self.templates.insert(path.into(), markup.into());
    }

    fn lookup(&self, template_ref: &str) -> Option<&str> {
        self.templates
            .iter()
            .find(|(path, _)| template_ref.ends_with(path.as_str()))
            .map(|(_, markup)| markup.as_str())
    }
}

impl ViewRenderer for SubstitutionViewRenderer {
    #[instrument(skip_all, fields(template_ref = %template_ref))]
    fn render(&self, template_ref: &str, view: &DocumentView) -> DossierResult<String> {
        let template = self.lookup(template_ref).ok_or_else(|| {
            GenerationError::RenderingFailed {
                template_ref: template_ref.to_string(),
                reason: "no registered template matches the reference".into(),
            }
        })?;

        let mut markup = template.to_string();
        for (key, value) in variables(view) {
            let placeholder = format!("{{{{{key}}}}}");
            markup = markup.replace(&placeholder, &value);
        }
        Ok(markup)
    }
}

/// Flatten a view model into substitution variables.
fn variables(view: &DocumentView) -> Vec<(&'static str, String)> {
    match view {
        DocumentView::Pending(v) => pending_variables(v),
        DocumentView::Activated(v) => activated_variables(v),
        DocumentView::InReview(v) => in_review_variables(v),
    }
}

fn pending_variables(v: &PendingView) -> Vec<(&'static str, String)> {
    vec![
        ("REFERENCE_NUMBER", v.reference_number.clone()),
        ("STATE", v.state_label.clone()),
        ("FULL_NAME", v.full_name.clone()),
        ("APPLIED_ON", v.applied_on.format("%Y-%m-%d").to_string()),
        ("SUPPORT_EMAIL", v.support_email.clone()),
        ("SIGNATURE", v.signature.clone()),
    ]
}

fn activated_variables(v: &ActivatedView) -> Vec<(&'static str, String)> {
    vec![
        ("REFERENCE_NUMBER", v.reference_number.clone()),
        ("STATE", v.state_label.clone()),
        ("FULL_NAME", v.full_name.clone()),
        ("APPLIED_ON", v.applied_on.format("%Y-%m-%d").to_string()),
        ("LEGAL_ENTITY_BLOCK", legal_entity_block(&v.legal_entity)),
        ("PORTFOLIO_FUNDS", fund_rows(&v.portfolio_funds)),
        ("PORTFOLIO_TOTAL", format_money(v.portfolio_total)),
        ("SUPPORT_EMAIL", v.support_email.clone()),
        ("SIGNATURE", v.signature.clone()),
    ]
}

fn in_review_variables(v: &InReviewView) -> Vec<(&'static str, String)> {
    vec![
        ("REFERENCE_NUMBER", v.reference_number.clone()),
        ("STATE", v.state_label.clone()),
        ("FULL_NAME", v.full_name.clone()),
        ("APPLIED_ON", v.applied_on.format("%Y-%m-%d").to_string()),
        ("LEGAL_ENTITY_BLOCK", legal_entity_block(&v.legal_entity)),
        ("PORTFOLIO_FUNDS", fund_rows(&v.portfolio_funds)),
        ("PORTFOLIO_TOTAL", format_money(v.portfolio_total)),
        ("IN_REVIEW_MESSAGE", v.message.clone()),
        ("REVIEW_REASON", v.review.reason.clone()),
        ("REVIEWER", v.review.reviewer.clone()),
        (
            "REVIEW_OPENED_ON",
            v.review.opened_on.format("%Y-%m-%d").to_string(),
        ),
        ("SUPPORT_EMAIL", v.support_email.clone()),
        ("SIGNATURE", v.signature.clone()),
    ]
}

fn legal_entity_block(entity: &Option<LegalEntity>) -> String {
    match entity {
        Some(e) => format!(
            "<p>On behalf of: {} (reg. {})</p>",
            e.name, e.registration_number
        ),
        None => String::new(),
    }
}

fn fund_rows(funds: &[Fund]) -> String {
    funds
        .iter()
        .map(|f| {
            format!(
                "      <li>Amount {} / Fees {}</li>",
                format_money(f.amount),
                format_money(f.fees)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_money(value: Decimal) -> String {
    value.round_dp(2).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use dossier_core::domain::Review;

    fn d(value: i64, scale: u32) -> Decimal {
        Decimal::new(value, scale)
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 14).unwrap()
    }

    fn pending_view() -> DocumentView {
        DocumentView::Pending(PendingView {
            reference_number: "APP-1001".into(),
            state_label: "Pending".into(),
            full_name: "Thandi Mokoena".into(),
            applied_on: date(),
            support_email: "support@example.com".into(),
            signature: "The Dossier Team".into(),
        })
    }

    #[test]
    fn renders_pending_template_by_reference_suffix() {
        let renderer = SubstitutionViewRenderer::with_builtin();
        let markup = renderer
            .render(
                "https://host/templates/pending-application.html",
                &pending_view(),
            )
            .unwrap();

        assert!(markup.contains("APP-1001"));
        assert!(markup.contains("Thandi Mokoena"));
        assert!(markup.contains("2026-03-14"));
        assert!(!markup.contains("{{"));
    }

    #[test]
    fn unknown_reference_fails() {
        let renderer = SubstitutionViewRenderer::with_builtin();
        let result = renderer.render("https://host/templates/missing.html", &pending_view());
        assert!(result.is_err());
    }

    #[test]
    fn activated_view_renders_fund_rows_and_total() {
        let renderer = SubstitutionViewRenderer::with_builtin();
        let view = DocumentView::Activated(ActivatedView {
            reference_number: "APP-1002".into(),
            state_label: "Activated".into(),
            full_name: "Sipho Dlamini".into(),
            applied_on: date(),
            legal_entity: None,
            portfolio_funds: vec![Fund::new(d(100, 0), d(10, 0)), Fund::new(d(50, 0), d(5, 0))],
            portfolio_total: d(27, 0),
            support_email: "support@example.com".into(),
            signature: "Sig".into(),
        });

        let markup = renderer
            .render("https://host/templates/activated-application.html", &view)
            .unwrap();
        assert!(markup.contains("Amount 100 / Fees 10"));
        assert!(markup.contains("Amount 50 / Fees 5"));
        assert!(markup.contains(": 27"));
        // No legal entity block when absent.
        assert!(!markup.contains("On behalf of"));
    }

    #[test]
    fn in_review_view_renders_message_and_review() {
        let renderer = SubstitutionViewRenderer::with_builtin();
        let view = DocumentView::InReview(InReviewView {
            reference_number: "APP-1004".into(),
            state_label: "In Review".into(),
            full_name: "Pieter van Wyk".into(),
            applied_on: date(),
            legal_entity: Some(LegalEntity::new("Acme", "123")),
            portfolio_funds: vec![],
            portfolio_total: Decimal::ZERO,
            message: "Your application has been placed in review pending outstanding address verification for FICA purposes.".into(),
            review: Review::new("Outstanding proof of address required", "compliance.bot", date()),
            support_email: "support@example.com".into(),
            signature: "Sig".into(),
        });

        let markup = renderer
            .render("https://host/templates/in-review-application.html", &view)
            .unwrap();
        assert!(markup.contains("FICA purposes"));
        assert!(markup.contains("compliance.bot"));
        assert!(markup.contains("On behalf of: Acme (reg. 123)"));
    }
}
