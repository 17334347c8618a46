//! Per-state view-model builders.
//!
//! Pure functions: application record in, fully-populated immutable view
//! model out, in one step. No partially-built mutable object ever escapes,
//! and nothing here performs I/O — rendering happens afterwards in
//! [`super::document_service::DocumentService`].

use crate::application::GeneratorConfig;
use crate::application::view_model::{ActivatedView, InReviewView, PendingView};
use crate::domain::{Application, DomainError};

/// Prefix shared by every in-review message.
pub const IN_REVIEW_PREFIX: &str = "Your application has been placed in review";

/// Suffix when the review reason mentions an address problem.
pub const ADDRESS_SUFFIX: &str = " pending outstanding address verification for FICA purposes.";

/// Suffix when the review reason mentions a bank account problem.
pub const BANK_SUFFIX: &str = " pending outstanding bank account verification.";

/// Fallback suffix for every other reason.
pub const GENERIC_SUFFIX: &str =
    " because of suspicious account behaviour. Please contact support ASAP.";

/// Build the view for a `Pending` application.
pub fn build_pending(application: &Application, config: &GeneratorConfig) -> PendingView {
    PendingView {
        reference_number: application.reference_number.clone(),
        state_label: application.state.label().to_string(),
        full_name: application.person.full_name(),
        applied_on: application.applied_on,
        support_email: config.support_email.clone(),
        signature: config.signature.clone(),
    }
}

/// Build the view for an `Activated` application.
///
/// The legal-entity descriptor is surfaced only when the application is
/// flagged as a legal entity — a dormant descriptor on the record stays
/// hidden. The portfolio total is derived here on every call.
pub fn build_activated(application: &Application, config: &GeneratorConfig) -> ActivatedView {
    ActivatedView {
        reference_number: application.reference_number.clone(),
        state_label: application.state.label().to_string(),
        full_name: application.person.full_name(),
        applied_on: application.applied_on,
        legal_entity: application
            .is_legal_entity
            .then(|| application.legal_entity.clone())
            .flatten(),
        portfolio_funds: application.portfolio_funds(),
        portfolio_total: application.portfolio_total(config.tax_rate),
        support_email: config.support_email.clone(),
        signature: config.signature.clone(),
    }
}

/// Build the view for an `InReview` application.
///
/// # Errors
///
/// `DomainError::MissingReview` if the record carries no review — the
/// message and the verbatim review attachment both require it.
pub fn build_in_review(
    application: &Application,
    config: &GeneratorConfig,
) -> Result<InReviewView, DomainError> {
    let review = application
        .current_review
        .clone()
        .ok_or_else(|| DomainError::MissingReview {
            reference: application.reference_number.clone(),
        })?;

    Ok(InReviewView {
        reference_number: application.reference_number.clone(),
        state_label: application.state.label().to_string(),
        full_name: application.person.full_name(),
        applied_on: application.applied_on,
        legal_entity: application
            .is_legal_entity
            .then(|| application.legal_entity.clone())
            .flatten(),
        portfolio_funds: application.portfolio_funds(),
        portfolio_total: application.portfolio_total(config.tax_rate),
        message: review_message(&review.reason),
        review,
        support_email: config.support_email.clone(),
        signature: config.signature.clone(),
    })
}

/// Select the in-review message from the review reason.
///
/// First-match-wins in the order address, bank, generic; matching is a
/// case-sensitive substring test. Once a suffix hits, no further matches
/// are attempted.
pub fn review_message(reason: &str) -> String {
    let suffix = if reason.contains("address") {
        ADDRESS_SUFFIX
    } else if reason.contains("bank") {
        BANK_SUFFIX
    } else {
        GENERIC_SUFFIX
    };
    format!("{IN_REVIEW_PREFIX}{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        ApplicationState, Fund, LegalEntity, Person, Product, Review,
    };
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use uuid::Uuid;

    fn d(value: i64, scale: u32) -> Decimal {
        Decimal::new(value, scale)
    }

    fn config() -> GeneratorConfig {
        GeneratorConfig::new("support@example.com", "The Dossier Team", d(2, 1)).unwrap()
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 14).unwrap()
    }

    fn base_application(state: ApplicationState) -> Application {
        Application {
            id: Uuid::new_v4(),
            reference_number: "APP-2001".into(),
            state,
            person: Person::new("Sipho", "Dlamini"),
            applied_on: date(),
            is_legal_entity: false,
            legal_entity: None,
            products: vec![
                Product::new("P1", vec![Fund::new(d(100, 0), d(10, 0))]),
                Product::new("P2", vec![Fund::new(d(50, 0), d(5, 0))]),
            ],
            current_review: None,
        }
    }

    #[test]
    fn pending_view_projects_base_fields() {
        let app = base_application(ApplicationState::Pending);
        let view = build_pending(&app, &config());

        assert_eq!(view.reference_number, "APP-2001");
        assert_eq!(view.state_label, "Pending");
        assert_eq!(view.full_name, "Sipho Dlamini");
        assert_eq!(view.applied_on, date());
        assert_eq!(view.support_email, "support@example.com");
        assert_eq!(view.signature, "The Dossier Team");
    }

    #[test]
    fn activated_view_computes_portfolio_total() {
        let app = base_application(ApplicationState::Activated);
        let view = build_activated(&app, &config());

        // (100-10)*0.2 + (50-5)*0.2 = 27
        assert_eq!(view.portfolio_total, d(27, 0));
        assert_eq!(view.portfolio_funds.len(), 2);
    }

    #[test]
    fn activated_view_hides_dormant_legal_entity() {
        let mut app = base_application(ApplicationState::Activated);
        app.legal_entity = Some(LegalEntity::new("Acme Holdings", "2019/123456/07"));
        // flag stays false

        let view = build_activated(&app, &config());
        assert!(view.legal_entity.is_none());
    }

    #[test]
    fn activated_view_surfaces_flagged_legal_entity() {
        let mut app = base_application(ApplicationState::Activated);
        app.is_legal_entity = true;
        app.legal_entity = Some(LegalEntity::new("Acme Holdings", "2019/123456/07"));

        let view = build_activated(&app, &config());
        assert_eq!(view.legal_entity.unwrap().name, "Acme Holdings");
    }

    #[test]
    fn in_review_requires_review_record() {
        let app = base_application(ApplicationState::InReview);
        let result = build_in_review(&app, &config());
        assert!(matches!(result, Err(DomainError::MissingReview { .. })));
    }

    #[test]
    fn in_review_attaches_review_verbatim() {
        let mut app = base_application(ApplicationState::InReview);
        let review = Review::new("Outstanding proof of address required", "j.naidoo", date());
        app.current_review = Some(review.clone());

        let view = build_in_review(&app, &config()).unwrap();
        assert_eq!(view.review, review);
        assert!(view.message.ends_with(ADDRESS_SUFFIX));
        assert!(view.message.starts_with(IN_REVIEW_PREFIX));
    }

    #[test]
    fn review_message_address_wins_over_bank() {
        // Both substrings present: first match in listed order wins.
        let msg = review_message("bank statement does not match address on file");
        assert!(msg.ends_with(ADDRESS_SUFFIX));
    }

    #[test]
    fn review_message_bank_when_no_address() {
        let msg = review_message("bank account could not be verified");
        assert!(msg.ends_with(BANK_SUFFIX));
    }

    #[test]
    fn review_message_generic_fallback() {
        let msg = review_message("multiple rapid withdrawals");
        assert!(msg.ends_with(GENERIC_SUFFIX));
    }

    #[test]
    fn review_message_matching_is_case_sensitive() {
        // "Address" (capitalised) does not match the lowercase probe.
        let msg = review_message("Address confirmation outstanding");
        assert!(msg.ends_with(GENERIC_SUFFIX));
    }
}
