//! Per-state view models.
//!
//! A view model is a flat projection of an application, built in one step by
//! the pure functions in [`crate::application::services::view_builders`] and
//! used purely to drive rendering. View models are never persisted and never
//! mutated after construction.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::{Fund, LegalEntity, Review};

/// View model for a `Pending` application.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PendingView {
    pub reference_number: String,
    pub state_label: String,
    pub full_name: String,
    pub applied_on: NaiveDate,
    pub support_email: String,
    pub signature: String,
}

/// View model for an `Activated` application.
///
/// Carries the pending fields plus the portfolio projection and, when the
/// application is flagged as such, the legal-entity descriptor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivatedView {
    pub reference_number: String,
    pub state_label: String,
    pub full_name: String,
    pub applied_on: NaiveDate,
    /// `None` unless the application's legal-entity flag is set.
    pub legal_entity: Option<LegalEntity>,
    /// Flattened: product order, then fund order.
    pub portfolio_funds: Vec<Fund>,
    /// Derived: sum of `(amount - fees) * tax_rate`, 2dp banker's rounding.
    pub portfolio_total: Decimal,
    pub support_email: String,
    pub signature: String,
}

/// View model for an `InReview` application.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InReviewView {
    pub reference_number: String,
    pub state_label: String,
    pub full_name: String,
    pub applied_on: NaiveDate,
    pub legal_entity: Option<LegalEntity>,
    pub portfolio_funds: Vec<Fund>,
    pub portfolio_total: Decimal,
    /// Fixed prefix plus a suffix selected from the review reason.
    pub message: String,
    /// The full review record, attached verbatim for template use.
    pub review: Review,
    pub support_email: String,
    pub signature: String,
}

/// The view model chosen by state dispatch.
///
/// Each variant maps one-to-one onto a document template; the logical
/// template names here are the keys the path provider resolves.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DocumentView {
    Pending(PendingView),
    Activated(ActivatedView),
    InReview(InReviewView),
}

impl DocumentView {
    /// Logical template name resolved through the path provider.
    pub fn template_name(&self) -> &'static str {
        match self {
            Self::Pending(_) => "PendingApplication",
            Self::Activated(_) => "ActivatedApplication",
            Self::InReview(_) => "InReviewApplication",
        }
    }

    /// Reference number of the projected application.
    pub fn reference_number(&self) -> &str {
        match self {
            Self::Pending(v) => &v.reference_number,
            Self::Activated(v) => &v.reference_number,
            Self::InReview(v) => &v.reference_number,
        }
    }
}
