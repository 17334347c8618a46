//! Application aggregate and its associated records.
//!
//! Everything here is a read-only input to document generation: records are
//! fetched once per invocation and projected into a short-lived view model.
//! Nothing in the core creates or mutates these entities.
//!
//! ## Invariants (enforced by `validate()`)
//!
//! 1. `reference_number` is non-empty
//! 2. The applicant has both a first name and a surname
//! 3. An `InReview` application carries a review record
//!
//! Exactly one application exists per identifier in any repository. Lookups
//! yield zero or one result; a store that can return more than one match is a
//! data-integrity violation the core does not handle gracefully.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::state::ApplicationState;
use crate::domain::error::DomainError;

/// An applicant's name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub first_name: String,
    pub surname: String,
}

impl Person {
    pub fn new(first_name: impl Into<String>, surname: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            surname: surname.into(),
        }
    }

    /// Display name: first name, a single space, surname.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.surname)
    }
}

/// Descriptor for applications lodged by a legal entity rather than a person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalEntity {
    pub name: String,
    pub registration_number: String,
}

impl LegalEntity {
    pub fn new(name: impl Into<String>, registration_number: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            registration_number: registration_number.into(),
        }
    }
}

/// A fund position: monetary amount and the fees charged against it.
///
/// Both quantities are signed decimals — refunds and fee reversals appear as
/// negative values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fund {
    pub amount: Decimal,
    pub fees: Decimal,
}

impl Fund {
    pub fn new(amount: Decimal, fees: Decimal) -> Self {
        Self { amount, fees }
    }
}

/// A product holding an ordered collection of funds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub funds: Vec<Fund>,
}

impl Product {
    pub fn new(name: impl Into<String>, funds: Vec<Fund>) -> Self {
        Self {
            name: name.into(),
            funds,
        }
    }
}

/// Review record attached to an application under review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    /// Free-text reason. Inspected (case-sensitively) to pick the document's
    /// review message.
    pub reason: String,
    pub reviewer: String,
    pub opened_on: NaiveDate,
}

impl Review {
    pub fn new(
        reason: impl Into<String>,
        reviewer: impl Into<String>,
        opened_on: NaiveDate,
    ) -> Self {
        Self {
            reason: reason.into(),
            reviewer: reviewer.into(),
            opened_on,
        }
    }
}

/// The application aggregate root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    /// Unique identifier; exactly one record exists per id.
    pub id: Uuid,
    /// Human-facing reference, printed on every document.
    pub reference_number: String,
    pub state: ApplicationState,
    pub person: Person,
    pub applied_on: NaiveDate,
    /// `true` if lodged by a legal entity. The `legal_entity` descriptor is
    /// only surfaced in documents when this flag is set, even if a value is
    /// present on the record.
    pub is_legal_entity: bool,
    pub legal_entity: Option<LegalEntity>,
    /// Ordered: product order then fund order is the canonical traversal.
    pub products: Vec<Product>,
    /// Meaningful only in the `InReview` state.
    pub current_review: Option<Review>,
}

impl Application {
    /// Start the builder pattern for fluent construction.
    pub fn builder() -> ApplicationBuilder {
        ApplicationBuilder::default()
    }

    /// Validate all invariants.
    ///
    /// Repositories should validate applications before accepting them.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.reference_number.is_empty() {
            return Err(DomainError::InvalidApplication {
                reference: "<unset>".into(),
                reason: "reference number cannot be empty".into(),
            });
        }

        if self.person.first_name.is_empty() || self.person.surname.is_empty() {
            return Err(DomainError::InvalidApplication {
                reference: self.reference_number.clone(),
                reason: "applicant must have a first name and a surname".into(),
            });
        }

        if self.state == ApplicationState::InReview && self.current_review.is_none() {
            return Err(DomainError::MissingReview {
                reference: self.reference_number.clone(),
            });
        }

        Ok(())
    }

    /// All funds flattened across products: product order, then fund order
    /// within each product. This traversal is the canonical one — portfolio
    /// totals fold over it so results are reproducible.
    pub fn portfolio_funds(&self) -> Vec<Fund> {
        self.products
            .iter()
            .flat_map(|p| p.funds.iter().copied())
            .collect()
    }

    /// Derived portfolio total: sum over every fund of
    /// `(amount - fees) * tax_rate`, rounded to 2 decimal places with
    /// banker's rounding (midpoint-nearest-even).
    ///
    /// Recomputed on every call — this quantity is never stored.
    pub fn portfolio_total(&self, tax_rate: Decimal) -> Decimal {
        self.products
            .iter()
            .flat_map(|p| p.funds.iter())
            .fold(Decimal::ZERO, |acc, fund| {
                acc + (fund.amount - fund.fees) * tax_rate
            })
            .round_dp(2)
    }
}

/// Builder for constructing applications with validation.
///
/// All fields are optional during construction, but `build()` enforces the
/// required set and runs `Application::validate`.
#[derive(Debug, Default)]
pub struct ApplicationBuilder {
    id: Option<Uuid>,
    reference_number: Option<String>,
    state: Option<ApplicationState>,
    person: Option<Person>,
    applied_on: Option<NaiveDate>,
    is_legal_entity: bool,
    legal_entity: Option<LegalEntity>,
    products: Vec<Product>,
    current_review: Option<Review>,
}

impl ApplicationBuilder {
    pub fn id(mut self, id: Uuid) -> Self {
        self.id = Some(id);
        self
    }

    pub fn reference_number(mut self, reference: impl Into<String>) -> Self {
        self.reference_number = Some(reference.into());
        self
    }

    pub fn state(mut self, state: ApplicationState) -> Self {
        self.state = Some(state);
        self
    }

    pub fn person(mut self, person: Person) -> Self {
        self.person = Some(person);
        self
    }

    pub fn applied_on(mut self, date: NaiveDate) -> Self {
        self.applied_on = Some(date);
        self
    }

    /// Mark as lodged by a legal entity and attach its descriptor.
    pub fn legal_entity(mut self, entity: LegalEntity) -> Self {
        self.is_legal_entity = true;
        self.legal_entity = Some(entity);
        self
    }

    /// Attach a legal-entity descriptor WITHOUT setting the flag.
    ///
    /// Mirrors records seen in the wild where the descriptor survives after
    /// the flag was cleared; documents must not surface it then.
    pub fn dormant_legal_entity(mut self, entity: LegalEntity) -> Self {
        self.legal_entity = Some(entity);
        self
    }

    /// Add a product (accumulates, preserving insertion order).
    pub fn product(mut self, product: Product) -> Self {
        self.products.push(product);
        self
    }

    pub fn review(mut self, review: Review) -> Self {
        self.current_review = Some(review);
        self
    }

    /// Consume builder and construct a validated `Application`.
    ///
    /// # Errors
    ///
    /// - `MissingRequiredField` if id/reference/state/person/date not set
    /// - any `Application::validate` failure
    pub fn build(self) -> Result<Application, DomainError> {
        let application = Application {
            id: self
                .id
                .ok_or(DomainError::MissingRequiredField { field: "id" })?,
            reference_number: self.reference_number.ok_or(
                DomainError::MissingRequiredField {
                    field: "reference_number",
                },
            )?,
            state: self
                .state
                .ok_or(DomainError::MissingRequiredField { field: "state" })?,
            person: self
                .person
                .ok_or(DomainError::MissingRequiredField { field: "person" })?,
            applied_on: self
                .applied_on
                .ok_or(DomainError::MissingRequiredField { field: "applied_on" })?,
            is_legal_entity: self.is_legal_entity,
            legal_entity: self.legal_entity,
            products: self.products,
            current_review: self.current_review,
        };

        application.validate()?;
        Ok(application)
    }
}
