//! Seed applications for the demo repository.
//!
//! Identifiers are fixed so `dossier list` and `dossier generate` can be used
//! together from a fresh install.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::{Uuid, uuid};

use dossier_core::{
    domain::{
        Application, ApplicationState, Fund, LegalEntity, Person, Product, Review,
    },
    error::{DossierError, DossierResult},
};

/// Stable id of the seeded pending application.
pub const PENDING_ID: Uuid = uuid!("11111111-0000-0000-0000-000000000001");
/// Stable id of the seeded activated (personal) application.
pub const ACTIVATED_ID: Uuid = uuid!("11111111-0000-0000-0000-000000000002");
/// Stable id of the seeded activated legal-entity application.
pub const ACTIVATED_ENTITY_ID: Uuid = uuid!("11111111-0000-0000-0000-000000000003");
/// Stable id of the seeded in-review application.
pub const IN_REVIEW_ID: Uuid = uuid!("11111111-0000-0000-0000-000000000004");
/// Stable id of the seeded closed application (no document defined).
pub const CLOSED_ID: Uuid = uuid!("11111111-0000-0000-0000-000000000005");

/// Build the full set of sample applications.
pub fn sample_applications() -> DossierResult<Vec<Application>> {
    let applications = vec![
        Application::builder()
            .id(PENDING_ID)
            .reference_number("APP-1001")
            .state(ApplicationState::Pending)
            .person(Person::new("Thandi", "Mokoena"))
            .applied_on(date(2026, 3, 2)?)
            .build()?,
        Application::builder()
            .id(ACTIVATED_ID)
            .reference_number("APP-1002")
            .state(ApplicationState::Activated)
            .person(Person::new("Sipho", "Dlamini"))
            .applied_on(date(2026, 1, 15)?)
            .product(Product::new(
                "Balanced Equity",
                vec![
                    Fund::new(d(1000, 0), d(25, 0)),
                    Fund::new(d(500, 0), d(10, 0)),
                ],
            ))
            .product(Product::new(
                "Income Bonds",
                vec![Fund::new(d(25050, 2), d(550, 2))],
            ))
            .build()?,
        Application::builder()
            .id(ACTIVATED_ENTITY_ID)
            .reference_number("APP-1003")
            .state(ApplicationState::Activated)
            .person(Person::new("Ayesha", "Naidoo"))
            .applied_on(date(2026, 2, 20)?)
            .legal_entity(LegalEntity::new("Karoo Trading (Pty) Ltd", "2019/123456/07"))
            .product(Product::new(
                "Corporate Cash",
                vec![Fund::new(d(100000, 0), d(1200, 0))],
            ))
            .build()?,
        Application::builder()
            .id(IN_REVIEW_ID)
            .reference_number("APP-1004")
            .state(ApplicationState::InReview)
            .person(Person::new("Pieter", "van Wyk"))
            .applied_on(date(2026, 4, 8)?)
            .product(Product::new(
                "Starter Savings",
                vec![Fund::new(d(75, 0), d(5, 0))],
            ))
            .review(Review::new(
                "Outstanding proof of address required",
                "compliance.bot",
                date(2026, 4, 10)?,
            ))
            .build()?,
        Application::builder()
            .id(CLOSED_ID)
            .reference_number("APP-1005")
            .state(ApplicationState::Closed)
            .person(Person::new("Grace", "Okafor"))
            .applied_on(date(2025, 11, 30)?)
            .build()?,
    ];

    Ok(applications)
}

fn d(value: i64, scale: u32) -> Decimal {
    Decimal::new(value, scale)
}

fn date(y: i32, m: u32, day: u32) -> DossierResult<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, day).ok_or_else(|| DossierError::Internal {
        message: format!("seed date {y}-{m}-{day} out of range"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_covers_every_documented_state() {
        let apps = sample_applications().unwrap();
        assert!(apps.iter().any(|a| a.state == ApplicationState::Pending));
        assert!(apps.iter().any(|a| a.state == ApplicationState::Activated));
        assert!(apps.iter().any(|a| a.state == ApplicationState::InReview));
        // and one with no document, for the degraded path
        assert!(apps.iter().any(|a| !a.state.has_document()));
    }

    #[test]
    fn seed_ids_are_unique() {
        let apps = sample_applications().unwrap();
        let mut ids: Vec<Uuid> = apps.iter().map(|a| a.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), apps.len());
    }

    #[test]
    fn in_review_seed_mentions_address() {
        let apps = sample_applications().unwrap();
        let in_review = apps.iter().find(|a| a.id == IN_REVIEW_ID).unwrap();
        assert!(
            in_review
                .current_review
                .as_ref()
                .unwrap()
                .reason
                .contains("address")
        );
    }
}
