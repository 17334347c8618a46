//! In-memory application repository.
//!
//! Backs the CLI demo and tests. A production deployment would implement
//! `ApplicationRepository` over a real store; the port contract is the same:
//! `Ok(None)` for absence, `Err` for store failure, at most one record per
//! identifier (the `HashMap` key makes duplicates unrepresentable here).

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use uuid::Uuid;

use dossier_core::{
    application::{GenerationError, ports::ApplicationRepository},
    domain::Application,
    error::DossierResult,
};

use crate::seed;

/// Thread-safe in-memory application store.
#[derive(Clone, Default)]
pub struct InMemoryApplicationRepository {
    inner: Arc<RwLock<HashMap<Uuid, Application>>>,
}

impl InMemoryApplicationRepository {
    /// Create a new empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-loaded with the seed applications.
    pub fn with_seed() -> DossierResult<Self> {
        let repository = Self::new();
        for application in seed::sample_applications()? {
            repository.insert(application)?;
        }
        Ok(repository)
    }

    /// Insert or replace an application.
    ///
    /// Validates the record first; the repository never holds an application
    /// that violates domain invariants.
    pub fn insert(&self, application: Application) -> DossierResult<()> {
        application.validate()?;

        let mut inner = self.inner.write().map_err(|_| lock_error())?;
        inner.insert(application.id, application);
        Ok(())
    }

    /// All stored applications, ordered by reference number for stable output.
    pub fn list(&self) -> DossierResult<Vec<Application>> {
        let inner = self.inner.read().map_err(|_| lock_error())?;
        let mut applications: Vec<Application> = inner.values().cloned().collect();
        applications.sort_by(|a, b| a.reference_number.cmp(&b.reference_number));
        Ok(applications)
    }

    /// Number of stored applications.
    pub fn len(&self) -> usize {
        self.inner.read().map(|m| m.len()).unwrap_or(0)
    }

    /// Check if the repository is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ApplicationRepository for InMemoryApplicationRepository {
    fn find_by_id(&self, id: Uuid) -> DossierResult<Option<Application>> {
        let inner = self.inner.read().map_err(|_| lock_error())?;
        Ok(inner.get(&id).cloned())
    }
}

fn lock_error() -> dossier_core::error::DossierError {
    GenerationError::StoreUnavailable {
        reason: "repository lock poisoned".into(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use dossier_core::domain::{ApplicationState, Person};

    fn sample(id: Uuid) -> Application {
        Application::builder()
            .id(id)
            .reference_number("APP-9001")
            .state(ApplicationState::Pending)
            .person(Person::new("Nadia", "Petersen"))
            .applied_on(NaiveDate::from_ymd_opt(2026, 5, 1).unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn find_by_id_returns_none_for_unknown() {
        let repo = InMemoryApplicationRepository::new();
        assert!(repo.find_by_id(Uuid::new_v4()).unwrap().is_none());
    }

    #[test]
    fn insert_then_find_round_trips() {
        let repo = InMemoryApplicationRepository::new();
        let id = Uuid::new_v4();
        repo.insert(sample(id)).unwrap();

        let found = repo.find_by_id(id).unwrap().unwrap();
        assert_eq!(found.reference_number, "APP-9001");
    }

    #[test]
    fn insert_rejects_invalid_application() {
        let repo = InMemoryApplicationRepository::new();
        let mut app = sample(Uuid::new_v4());
        app.reference_number.clear();
        assert!(repo.insert(app).is_err());
    }

    #[test]
    fn seed_repository_is_populated() {
        let repo = InMemoryApplicationRepository::with_seed().unwrap();
        assert!(!repo.is_empty());
        assert_eq!(repo.len(), repo.list().unwrap().len());
    }

    #[test]
    fn list_is_sorted_by_reference() {
        let repo = InMemoryApplicationRepository::with_seed().unwrap();
        let refs: Vec<String> = repo
            .list()
            .unwrap()
            .into_iter()
            .map(|a| a.reference_number)
            .collect();
        let mut sorted = refs.clone();
        sorted.sort();
        assert_eq!(refs, sorted);
    }
}
