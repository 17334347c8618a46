//! Static template path provider.
//!
//! Maps the three logical template names to fixed path fragments. The
//! fragments start with `/` — the service strips any trailing separator from
//! the base URI before concatenating, so the joined reference always carries
//! exactly one separator.

use std::collections::HashMap;

use dossier_core::{
    application::{GenerationError, ports::TemplatePathProvider},
    error::DossierResult,
};

/// Path fragment for the pending-application template.
pub const PENDING_PATH: &str = "/templates/pending-application.html";
/// Path fragment for the activated-application template.
pub const ACTIVATED_PATH: &str = "/templates/activated-application.html";
/// Path fragment for the in-review-application template.
pub const IN_REVIEW_PATH: &str = "/templates/in-review-application.html";

/// Fixed routing table from logical template names to path fragments.
#[derive(Debug, Clone)]
pub struct StaticPathProvider {
    routes: HashMap<String, String>,
}

impl StaticPathProvider {
    /// Create a provider with the standard document routes.
    pub fn new() -> Self {
        let mut routes = HashMap::new();
        routes.insert("PendingApplication".to_string(), PENDING_PATH.to_string());
        routes.insert(
            "ActivatedApplication".to_string(),
            ACTIVATED_PATH.to_string(),
        );
        routes.insert(
            "InReviewApplication".to_string(),
            IN_REVIEW_PATH.to_string(),
        );
        Self { routes }
    }

    /// Add or override a route (used by deployments with custom templates).
    pub fn with_route(mut self, logical_name: impl Into<String>, path: impl Into<String>) -> Self {
        self.routes.insert(logical_name.into(), path.into());
        self
    }
}

impl Default for StaticPathProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplatePathProvider for StaticPathProvider {
    fn resolve(&self, logical_name: &str) -> DossierResult<String> {
        self.routes.get(logical_name).cloned().ok_or_else(|| {
            GenerationError::UnknownTemplate {
                name: logical_name.to_string(),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_standard_names() {
        let provider = StaticPathProvider::new();
        assert_eq!(
            provider.resolve("PendingApplication").unwrap(),
            PENDING_PATH
        );
        assert_eq!(
            provider.resolve("InReviewApplication").unwrap(),
            IN_REVIEW_PATH
        );
    }

    #[test]
    fn unknown_name_is_an_error() {
        let provider = StaticPathProvider::new();
        assert!(provider.resolve("ArchivedApplication").is_err());
    }

    #[test]
    fn custom_route_overrides_default() {
        let provider =
            StaticPathProvider::new().with_route("PendingApplication", "/custom/pending.html");
        assert_eq!(
            provider.resolve("PendingApplication").unwrap(),
            "/custom/pending.html"
        );
    }
}
