//! Immutable generator configuration.
//!
//! The reference system read these values from a mutable configuration
//! singleton. Here they are a plain value: validated once, passed to
//! [`crate::application::DocumentService`] at construction, and never
//! changed afterwards. There is no global state.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{DossierError, DossierResult};

/// Static values projected into every rendered document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Support contact printed in the document footer.
    pub support_email: String,
    /// Signature block closing the document.
    pub signature: String,
    /// Rate applied when deriving the portfolio total.
    pub tax_rate: Decimal,
}

impl GeneratorConfig {
    /// Build a validated configuration.
    ///
    /// Fails fast — an invalid configuration is rejected here, before any
    /// service can be constructed around it.
    ///
    /// # Errors
    ///
    /// - empty or obviously malformed support email
    /// - empty signature
    /// - negative tax rate
    pub fn new(
        support_email: impl Into<String>,
        signature: impl Into<String>,
        tax_rate: Decimal,
    ) -> DossierResult<Self> {
        let config = Self {
            support_email: support_email.into(),
            signature: signature.into(),
            tax_rate,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check all invariants. Called by `new`; exposed for configurations
    /// deserialized from files.
    pub fn validate(&self) -> DossierResult<()> {
        if self.support_email.is_empty() || !self.support_email.contains('@') {
            return Err(DossierError::Configuration {
                message: format!("support email '{}' is not valid", self.support_email),
            });
        }
        if self.signature.is_empty() {
            return Err(DossierError::Configuration {
                message: "signature cannot be empty".into(),
            });
        }
        if self.tax_rate.is_sign_negative() {
            return Err(DossierError::Configuration {
                message: format!("tax rate {} cannot be negative", self.tax_rate),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_config_is_accepted() {
        let cfg = GeneratorConfig::new("support@example.com", "The Team", Decimal::new(2, 1));
        assert!(cfg.is_ok());
    }

    #[test]
    fn rejects_email_without_at_sign() {
        assert!(GeneratorConfig::new("not-an-email", "Sig", Decimal::ZERO).is_err());
    }

    #[test]
    fn rejects_empty_signature() {
        assert!(GeneratorConfig::new("a@b.c", "", Decimal::ZERO).is_err());
    }

    #[test]
    fn rejects_negative_tax_rate() {
        assert!(GeneratorConfig::new("a@b.c", "Sig", Decimal::new(-1, 1)).is_err());
    }

    #[test]
    fn zero_tax_rate_is_allowed() {
        assert!(GeneratorConfig::new("a@b.c", "Sig", Decimal::ZERO).is_ok());
    }
}
