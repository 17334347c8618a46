//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The CLI
//! layer owns config; the core crate only ever sees the validated
//! [`dossier_core::application::GeneratorConfig`] derived from it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Config file (`--config FILE`, or the default location if present)
//! 3. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Document generation settings.
    pub document: DocumentConfig,
    /// Output settings.
    pub output: OutputConfig,
}

/// Settings that feed the core's generator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentConfig {
    /// Contact address printed on every document.
    pub support_email: String,
    /// Sign-off line printed on every document.
    pub signature: String,
    /// Rate applied to each fund's net value when totalling a portfolio.
    pub tax_rate: Decimal,
    /// Base URI prepended to template path fragments.
    pub base_uri: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            support_email: "support@dossier.example".into(),
            signature: "The Dossier Team".into(),
            tax_rate: Decimal::new(2, 1), // 0.2
            base_uri: "https://docs.dossier.example".into(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "human".into(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            document: DocumentConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// An explicit `--config FILE` must exist and parse; the default location
    /// is optional and silently skipped when absent.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        match config_file {
            Some(path) => Self::from_file(path),
            None => {
                let default = Self::config_path();
                if default.exists() {
                    Self::from_file(&default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn from_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("parsing config file {}", path.display()))
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.dossier.json` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "dossier", "dossier")
            .map(|d| d.config_dir().join("config.json"))
            .unwrap_or_else(|| PathBuf::from(".dossier.json"))
    }
}
