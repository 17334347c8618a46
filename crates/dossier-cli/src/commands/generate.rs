//! Implementation of the `dossier generate` command.
//!
//! Responsibility: wire the built-in adapters into a `DocumentService`, run
//! one generation, and write the result to disk. No generation logic lives
//! here.

use std::path::PathBuf;

use tracing::{debug, info, instrument};

use dossier_adapters::{
    InMemoryApplicationRepository, MinimalPdfRenderer, StaticPathProvider,
    SubstitutionViewRenderer,
};
use dossier_core::application::{DocumentService, GeneratorConfig};

use crate::{
    cli::{GenerateArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `dossier generate` command.
///
/// Dispatch sequence:
/// 1. Derive the generator configuration and base URI
/// 2. Wire adapters into a `DocumentService`
/// 3. Generate; absence becomes a not-found error at this layer
/// 4. Write the PDF and report
#[instrument(skip_all, fields(application_id = %args.application_id))]
pub fn execute(
    args: GenerateArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Configuration: CLI flag beats config file.
    let base_uri = args
        .base_uri
        .unwrap_or_else(|| config.document.base_uri.clone());

    let generator_config = GeneratorConfig::new(
        &config.document.support_email,
        &config.document.signature,
        config.document.tax_rate,
    )?;

    debug!(%base_uri, tax_rate = %config.document.tax_rate, "Generator configured");

    // 2. Wire adapters.
    let service = DocumentService::new(
        Box::new(InMemoryApplicationRepository::with_seed()?),
        Box::new(StaticPathProvider::new()),
        Box::new(SubstitutionViewRenderer::with_builtin()),
        Box::new(MinimalPdfRenderer::new()),
        generator_config,
    )?;

    // 3. Generate. The core degrades "unknown id" and "state without a
    //    document" to an absent result; a missing document is an error for
    //    this command because the user asked for one.
    let bytes = service
        .generate(args.application_id, &base_uri)?
        .ok_or(CliError::NoDocument {
            id: args.application_id,
        })?;

    // 4. Write the PDF.
    let path = args
        .output
        .unwrap_or_else(|| PathBuf::from(format!("{}.pdf", args.application_id)));
    std::fs::write(&path, &bytes).map_err(|source| CliError::OutputWrite {
        path: path.clone(),
        source,
    })?;

    info!(path = %path.display(), bytes = bytes.len(), "Document written");
    output.success(&format!(
        "Document written to {} ({} bytes)",
        path.display(),
        bytes.len()
    ))?;

    if !global.quiet {
        output.print(&format!("  Application: {}", args.application_id))?;
    }

    Ok(())
}
