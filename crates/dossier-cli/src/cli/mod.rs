//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use uuid::Uuid;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "dossier",
    bin_name = "dossier",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f4c4} Application document generator",
    long_about = "Dossier generates PDF summary documents for applications, \
                  with content dispatched on the application's lifecycle state.",
    after_help = "EXAMPLES:\n\
        \x20 dossier generate 11111111-0000-0000-0000-000000000002\n\
        \x20 dossier generate 11111111-0000-0000-0000-000000000004 -o review.pdf\n\
        \x20 dossier list --format json",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate the PDF document for an application.
    #[command(
        visible_alias = "gen",
        about = "Generate an application document",
        after_help = "EXAMPLES:\n\
            \x20 dossier generate 11111111-0000-0000-0000-000000000002\n\
            \x20 dossier generate 11111111-0000-0000-0000-000000000002 --base-uri https://docs.example.com\n\
            \x20 dossier generate 11111111-0000-0000-0000-000000000004 -o review.pdf"
    )]
    Generate(GenerateArgs),

    /// List the applications known to the store.
    #[command(
        visible_alias = "ls",
        about = "List applications",
        after_help = "EXAMPLES:\n\
            \x20 dossier list\n\
            \x20 dossier list --format csv"
    )]
    List(ListArgs),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `dossier generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Identifier of the application to document.
    #[arg(value_name = "APPLICATION_ID", help = "Application identifier (UUID)")]
    pub application_id: Uuid,

    /// Base URI prepended to template path fragments.
    #[arg(
        short = 'b',
        long = "base-uri",
        value_name = "URI",
        help = "Template base URI (default from configuration)"
    )]
    pub base_uri: Option<String>,

    /// Where to write the PDF.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Output file (default: <APPLICATION_ID>.pdf)"
    )]
    pub output: Option<PathBuf>,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `dossier list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One reference number per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── tests ─────────────────────────────────────────────────────────────────────
