//! Implementation of the `dossier list` command.

use dossier_adapters::InMemoryApplicationRepository;

use crate::{
    cli::{ListArgs, ListFormat, global::GlobalArgs},
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(args: ListArgs, _global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    let store = InMemoryApplicationRepository::with_seed().map_err(CliError::Core)?;
    let applications = store.list().map_err(CliError::Core)?;

    match args.format {
        ListFormat::Table => {
            output.header("Known Applications:")?;
            for app in &applications {
                output.print(&format!(
                    "  {}  {:<10} {:<20} {}  {}",
                    app.id,
                    app.state.label(),
                    app.person.full_name(),
                    app.applied_on,
                    app.reference_number,
                ))?;
            }
        }

        ListFormat::List => {
            for app in &applications {
                println!("{}", app.reference_number);
            }
        }

        ListFormat::Json => {
            // Serialise to stdout directly (bypasses OutputManager because
            // JSON output must be parseable even in non-TTY pipes).
            let json = serde_json::to_string_pretty(&applications)
                .unwrap_or_else(|_| "[]".into());
            println!("{json}");
        }

        ListFormat::Csv => {
            println!("id,reference,state,applicant,applied_on");
            for app in &applications {
                println!(
                    "{},{},{},{},{}",
                    app.id,
                    app.reference_number,
                    app.state,
                    app.person.full_name(),
                    app.applied_on,
                );
            }
        }
    }

    Ok(())
}
