//! Command handlers for the copilot CLI.
//!
//! Analysis commands read an input file, render a prompt and ask the model;
//! `status` probes the endpoint and `setup` prints the setup guide.

mod analysis;
mod dbt;
mod output;
mod status;

use anyhow::Result;

use crate::config::{Command, print_setup_guide};
use crate::llm::{ModelBackend, ModelClient};

/// Run one command and print its result to stdout.
///
/// # Errors
/// Returns an error if an input file cannot be loaded, generation fails
/// after the fallback, a generated file cannot be saved, or `status` finds
/// the endpoint unhealthy.
pub async fn run<B: ModelBackend>(command: &Command, client: &ModelClient<B>) -> Result<()> {
    let (report, format) = match command {
        Command::Sql(args) => (analysis::sql(args, client).await?, args.output),
        Command::Dag(args) => (analysis::dag(args, client).await?, args.output),
        Command::Dbt(args) => (dbt::dbt(args, client).await?, args.output),
        Command::Schema(args) => (analysis::schema(args, client).await?, args.output),
        Command::Validate(args) => (analysis::validate(args, client).await?, args.output),
        Command::Status(args) => {
            let status = status::check(client).await;
            println!("{}", output::render_status(&status, args.output)?);
            if !status.healthy {
                anyhow::bail!("Ollama at {} is not reachable or has no models installed", status.endpoint);
            }
            return Ok(());
        }
        Command::Setup => {
            print_setup_guide(client.config());
            return Ok(());
        }
    };

    println!("{}", output::render_report(&report, format)?);
    Ok(())
}
