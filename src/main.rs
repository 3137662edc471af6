//! Data Engineering Copilot - an AI assistant for data engineers using local LLMs.
//!
//! Reads SQL files, Airflow DAGs and table schemas, renders them into prompts
//! and asks a model served by Ollama for optimization advice, explanations,
//! dbt models or schema drift reports.

mod commands;
mod config;
mod error;
mod files;
mod llm;
mod prompts;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::LocalTime;

use config::{Cli, Command, print_setup_guide};
use error::{CopilotError, ErrorKind};
use llm::ModelClient;

/// Initialize logging on stderr so stdout carries only command output.
///
/// Respects `RUST_LOG`, falls back to `debug` with `--debug`, defaults to `info`.
fn init_logging(debug: bool) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| if debug { EnvFilter::try_new("debug") } else { EnvFilter::try_new("info") })
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_timer(LocalTime::new(time::macros::format_description!("[hour]:[minute]:[second]")))
        .init();
}

/// Log a hint after a failed generation: Ollama down, or primary model not pulled.
async fn suggest_fix(client: &ModelClient) {
    let config = client.config();
    if !client.health_check().await {
        error!("Is Ollama running at {}? Run 'copilot status' or 'copilot setup' for help", config.base_url);
    } else if !client.is_model_available(&config.primary_model).await {
        error!("Model {} is not installed. Run 'ollama pull {}'", config.primary_model, config.primary_model);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments (OLLAMA_* variables are read here, once)
    let cli = Cli::parse();

    if cli.version {
        println!("Data Engineering Copilot v{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    init_logging(cli.debug);
    debug!("Debug mode enabled");

    let Some(command) = cli.command.as_ref() else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let config = cli.model_config();

    // The guide only names models, it never talks to the endpoint
    if matches!(command, Command::Setup) {
        print_setup_guide(&config);
        return Ok(());
    }

    if let Err(e) = config.validate() {
        error!("❌ Configuration error: {}", e);
        std::process::exit(2);
    }
    config.log_config();

    let client = ModelClient::new(config)?;

    if let Err(e) = commands::run(command, &client).await {
        error!("❌ {:#}", e);
        if e.downcast_ref::<CopilotError>().is_some_and(|err| err.kind() == ErrorKind::Transport) {
            suggest_fix(&client).await;
        }
        std::process::exit(1);
    }

    Ok(())
}
