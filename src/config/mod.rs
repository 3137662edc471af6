//! Configuration module for the copilot.
//!
//! Provides CLI argument parsing and model endpoint configuration.

mod cli;
#[allow(clippy::module_inception)]
mod config;
mod setup;

pub use cli::{Cli, Command, DagArgs, DbtArgs, OutputFormat, SchemaArgs, SqlArgs, ValidateArgs};
#[cfg(test)]
pub use cli::DbtModelType;
pub use config::ModelConfig;
pub use setup::print_setup_guide;
