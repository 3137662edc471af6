//! Command-line argument parsing.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use super::ModelConfig;

/// Data Engineering CLI Copilot command line.
#[derive(Parser, Debug, Clone)]
#[command(name = "copilot", disable_version_flag = true)]
#[command(
    about = "🤖 Data Engineering CLI Copilot - AI-powered assistant for data engineers",
    long_about = "🤖 Data Engineering CLI Copilot - AI-powered assistant for data engineers.\n\n\
                  Powered by local LLMs via Ollama, this tool helps data engineers with:\n  \
                  • SQL optimization and analysis\n  \
                  • Airflow DAG explanation and debugging\n  \
                  • dbt model generation from schemas\n  \
                  • Schema drift detection and comparison"
)]
pub struct Cli {
    /// Show version and exit
    #[arg(long, short = 'v')]
    pub version: bool,

    /// Enable debug mode
    #[arg(long, global = true)]
    pub debug: bool,

    /// Primary Ollama model [default: codellama:7b]
    #[arg(long, short = 'm', env = "OLLAMA_MODEL", global = true)]
    pub model: Option<String>,

    /// Model tried once when the primary model fails [default: mistral:7b]
    #[arg(long, env = "OLLAMA_FALLBACK_MODEL", global = true)]
    pub fallback_model: Option<String>,

    /// Ollama API URL [default: http://localhost:11434]
    #[arg(long, short = 'u', env = "OLLAMA_BASE_URL", global = true)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Build the model configuration from the parsed arguments and environment.
    pub fn model_config(&self) -> ModelConfig {
        ModelConfig::resolve(self.model.clone(), self.fallback_model.clone(), self.base_url.clone())
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Optimize SQL queries using AI analysis
    Sql(SqlArgs),
    /// Explain Airflow DAGs using AI analysis
    Dag(DagArgs),
    /// Generate dbt models from schema files
    Dbt(DbtArgs),
    /// Compare schemas and detect drift
    Schema(SchemaArgs),
    /// Validate a schema file for design issues
    Validate(ValidateArgs),
    /// Check that Ollama is reachable and the configured models are installed
    Status(StatusArgs),
    /// Setup the copilot environment and dependencies
    Setup,
}

/// How command results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable banner and text
    #[default]
    Rich,
    /// A single JSON object
    Json,
}

/// Layer of the dbt project a generated model belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum DbtModelType {
    #[default]
    Staging,
    Intermediate,
    Mart,
}

impl DbtModelType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DbtModelType::Staging => "staging",
            DbtModelType::Intermediate => "intermediate",
            DbtModelType::Mart => "mart",
        }
    }

    /// Conventional dbt file-name prefix for this layer.
    pub fn prefix(&self) -> &'static str {
        match self {
            DbtModelType::Staging => "stg",
            DbtModelType::Intermediate => "int",
            DbtModelType::Mart => "fct",
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct SqlArgs {
    /// SQL file to optimize
    pub file: PathBuf,

    /// Explain what the query does instead of optimizing it
    #[arg(long)]
    pub explain: bool,

    /// Output format (rich/json)
    #[arg(long, short = 'o', value_enum, default_value = "rich")]
    pub output: OutputFormat,
}

#[derive(Args, Debug, Clone)]
pub struct DagArgs {
    /// Airflow DAG file to explain
    pub file: PathBuf,

    /// Look for bugs and bad practices instead of explaining the DAG
    #[arg(long)]
    pub troubleshoot: bool,

    /// Output format (rich/json)
    #[arg(long, short = 'o', value_enum, default_value = "rich")]
    pub output: OutputFormat,
}

#[derive(Args, Debug, Clone)]
pub struct DbtArgs {
    /// Schema file (YAML or JSON) to generate a dbt model from
    pub file: PathBuf,

    /// Save generated files
    #[arg(long, short = 's')]
    pub save: bool,

    /// Recommend a model structure instead of generating one
    #[arg(long, conflicts_with = "save")]
    pub analyze: bool,

    /// Source table name (defaults to the schema file name)
    #[arg(long)]
    pub table_name: Option<String>,

    /// Layer of the generated model
    #[arg(long, value_enum, default_value = "staging")]
    pub model_type: DbtModelType,

    /// dbt model name (defaults to <prefix>_<table name>)
    #[arg(long)]
    pub model_name: Option<String>,

    /// Directory that receives saved model files
    #[arg(long, default_value = "models")]
    pub out_dir: PathBuf,

    /// Output format (rich/json)
    #[arg(long, short = 'o', value_enum, default_value = "rich")]
    pub output: OutputFormat,
}

#[derive(Args, Debug, Clone)]
pub struct SchemaArgs {
    /// Expected schema file
    pub expected: PathBuf,

    /// Actual schema file
    pub actual: PathBuf,

    /// Output format (rich/json)
    #[arg(long, short = 'o', value_enum, default_value = "rich")]
    pub output: OutputFormat,
}

#[derive(Args, Debug, Clone)]
pub struct ValidateArgs {
    /// Schema file to validate
    pub file: PathBuf,

    /// Output format (rich/json)
    #[arg(long, short = 'o', value_enum, default_value = "rich")]
    pub output: OutputFormat,
}

#[derive(Args, Debug, Clone)]
pub struct StatusArgs {
    /// Output format (rich/json)
    #[arg(long, short = 'o', value_enum, default_value = "rich")]
    pub output: OutputFormat,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_dbt_defaults() {
        let cli = Cli::try_parse_from(["copilot", "dbt", "orders.yml"]).unwrap();
        let Some(Command::Dbt(args)) = cli.command else { panic!("expected dbt command") };
        assert_eq!(args.model_type, DbtModelType::Staging);
        assert_eq!(args.out_dir, PathBuf::from("models"));
        assert_eq!(args.output, OutputFormat::Rich);
        assert!(!args.save);
    }

    #[test]
    fn test_global_model_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["copilot", "sql", "q.sql", "--model", "sqlcoder:7b", "-o", "json"]).unwrap();
        assert_eq!(cli.model.as_deref(), Some("sqlcoder:7b"));
        let Some(Command::Sql(args)) = cli.command else { panic!("expected sql command") };
        assert_eq!(args.output, OutputFormat::Json);
    }

    #[test]
    fn test_schema_requires_two_files() {
        assert!(Cli::try_parse_from(["copilot", "schema", "expected.yml"]).is_err());
    }

    #[test]
    fn test_dbt_analyze_conflicts_with_save() {
        assert!(Cli::try_parse_from(["copilot", "dbt", "orders.yml", "--save", "--analyze"]).is_err());
    }

    #[test]
    fn test_model_type_prefixes() {
        assert_eq!(DbtModelType::Staging.prefix(), "stg");
        assert_eq!(DbtModelType::Mart.as_str(), "mart");
    }
}
