//! Prompt-driven analysis commands: read the input, render a prompt, ask the model.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use crate::config::{DagArgs, SchemaArgs, SqlArgs, ValidateArgs};
use crate::files::{parse_python_file, parse_schema_file, parse_sql_file};
use crate::llm::{ModelBackend, ModelClient};
use crate::prompts;

/// What the model was asked to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Task {
    SqlOptimization,
    SqlExplanation,
    DagExplanation,
    DagDebug,
    DbtGeneration,
    DbtAnalysis,
    SchemaComparison,
    SchemaValidation,
}

impl Task {
    pub fn title(&self) -> &'static str {
        match self {
            Task::SqlOptimization => "SQL optimization",
            Task::SqlExplanation => "SQL explanation",
            Task::DagExplanation => "DAG explanation",
            Task::DagDebug => "DAG troubleshooting",
            Task::DbtGeneration => "dbt generation",
            Task::DbtAnalysis => "dbt schema analysis",
            Task::SchemaComparison => "Schema comparison",
            Task::SchemaValidation => "Schema validation",
        }
    }
}

/// Result of one analysis command.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    #[serde(rename = "command")]
    pub task: Task,
    pub source: String,   // Input file(s) the prompt was built from
    pub model: String,    // Model that answered
    pub attempts: usize,  // 2 when the fallback model answered
    pub response: String, // Model output
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub saved: Vec<PathBuf>,
}

/// Send `prompt` to the model and wrap the answer in a [`Report`].
///
/// # Errors
/// Returns an error if both the effective and the fallback model fail.
pub async fn analyze<B: ModelBackend>(client: &ModelClient<B>, task: Task, source: String, prompt: String) -> Result<Report> {
    info!("🧠 {} for: {}", task.title(), source);

    let result = client.generate(&prompt, None).await.with_context(|| format!("{} failed for {}", task.title(), source))?;

    Ok(Report { task, source, model: result.model, attempts: result.attempts, response: result.text, saved: Vec::new() })
}

/// `copilot sql`: optimize or explain a SQL file.
pub async fn sql<B: ModelBackend>(args: &SqlArgs, client: &ModelClient<B>) -> Result<Report> {
    let query = parse_sql_file(&args.file).with_context(|| format!("Cannot load SQL file {}", args.file.display()))?;

    let (task, prompt) = if args.explain { (Task::SqlExplanation, prompts::sql_explain(&query)) } else { (Task::SqlOptimization, prompts::sql_optimization(&query)) };

    analyze(client, task, display(&args.file), prompt).await
}

/// `copilot dag`: explain or troubleshoot an Airflow DAG.
pub async fn dag<B: ModelBackend>(args: &DagArgs, client: &ModelClient<B>) -> Result<Report> {
    let code = parse_python_file(&args.file).with_context(|| format!("Cannot load DAG file {}", args.file.display()))?;

    let (task, prompt) = if args.troubleshoot { (Task::DagDebug, prompts::dag_debug(&code)) } else { (Task::DagExplanation, prompts::dag_explanation(&code)) };

    analyze(client, task, display(&args.file), prompt).await
}

/// `copilot schema`: describe drift between an expected and an actual schema.
pub async fn schema<B: ModelBackend>(args: &SchemaArgs, client: &ModelClient<B>) -> Result<Report> {
    let expected = load_schema(&args.expected)?;
    let actual = load_schema(&args.actual)?;

    let source = format!("{} vs {}", display(&args.expected), display(&args.actual));
    analyze(client, Task::SchemaComparison, source, prompts::schema_comparison(&expected, &actual)).await
}

/// `copilot validate`: review a single schema.
pub async fn validate<B: ModelBackend>(args: &ValidateArgs, client: &ModelClient<B>) -> Result<Report> {
    let schema = load_schema(&args.file)?;
    analyze(client, Task::SchemaValidation, display(&args.file), prompts::schema_validation(&schema)).await
}

/// Parse a YAML/JSON schema file and pretty-print it for a prompt.
pub(super) fn load_schema(path: &Path) -> Result<String> {
    let schema = parse_schema_file(path).with_context(|| format!("Cannot load schema file {}", path.display()))?;
    serde_json::to_string_pretty(&schema).context("Failed to serialize schema")
}

pub(super) fn display(path: &Path) -> String {
    path.display().to_string()
}
