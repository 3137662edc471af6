//! `copilot dbt`: generate a dbt model from a schema file and optionally save it.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use anyhow::{Context, Result};
use regex::Regex;
use tracing::warn;

use super::analysis::{Report, Task, analyze, display, load_schema};
use crate::config::DbtArgs;
use crate::error::CopilotError;
use crate::files::save_file;
use crate::llm::{ModelBackend, ModelClient};
use crate::prompts;

/// Fenced markdown block: opening fence with optional language, body, closing fence.
static CODE_BLOCK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?ms)^```[ \t]*([A-Za-z0-9_+-]*)[ \t]*\r?\n(.*?)^```").expect("Failed to compile code block regex"));

/// A fenced code block found in model output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock<'a> {
    pub lang: &'a str,
    pub body: &'a str,
}

/// Run the dbt command.
///
/// # Errors
/// Returns an error if the schema cannot be loaded, generation fails, or a
/// generated file cannot be written.
pub async fn dbt<B: ModelBackend>(args: &DbtArgs, client: &ModelClient<B>) -> Result<Report> {
    let schema = load_schema(&args.file)?;
    let table_name = args.table_name.clone().unwrap_or_else(|| table_name_from(&args.file));
    let model_name = args.model_name.clone().unwrap_or_else(|| format!("{}_{}", args.model_type.prefix(), table_name));

    let (task, prompt) = if args.analyze {
        (Task::DbtAnalysis, prompts::dbt_schema_analysis(&schema))
    } else {
        (Task::DbtGeneration, prompts::dbt_model_generation(&schema, &table_name, args.model_type.as_str(), &model_name))
    };

    let mut report = analyze(client, task, display(&args.file), prompt).await?;

    if args.save {
        report.saved = save_generated(&report.response, &args.out_dir, &model_name).context("Failed to save generated dbt files")?;
    }

    Ok(report)
}

/// Table name implied by a schema file name (`schemas/orders.yml` -> `orders`).
fn table_name_from(path: &Path) -> String {
    path.file_stem().map(|stem| stem.to_string_lossy().into_owned()).unwrap_or_else(|| "model".to_string())
}

/// All fenced code blocks in `text`, in order.
pub fn code_blocks(text: &str) -> Vec<CodeBlock<'_>> {
    CODE_BLOCK_REGEX
        .captures_iter(text)
        .filter_map(|caps| Some(CodeBlock { lang: caps.get(1)?.as_str(), body: caps.get(2)?.as_str() }))
        .collect()
}

/// Write the SQL and YAML blocks of `response` into `out_dir`.
///
/// Falls back to saving the whole response as markdown when neither block is present.
pub fn save_generated(response: &str, out_dir: &Path, model_name: &str) -> Result<Vec<PathBuf>, CopilotError> {
    let blocks = code_blocks(response);
    let find = |langs: &[&str]| blocks.iter().find(|b| langs.iter().any(|l| b.lang.eq_ignore_ascii_case(l))).map(|b| b.body);

    let mut saved = Vec::new();
    let outputs = [(find(&["sql"]), "sql"), (find(&["yaml", "yml"]), "yml")];

    for (body, ext) in outputs {
        if let Some(body) = body {
            let path = out_dir.join(format!("{model_name}.{ext}"));
            save_file(&format!("{}\n", body.trim_end()), &path)?;
            saved.push(path);
        }
    }

    if saved.is_empty() {
        warn!("No sql/yaml code blocks in the model response, saving it as markdown");
        let path = out_dir.join(format!("{model_name}.md"));
        save_file(response, &path)?;
        saved.push(path);
    }

    Ok(saved)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::config::{DbtModelType, ModelConfig, OutputFormat};
    use crate::llm::testing::StubBackend;

    const RESPONSE: &str = "## dbt Model SQL\n```sql\n-- models/stg_orders.sql\nselect * from {{ source('shop', 'orders') }}\n```\n\n## dbt Model YAML\n```yaml\nversion: 2\nmodels:\n  - name: stg_orders\n```\n\n## Documentation\nDone.";

    fn args(file: PathBuf, out_dir: PathBuf) -> DbtArgs {
        DbtArgs {
            file,
            save: true,
            analyze: false,
            table_name: None,
            model_type: DbtModelType::Staging,
            model_name: None,
            out_dir,
            output: OutputFormat::Rich,
        }
    }

    #[test]
    fn test_code_blocks_are_extracted_in_order() {
        let blocks = code_blocks(RESPONSE);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].lang, "sql");
        assert!(blocks[0].body.starts_with("-- models/stg_orders.sql\n"));
        assert_eq!(blocks[1].lang, "yaml");
        assert!(blocks[1].body.contains("name: stg_orders"));
    }

    #[test]
    fn test_block_without_language() {
        let blocks = code_blocks("text\n```\nplain\n```\n");
        assert_eq!(blocks, vec![CodeBlock { lang: "", body: "plain\n" }]);
    }

    #[test]
    fn test_save_without_blocks_writes_markdown() {
        let dir = TempDir::new().unwrap();
        let saved = save_generated("no code here", dir.path(), "stg_orders").unwrap();
        assert_eq!(saved, vec![dir.path().join("stg_orders.md")]);
        assert_eq!(fs::read_to_string(&saved[0]).unwrap(), "no code here");
    }

    #[tokio::test]
    async fn test_dbt_generation_saves_sql_and_yaml() {
        let dir = TempDir::new().unwrap();
        let schema = dir.path().join("orders.yml");
        fs::write(&schema, "columns:\n  - name: order_id\n    type: integer\n").unwrap();
        let out_dir = dir.path().join("models");

        let client = ModelClient::with_backend(ModelConfig::default(), StubBackend::default().reply("codellama:7b", RESPONSE));
        let report = dbt(&args(schema, out_dir.clone()), &client).await.unwrap();

        assert_eq!(report.saved, vec![out_dir.join("stg_orders.sql"), out_dir.join("stg_orders.yml")]);
        let sql = fs::read_to_string(out_dir.join("stg_orders.sql")).unwrap();
        assert!(sql.contains("{{ source('shop', 'orders') }}"));
        assert!(sql.ends_with("}}\n"));

        let prompts = client.backend().prompts();
        let prompt = &prompts[0];
        assert!(prompt.contains("Table Name: orders"));
        assert!(prompt.contains("-- models/stg_orders.sql"));
        assert!(prompt.contains("order_id"));
    }

    #[tokio::test]
    async fn test_dbt_respects_explicit_names() {
        let dir = TempDir::new().unwrap();
        let schema = dir.path().join("raw.json");
        fs::write(&schema, r#"{"columns": []}"#).unwrap();

        let client = ModelClient::with_backend(ModelConfig::default(), StubBackend::default().reply("codellama:7b", "ok"));
        let mut args = args(schema, dir.path().join("models"));
        args.save = false;
        args.table_name = Some("customers".to_string());
        args.model_type = DbtModelType::Mart;
        let report = dbt(&args, &client).await.unwrap();

        assert!(report.saved.is_empty());
        let prompts = client.backend().prompts();
        let prompt = &prompts[0];
        assert!(prompt.contains("Table Name: customers"));
        assert!(prompt.contains("Model Type: mart"));
        assert!(prompt.contains("models/fct_customers.sql"));
    }
}
