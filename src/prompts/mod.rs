//! Prompt templates and rendering.
//!
//! Each template has a typed render function so callers cannot forget a
//! placeholder. Substitution is a single pass: text inserted for one
//! placeholder is never scanned for others.

mod templates;

use templates::{DAG_DEBUG, DAG_EXPLANATION, DBT_MODEL_GENERATION, DBT_SCHEMA_ANALYSIS, SCHEMA_COMPARISON, SCHEMA_VALIDATION, SQL_EXPLAIN, SQL_OPTIMIZATION};

/// Prompt asking for optimization suggestions and a rewritten query.
pub fn sql_optimization(sql_query: &str) -> String {
    fill(SQL_OPTIMIZATION, &[("sql_query", sql_query)])
}

/// Prompt asking for a plain-language explanation of a query.
pub fn sql_explain(sql_query: &str) -> String {
    fill(SQL_EXPLAIN, &[("sql_query", sql_query)])
}

pub fn dag_explanation(dag_code: &str) -> String {
    fill(DAG_EXPLANATION, &[("dag_code", dag_code)])
}

pub fn dag_debug(dag_code: &str) -> String {
    fill(DAG_DEBUG, &[("dag_code", dag_code)])
}

/// Prompt asking for a dbt model (SQL + YAML) built from `schema`.
pub fn dbt_model_generation(schema: &str, table_name: &str, model_type: &str, model_name: &str) -> String {
    fill(DBT_MODEL_GENERATION, &[("schema", schema), ("table_name", table_name), ("model_type", model_type), ("model_name", model_name)])
}

pub fn dbt_schema_analysis(schema: &str) -> String {
    fill(DBT_SCHEMA_ANALYSIS, &[("schema", schema)])
}

/// Prompt asking the model to describe drift between two schemas.
pub fn schema_comparison(expected_schema: &str, actual_schema: &str) -> String {
    fill(SCHEMA_COMPARISON, &[("expected_schema", expected_schema), ("actual_schema", actual_schema)])
}

pub fn schema_validation(schema: &str) -> String {
    fill(SCHEMA_VALIDATION, &[("schema", schema)])
}

/// Replace `{name}` placeholders found in `template` with their values.
///
/// Braces that do not enclose a known name are copied through unchanged.
fn fill(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len() + vars.iter().map(|(_, v)| v.len()).sum::<usize>());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let replaced = after.find('}').and_then(|close| {
            let name = &after[..close];
            vars.iter().find(|(key, _)| *key == name).map(|(_, value)| (close, *value))
        });

        match replaced {
            Some((close, value)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}
