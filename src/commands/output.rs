//! Rendering of command results as rich text or JSON.

use anyhow::{Context, Result};
use serde::Serialize;

use super::analysis::Report;
use super::status::StatusReport;
use crate::config::OutputFormat;

const RULE_WIDTH: usize = 67;

/// Render an analysis report.
pub fn render_report(report: &Report, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(report),
        OutputFormat::Rich => {
            let rule = "═".repeat(RULE_WIDTH);
            let mut out = format!("{rule}\n  {}: {}\n", report.task.title(), report.source);
            if report.attempts > 1 {
                out.push_str(&format!("  Model: {} (fallback)\n", report.model));
            } else {
                out.push_str(&format!("  Model: {}\n", report.model));
            }
            out.push_str(&format!("{rule}\n\n{}\n", report.response));

            if !report.saved.is_empty() {
                out.push_str(&format!("\n{}\n", "─".repeat(RULE_WIDTH)));
                for path in &report.saved {
                    out.push_str(&format!("Saved file: {}\n", path.display()));
                }
            }

            Ok(out)
        }
    }
}

/// Render an endpoint status report.
pub fn render_status(status: &StatusReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(status),
        OutputFormat::Rich => {
            let rule = "═".repeat(RULE_WIDTH);
            let mark = |ok: bool| if ok { "✅" } else { "❌" };

            let mut out = format!("{rule}\n  Ollama status: {}\n{rule}\n\n", status.endpoint);
            out.push_str(&format!("{} Endpoint healthy\n", mark(status.healthy)));
            if let Some(ref error) = status.error {
                out.push_str(&format!("   {error}\n"));
            }
            out.push_str(&format!("{} Primary model {}\n", mark(status.primary_available), status.primary_model));
            out.push_str(&format!("{} Fallback model {}\n", mark(status.fallback_available), status.fallback_model));

            if !status.models.is_empty() {
                out.push_str(&format!("\n── Installed models ({}) ──\n", status.models.len()));
                for name in &status.models {
                    out.push_str(&format!("  {name}\n"));
                }
            }

            Ok(out)
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize output")
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::commands::analysis::Task;

    fn report() -> Report {
        Report {
            task: Task::SqlOptimization,
            source: "queries/orders.sql".to_string(),
            model: "mistral:7b".to_string(),
            attempts: 2,
            response: "## Performance Analysis\nAdd an index.".to_string(),
            saved: Vec::new(),
        }
    }

    #[test]
    fn test_rich_report_mentions_fallback() {
        let out = render_report(&report(), OutputFormat::Rich).unwrap();
        assert!(out.contains("SQL optimization: queries/orders.sql"));
        assert!(out.contains("Model: mistral:7b (fallback)"));
        assert!(out.contains("Add an index."));
        assert!(!out.contains("Saved file"));
    }

    #[test]
    fn test_json_report_fields() {
        let mut report = report();
        report.saved = vec![PathBuf::from("models/stg_orders.sql")];
        let value: serde_json::Value = serde_json::from_str(&render_report(&report, OutputFormat::Json).unwrap()).unwrap();
        assert_eq!(value["command"], "sql-optimization");
        assert!(value.get("task").is_none());
        assert_eq!(value["source"], "queries/orders.sql");
        assert_eq!(value["model"], "mistral:7b");
        assert_eq!(value["attempts"], 2);
        assert_eq!(value["saved"][0], "models/stg_orders.sql");
    }

    #[test]
    fn test_json_report_omits_empty_saved() {
        let value: serde_json::Value = serde_json::from_str(&render_report(&report(), OutputFormat::Json).unwrap()).unwrap();
        assert!(value.get("saved").is_none());
    }

    #[test]
    fn test_rich_status_for_unreachable_endpoint() {
        let status = StatusReport {
            endpoint: "http://localhost:11434".to_string(),
            healthy: false,
            models: Vec::new(),
            primary_model: "codellama:7b".to_string(),
            primary_available: false,
            fallback_model: "mistral:7b".to_string(),
            fallback_available: false,
            error: Some("connection refused".to_string()),
        };
        let out = render_status(&status, OutputFormat::Rich).unwrap();
        assert!(out.contains("❌ Endpoint healthy"));
        assert!(out.contains("connection refused"));
        assert!(!out.contains("Installed models"));
    }
}
