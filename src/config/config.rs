//! Model endpoint configuration.

use anyhow::Result;
use tracing::info;

/// Primary model when neither the command line nor `OLLAMA_MODEL` names one.
pub const DEFAULT_MODEL: &str = "codellama:7b";

/// Fallback model when `OLLAMA_FALLBACK_MODEL` is unset.
pub const DEFAULT_FALLBACK_MODEL: &str = "mistral:7b";

/// Ollama endpoint when neither the command line nor `OLLAMA_BASE_URL` names one.
pub const DEFAULT_BASE_URL: &str = "http://localhost:11434";

/// Models and endpoint used by the model client. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelConfig {
    pub primary_model: String,  // First model tried for every request
    pub fallback_model: String, // Substituted once after a failure
    pub base_url: String,       // Endpoint root, no trailing slash
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MODEL, DEFAULT_FALLBACK_MODEL, DEFAULT_BASE_URL)
    }
}

impl ModelConfig {
    pub fn new(primary_model: impl Into<String>, fallback_model: impl Into<String>, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self { primary_model: primary_model.into(), fallback_model: fallback_model.into(), base_url: base_url.trim_end_matches('/').to_string() }
    }

    /// Resolve a configuration from optional values, filling gaps with the defaults.
    ///
    /// Environment variables are read once by the command-line parser, so the
    /// values passed here already include `OLLAMA_*` overrides.
    pub fn resolve(primary_model: Option<String>, fallback_model: Option<String>, base_url: Option<String>) -> Self {
        Self::new(
            primary_model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            fallback_model.unwrap_or_else(|| DEFAULT_FALLBACK_MODEL.to_string()),
            base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        )
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.primary_model.trim().is_empty() {
            anyhow::bail!("Primary model name must not be empty");
        }

        if self.fallback_model.trim().is_empty() {
            anyhow::bail!("Fallback model name must not be empty");
        }

        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            anyhow::bail!("Ollama base URL must start with http:// or https://, got '{}'", self.base_url);
        }

        Ok(())
    }

    /// Log the current configuration.
    pub fn log_config(&self) {
        info!("Configuration:");
        info!("  Ollama URL: {}", self.base_url);
        info!("  Primary model: {}", self.primary_model);
        info!("  Fallback model: {}", self.fallback_model);
    }
}
