//! Model invocation client with single-level fallback.

use anyhow::Result;
use tracing::{debug, info, warn};

use super::backend::{ModelBackend, OllamaBackend};
use super::models::ModelListing;
use crate::config::ModelConfig;
use crate::error::CopilotError;

/// Sampling temperature for every generation (deterministic-leaning output).
pub const GENERATION_TEMPERATURE: f64 = 0.1;

/// Text produced by a generation, with the model that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult {
    pub text: String,    // Trimmed response text
    pub model: String,   // Model that answered
    pub attempts: usize, // Endpoint calls made (1 or 2)
}

/// Client that sends prompts to a model endpoint, falling back once to a secondary model.
pub struct ModelClient<B = OllamaBackend> {
    config: ModelConfig, // Immutable model configuration
    backend: B,          // Endpoint transport
}

impl ModelClient<OllamaBackend> {
    /// Create a client talking to the Ollama endpoint in `config`.
    ///
    /// # Arguments
    /// * `config` - Resolved model configuration
    ///
    /// # Returns
    /// A new `ModelClient` instance.
    ///
    /// # Errors
    /// Returns an error if the Ollama client cannot be created.
    pub fn new(config: ModelConfig) -> Result<Self> {
        let backend = OllamaBackend::new(&config)?;
        info!("Initialized Ollama client at {} with model: {}", config.base_url, config.primary_model);
        Ok(Self::with_backend(config, backend))
    }
}

impl<B: ModelBackend> ModelClient<B> {
    pub fn with_backend(config: ModelConfig, backend: B) -> Self {
        Self { config, backend }
    }

    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    #[cfg(test)]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Generate text for `prompt`, optionally with a model other than the primary.
    ///
    /// The effective model (override or primary) is tried first; on failure the
    /// fallback model is tried once, unless it is the effective model.
    ///
    /// # Arguments
    /// * `prompt` - The prompt to send
    /// * `model_override` - Model to use instead of the configured primary
    ///
    /// # Returns
    /// The response text with surrounding whitespace removed, and the model that produced it.
    ///
    /// # Errors
    /// Returns the last candidate's transport error when every candidate fails.
    pub async fn generate(&self, prompt: &str, model_override: Option<&str>) -> Result<GenerationResult, CopilotError> {
        let candidates = self.candidates(model_override);
        let mut last_error = None;

        for (attempt, model) in candidates.iter().enumerate() {
            if attempt > 0 {
                warn!("Trying fallback model: {}", model);
            }

            match self.backend.complete(model, prompt, GENERATION_TEMPERATURE).await {
                Ok(text) => {
                    debug!("Model {} answered with {} chars", model, text.len());
                    return Ok(GenerationResult { text: text.trim().to_string(), model: model.to_string(), attempts: attempt + 1 });
                }
                Err(e) => {
                    warn!("Error with model {}: {}", model, e);
                    last_error = Some(e);
                }
            }
        }

        // candidates is never empty
        Err(last_error.unwrap_or_else(|| CopilotError::transport(self.config.primary_model.as_str(), "no model to try")))
    }

    /// Ordered models to try: the effective model, then the fallback unless they are the same.
    fn candidates<'a>(&'a self, model_override: Option<&'a str>) -> Vec<&'a str> {
        let effective = model_override.unwrap_or(&self.config.primary_model);
        if effective == self.config.fallback_model { vec![effective] } else { vec![effective, self.config.fallback_model.as_str()] }
    }

    /// Query the endpoint for installed models; failures become [`ModelListing::Unavailable`].
    pub async fn list_models(&self) -> ModelListing {
        match self.backend.list_models().await {
            Ok(models) => ModelListing::Observed(models),
            Err(e) => {
                warn!("Error listing models: {}", e);
                ModelListing::Unavailable(e.to_string())
            }
        }
    }

    /// Whether a model with exactly this name is installed.
    pub async fn is_model_available(&self, name: &str) -> bool {
        self.list_models().await.contains(name)
    }

    /// Whether the endpoint is reachable and has at least one model.
    pub async fn health_check(&self) -> bool {
        !self.list_models().await.is_empty()
    }
}
