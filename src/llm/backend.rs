//! Model-serving backends: the seam the client talks through and the Ollama implementation.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use rig::client::{CompletionClient, Nothing};
use rig::completion::Chat;
use rig::message::Message;
use rig::providers::ollama;
use tracing::debug;

use super::models::{ModelDescriptor, TagsResponse};
use crate::config::ModelConfig;
use crate::error::CopilotError;

/// Connect timeout for the model-listing request.
const LIST_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Operations a model-serving endpoint must offer.
#[async_trait]
pub trait ModelBackend: Send + Sync {
    /// Run one single-turn completion with `model`.
    async fn complete(&self, model: &str, prompt: &str, temperature: f64) -> Result<String, CopilotError>;

    /// List the models installed on the endpoint.
    async fn list_models(&self) -> Result<Vec<ModelDescriptor>, CopilotError>;
}

/// Ollama backend: completions through RIG, listing through the native tags API.
pub struct OllamaBackend {
    client: ollama::Client, // RIG Ollama client
    http: reqwest::Client,  // Plain HTTP client for /api/tags
    base_url: String,       // Endpoint root without trailing slash
}

impl OllamaBackend {
    /// Create a new Ollama backend.
    ///
    /// # Arguments
    /// * `config` - Model configuration holding the endpoint URL
    ///
    /// # Errors
    /// Returns an error if the RIG Ollama client or the HTTP client cannot be built.
    pub fn new(config: &ModelConfig) -> Result<Self> {
        let client = ollama::Client::builder()
            .api_key(Nothing)
            .base_url(&config.base_url)
            .build()
            .context("Failed to create Ollama client")?;

        let http = reqwest::Client::builder().connect_timeout(LIST_CONNECT_TIMEOUT).build().context("Failed to create HTTP client")?;

        Ok(Self { client, http, base_url: config.base_url.clone() })
    }

    fn tags_url(&self) -> String {
        format!("{}/api/tags", self.base_url)
    }
}

#[async_trait]
impl ModelBackend for OllamaBackend {
    async fn complete(&self, model: &str, prompt: &str, temperature: f64) -> Result<String, CopilotError> {
        debug!("Sending {} prompt chars to {}", prompt.len(), model);

        let agent = self.client.agent(model).temperature(temperature).build();

        agent.chat(prompt, Vec::<Message>::new()).await.map_err(|e| CopilotError::transport(model, e))
    }

    async fn list_models(&self) -> Result<Vec<ModelDescriptor>, CopilotError> {
        let url = self.tags_url();
        debug!("Listing models from {}", url);

        let response = self.http.get(&url).send().await.map_err(|e| CopilotError::transport("*", format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CopilotError::transport("*", format!("server returned error: {status}")));
        }

        let tags: TagsResponse = response.json().await.map_err(|e| CopilotError::transport("*", format!("JSON parse error: {e}")))?;

        Ok(tags.models)
    }
}
