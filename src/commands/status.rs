//! `copilot status`: endpoint health and model availability.

use serde::Serialize;
use tracing::info;

use crate::llm::{ModelBackend, ModelClient};

/// Snapshot of the endpoint as seen by the client.
#[derive(Debug, Clone, Serialize)]
pub struct StatusReport {
    pub endpoint: String,
    pub healthy: bool,
    pub models: Vec<String>,
    pub primary_model: String,
    pub primary_available: bool,
    pub fallback_model: String,
    pub fallback_available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>, // Why listing failed, when it did
}

/// Probe the endpoint. Never fails: an unreachable endpoint is reported as unhealthy.
pub async fn check<B: ModelBackend>(client: &ModelClient<B>) -> StatusReport {
    let config = client.config();
    info!("Checking Ollama at {}", config.base_url);

    // One listing backs every field so the report is a consistent snapshot
    let listing = client.list_models().await;

    StatusReport {
        endpoint: config.base_url.clone(),
        healthy: !listing.is_empty(),
        models: listing.models().iter().map(|m| m.name.clone()).collect(),
        primary_model: config.primary_model.clone(),
        primary_available: listing.contains(&config.primary_model),
        fallback_model: config.fallback_model.clone(),
        fallback_available: listing.contains(&config.fallback_model),
        error: listing.failure().map(str::to_string),
    }
}
