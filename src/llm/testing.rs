//! In-memory backend for tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use super::backend::ModelBackend;
use super::client::GENERATION_TEMPERATURE;
use super::models::ModelDescriptor;
use crate::error::CopilotError;

/// Backend answering from a fixed table and recording every completion attempt.
#[derive(Default)]
pub struct StubBackend {
    replies: HashMap<String, String>,      // model -> reply; missing models fail
    listing: Option<Vec<ModelDescriptor>>, // None makes listing fail
    calls: Mutex<Vec<String>>,             // models asked, in order
    prompts: Mutex<Vec<String>>,           // prompts received, in order
    listings: Mutex<usize>,                // list_models calls
}

impl StubBackend {
    pub fn reply(mut self, model: &str, text: &str) -> Self {
        self.replies.insert(model.to_string(), text.to_string());
        self
    }

    pub fn listing(mut self, names: &[&str]) -> Self {
        self.listing = Some(names.iter().map(|n| ModelDescriptor::named(*n)).collect());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn listings(&self) -> usize {
        *self.listings.lock().unwrap()
    }
}

#[async_trait]
impl ModelBackend for StubBackend {
    async fn complete(&self, model: &str, prompt: &str, temperature: f64) -> Result<String, CopilotError> {
        assert_eq!(temperature, GENERATION_TEMPERATURE);
        self.calls.lock().unwrap().push(model.to_string());
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.replies.get(model).cloned().ok_or_else(|| CopilotError::transport(model, "model not found"))
    }

    async fn list_models(&self) -> Result<Vec<ModelDescriptor>, CopilotError> {
        *self.listings.lock().unwrap() += 1;
        self.listing.clone().ok_or_else(|| CopilotError::transport("*", "connection refused"))
    }
}
