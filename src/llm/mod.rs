//! LLM client module for interacting with language models.
//!
//! Uses RIG with the Ollama provider for local LLM inference, with a single
//! fallback model when the primary one fails.

mod backend;
mod client;
mod models;

pub use backend::ModelBackend;
pub use client::ModelClient;

#[cfg(test)]
pub(crate) mod testing;
