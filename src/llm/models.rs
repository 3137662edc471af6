//! Installed-model descriptors and listing results.

use serde::{Deserialize, Serialize};

/// A model installed on the endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelDescriptor {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digest: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<String>,
}

#[cfg(test)]
impl ModelDescriptor {
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into(), size: None, digest: None, modified_at: None }
    }
}

/// Body of `GET /api/tags`.
#[derive(Debug, Deserialize)]
pub(crate) struct TagsResponse {
    #[serde(default)]
    pub models: Vec<ModelDescriptor>,
}

/// Outcome of asking the endpoint which models it has.
///
/// Both variants read as "no models" through [`ModelListing::models`]; the
/// variant tells callers whether the endpoint actually answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelListing {
    /// The endpoint answered (possibly with nothing installed).
    Observed(Vec<ModelDescriptor>),
    /// The endpoint could not be queried.
    Unavailable(String),
}

impl ModelListing {
    /// Installed models, empty when the endpoint was unavailable.
    pub fn models(&self) -> &[ModelDescriptor] {
        match self {
            ModelListing::Observed(models) => models,
            ModelListing::Unavailable(_) => &[],
        }
    }

    /// Exact, case-sensitive name match.
    pub fn contains(&self, name: &str) -> bool {
        self.models().iter().any(|m| m.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.models().is_empty()
    }

    /// Failure reason when the endpoint could not be queried.
    pub fn failure(&self) -> Option<&str> {
        match self {
            ModelListing::Observed(_) => None,
            ModelListing::Unavailable(reason) => Some(reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_response_decodes_ollama_shape() {
        let body = r#"{"models":[{"name":"codellama:7b","model":"codellama:7b","size":3825819519,"digest":"8fdf8f752f6e","modified_at":"2024-05-01T10:00:00Z","details":{"family":"llama"}}]}"#;
        let tags: TagsResponse = serde_json::from_str(body).unwrap();
        assert_eq!(tags.models.len(), 1);
        assert_eq!(tags.models[0].name, "codellama:7b");
        assert_eq!(tags.models[0].size, Some(3825819519));
    }

    #[test]
    fn test_tags_response_without_models_is_empty() {
        let tags: TagsResponse = serde_json::from_str("{}").unwrap();
        assert!(tags.models.is_empty());
    }

    #[test]
    fn test_contains_is_exact_and_case_sensitive() {
        let listing = ModelListing::Observed(vec![ModelDescriptor::named("mistral:7b")]);
        assert!(listing.contains("mistral:7b"));
        assert!(!listing.contains("mistral"));
        assert!(!listing.contains("Mistral:7b"));
    }

    #[test]
    fn test_unavailable_reads_as_empty() {
        let listing = ModelListing::Unavailable("connection refused".to_string());
        assert!(listing.is_empty());
        assert!(!listing.contains("mistral:7b"));
        assert_eq!(listing.failure(), Some("connection refused"));
    }
}
