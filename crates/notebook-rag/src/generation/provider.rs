//! Generative model API abstraction

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Method name a model must support to answer questions
pub const GENERATE_CONTENT: &str = "generateContent";

/// A model advertised by the remote API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelInfo {
    /// Full resource name, e.g. `models/gemini-1.5-flash`
    pub name: String,
    /// API methods the model accepts
    #[serde(default)]
    pub supported_generation_methods: Vec<String>,
}

impl ModelInfo {
    pub fn new(name: impl Into<String>, methods: &[&str]) -> Self {
        Self {
            name: name.into(),
            supported_generation_methods: methods.iter().map(|m| m.to_string()).collect(),
        }
    }

    /// Whether the model can be used for `generateContent`
    pub fn can_generate_content(&self) -> bool {
        self.supported_generation_methods
            .iter()
            .any(|m| m == GENERATE_CONTENT)
    }
}

/// Trait for remote generative model access
///
/// The API key travels with every call: it may come from the chat request
/// rather than the server configuration.
///
/// Implementations:
/// - `GeminiClient`: Google Generative Language API
#[async_trait]
pub trait GenerativeModelApi: Send + Sync {
    /// List every model visible to `api_key`
    async fn list_models(&self, api_key: &str) -> Result<Vec<ModelInfo>>;

    /// Generate a completion for `prompt` with `model`
    async fn generate_content(&self, api_key: &str, model: &str, prompt: &str) -> Result<String>;

    /// Get provider name for logging
    fn name(&self) -> &str;
}
