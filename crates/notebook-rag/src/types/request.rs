//! Request types

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::Result;

/// Chat request body for `POST /chat`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatRequest {
    /// The question to answer
    #[serde(default, deserialize_with = "lenient_text")]
    pub query: String,
    /// Gemini API key supplied by the browser (overrides the server default)
    #[serde(default, deserialize_with = "lenient_key")]
    pub api_key: Option<String>,
}

impl ChatRequest {
    /// Create a request without a key
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            api_key: None,
        }
    }

    /// Parse a raw request body
    ///
    /// Field types are not enforced: a `null` query reads as empty and other
    /// JSON values are rendered as text. Only malformed JSON is an error.
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(body)?)
    }

    /// Attach an API key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Request key if present and non-empty, else the fallback
    pub fn resolve_api_key<'a>(&'a self, fallback: Option<&'a str>) -> Option<&'a str> {
        self.api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .or(fallback)
    }
}

fn lenient_text<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}

fn lenient_key<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}
