//! Model-selection policy
//!
//! Picks the model used for a chat request from whatever the API key can
//! see: an exact preference list first, then any model of the preferred
//! family, then the first model at all.

use super::provider::ModelInfo;

/// Exact model names, most preferred first
pub const PREFERRED_MODELS: &[&str] = &[
    "models/gemini-1.5-flash",
    "models/gemini-1.5-flash-002",
    "models/gemini-1.5-flash-001",
    "models/gemini-1.5-pro",
    "models/gemini-1.0-pro",
    "models/gemini-pro",
];

/// Family matched by substring when no exact preference is available
pub const PREFERRED_FAMILY: &str = "gemini-1.5-flash";

/// Names of the models that support content generation, in API order
pub fn generation_capable(models: &[ModelInfo]) -> Vec<String> {
    models
        .iter()
        .filter(|m| m.can_generate_content())
        .map(|m| m.name.clone())
        .collect()
}

/// Choose a model from `available`, or `None` if the list is empty
pub fn select_model(available: &[String]) -> Option<&str> {
    PREFERRED_MODELS
        .iter()
        .find_map(|p| available.iter().find(|a| a.as_str() == *p))
        .or_else(|| available.iter().find(|a| a.contains(PREFERRED_FAMILY)))
        .or_else(|| available.first())
        .map(String::as_str)
}
