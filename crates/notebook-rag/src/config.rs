//! Configuration for the notebook server

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main notebook configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotebookConfig {
    /// Server configuration
    pub server: ServerConfig,
    /// Upload and asset locations
    pub storage: StorageConfig,
    /// Gemini API configuration
    pub gemini: GeminiConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host address
    pub host: String,
    /// Port number
    pub port: u16,
    /// Enable CORS
    pub enable_cors: bool,
    /// Maximum upload size in bytes (default: 100MB)
    pub max_upload_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            enable_cors: true,
            max_upload_size: 100 * 1024 * 1024, // 100MB
        }
    }
}

/// Static assets shipped with this crate
pub const DEFAULT_STATIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/static");

/// Where uploaded PDFs and static assets live
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the original uploaded PDFs, rescanned on startup
    pub upload_dir: PathBuf,
    /// Directory served under `/static`
    pub static_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            upload_dir: PathBuf::from("uploads"),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }
}

/// Gemini (Generative Language API) configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    /// API base URL, including the version segment
    pub base_url: String,
    /// Fallback API key used when a chat request carries none
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            api_key: None,
            timeout_secs: 120,
        }
    }
}

impl GeminiConfig {
    /// Configured fallback key, ignoring empty values
    pub fn default_api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|k| !k.is_empty())
    }
}
