//! Application state for the notebook server

use std::sync::Arc;

use crate::config::NotebookConfig;
use crate::error::Result;
use crate::generation::{GeminiClient, GenerativeModelApi};
use crate::storage::DocumentStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// Configuration
    config: NotebookConfig,
    /// Uploaded documents
    store: DocumentStore,
    /// Generative model backend (Gemini in production)
    model_api: Arc<dyn GenerativeModelApi>,
}

impl AppState {
    /// Create state with the Gemini backend and index the upload directory
    pub async fn new(config: NotebookConfig) -> Result<Self> {
        let gemini = GeminiClient::new(&config.gemini)?;
        tracing::info!("Gemini client initialized ({})", config.gemini.base_url);

        let state = Self::with_model_api(config, Arc::new(gemini));
        let loaded = state.store().load_from_dir().await?;
        tracing::info!(
            "Loaded {} documents from {}",
            loaded,
            state.store().upload_dir().display()
        );

        Ok(state)
    }

    /// Create state with an explicit backend and an empty store
    pub fn with_model_api(config: NotebookConfig, model_api: Arc<dyn GenerativeModelApi>) -> Self {
        let store = DocumentStore::new(config.storage.upload_dir.clone());
        Self {
            inner: Arc::new(AppStateInner {
                config,
                store,
                model_api,
            }),
        }
    }

    /// Get configuration
    pub fn config(&self) -> &NotebookConfig {
        &self.inner.config
    }

    /// Get the document store
    pub fn store(&self) -> &DocumentStore {
        &self.inner.store
    }

    /// Get the generative model backend
    pub fn model_api(&self) -> &dyn GenerativeModelApi {
        self.inner.model_api.as_ref()
    }
}
