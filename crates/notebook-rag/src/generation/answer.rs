//! Chat answering over every stored document

use super::model_select::{generation_capable, select_model};
use super::prompt::PromptBuilder;
use super::provider::GenerativeModelApi;
use crate::error::ChatError;
use crate::storage::DocumentStore;
use crate::types::request::ChatRequest;

/// Answer `request` using the full text of every stored document
///
/// Checks run in order: documents present, API key available (request field,
/// else `default_api_key`), a model selectable. A failed model listing is
/// logged and treated as an empty list.
pub async fn answer_query(
    store: &DocumentStore,
    api: &dyn GenerativeModelApi,
    default_api_key: Option<&str>,
    request: &ChatRequest,
) -> Result<String, ChatError> {
    if store.is_empty() {
        return Err(ChatError::NoDocuments);
    }

    let context = PromptBuilder::build_context(&store.get_all());

    let api_key = request
        .resolve_api_key(default_api_key)
        .ok_or(ChatError::MissingApiKey)?;

    let available = match api.list_models(api_key).await {
        Ok(models) => generation_capable(&models),
        Err(e) => {
            tracing::warn!("Error listing models from {}: {}", api.name(), e);
            Vec::new()
        }
    };

    tracing::info!("Available models: {:?}", available);
    let model = select_model(&available);
    tracing::info!("Selected model: {:?}", model);

    let model = model.ok_or(ChatError::NoSuitableModel)?;

    let prompt = PromptBuilder::build_prompt(&context, &request.query);
    let answer = api.generate_content(api_key, model, &prompt).await?;

    Ok(answer)
}
