//! Chat endpoint

use axum::{body::Bytes, extract::State, Json};

use crate::error::ChatError;
use crate::generation::answer_query;
use crate::server::state::AppState;
use crate::types::{request::ChatRequest, response::ChatResponse};

/// POST /chat - Answer a question over all documents
///
/// Always 200: failures come back as an explanatory `answer`. The body is
/// read as JSON whatever the content type, and an unreadable body counts as
/// an empty question.
pub async fn chat(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ChatResponse>, ChatError> {
    let request = ChatRequest::from_slice(&body).unwrap_or_else(|e| {
        tracing::warn!("Unreadable chat body: {}", e);
        ChatRequest::default()
    });
    tracing::info!("Chat query: \"{}\"", request.query);

    let answer = answer_query(
        state.store(),
        state.model_api(),
        state.config().gemini.default_api_key(),
        &request,
    )
    .await
    .inspect_err(|e| tracing::warn!("Chat not answered: {}", e))?;

    Ok(Json(ChatResponse::new(answer)))
}
