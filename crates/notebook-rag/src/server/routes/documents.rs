//! Document management endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::Result;
use crate::server::state::AppState;
use crate::storage::DeleteOutcome;
use crate::types::response::{DeleteResponse, DocumentListResponse};

/// GET /documents - List stored document names
pub async fn list_documents(State(state): State<AppState>) -> Json<DocumentListResponse> {
    Json(DocumentListResponse {
        documents: state.store().list_ids(),
    })
}

/// DELETE /documents/:filename - Forget a document and delete its file
pub async fn delete_document(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<Json<DeleteResponse>> {
    let response = match state.store().delete(&filename).await? {
        DeleteOutcome::Deleted => DeleteResponse::deleted(filename),
        DeleteOutcome::NotFound => DeleteResponse::not_found(filename),
    };

    Ok(Json(response))
}
