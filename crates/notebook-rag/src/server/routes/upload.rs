//! PDF upload endpoint

use axum::{
    extract::{Multipart, State},
    Json,
};

use crate::error::{Error, Result};
use crate::server::state::AppState;
use crate::storage::sanitize_filename;
use crate::types::response::UploadResponse;

/// Multipart field carrying the PDF
const FILE_FIELD: &str = "file";

/// POST /upload - Store, extract and index one PDF
///
/// Write and parse failures are reported in the body with status "Error";
/// only a request without a file field is rejected.
pub async fn upload_pdf(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| Error::InvalidUpload(format!("Failed to read multipart field: {}", e)))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        let data = match field.bytes().await {
            Ok(data) => data,
            Err(e) => {
                return Ok(Json(UploadResponse::failed(
                    filename,
                    format!("Failed to read file: {}", e),
                )))
            }
        };

        tracing::info!("Processing upload: {} ({} bytes)", filename, data.len());

        let response = match state.store().save_upload(&filename, &data).await {
            Ok(text) => {
                let name = sanitize_filename(&filename).unwrap_or(filename);
                UploadResponse::processed(name, &text)
            }
            Err(e) => {
                tracing::error!("Failed to process {}: {}", filename, e);
                UploadResponse::failed(filename, e)
            }
        };

        return Ok(Json(response));
    }

    Err(Error::InvalidUpload(format!(
        "Missing multipart field '{}'",
        FILE_FIELD
    )))
}
