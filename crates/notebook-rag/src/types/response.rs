//! Response types for the notebook API

use serde::{Deserialize, Serialize};

/// Characters of extracted text echoed back after an upload
pub const PREVIEW_CHARS: usize = 100;

/// Result of `POST /upload`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    /// Uploaded filename
    pub filename: String,
    /// "Processed" or "Error"
    pub status: String,
    /// Start of the extracted text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_preview: Option<String>,
    /// Failure description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl UploadResponse {
    /// Successful upload with a preview of the extracted text
    pub fn processed(filename: impl Into<String>, text: &str) -> Self {
        Self {
            filename: filename.into(),
            status: "Processed".to_string(),
            text_preview: Some(text_preview(text)),
            error: None,
        }
    }

    /// Failed upload
    pub fn failed(filename: impl Into<String>, error: impl ToString) -> Self {
        Self {
            filename: filename.into(),
            status: "Error".to_string(),
            text_preview: None,
            error: Some(error.to_string()),
        }
    }
}

/// First [`PREVIEW_CHARS`] characters followed by an ellipsis
pub fn text_preview(text: &str) -> String {
    let mut preview: String = text.chars().take(PREVIEW_CHARS).collect();
    preview.push_str("...");
    preview
}

/// Result of `GET /documents`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentListResponse {
    /// Stored document filenames
    pub documents: Vec<String>,
}

/// Result of `DELETE /documents/:filename`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteResponse {
    /// "Deleted" or "Not Found"
    pub status: String,
    pub filename: String,
}

impl DeleteResponse {
    pub fn deleted(filename: impl Into<String>) -> Self {
        Self {
            status: "Deleted".to_string(),
            filename: filename.into(),
        }
    }

    pub fn not_found(filename: impl Into<String>) -> Self {
        Self {
            status: "Not Found".to_string(),
            filename: filename.into(),
        }
    }
}

/// Result of `POST /chat`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub answer: String,
}

impl ChatResponse {
    pub fn new(answer: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
        }
    }
}
