//! Error types for the notebook server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::types::response::ChatResponse;

/// Result type alias for notebook operations
pub type Result<T> = std::result::Result<T, Error>;

/// Notebook errors
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// File parsing error
    #[error("Failed to parse file '{filename}': {message}")]
    FileParse { filename: String, message: String },

    /// Filename unusable as a path inside the upload directory
    #[error("Invalid filename: {0:?}")]
    InvalidFilename(String),

    /// Malformed upload request
    #[error("Invalid upload: {0}")]
    InvalidUpload(String),

    /// Gemini/LLM error
    #[error("LLM error: {0}")]
    Llm(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP client error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a file parse error
    pub fn file_parse(filename: impl Into<String>, message: impl Into<String>) -> Self {
        Self::FileParse {
            filename: filename.into(),
            message: message.into(),
        }
    }

    /// Create an LLM error
    pub fn llm(message: impl Into<String>) -> Self {
        Self::Llm(message.into())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match &self {
            Error::Config(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "config_error", msg.clone()),
            Error::FileParse { filename, message } => (
                StatusCode::BAD_REQUEST,
                "parse_error",
                format!("Failed to parse '{}': {}", filename, message),
            ),
            Error::InvalidFilename(name) => (
                StatusCode::BAD_REQUEST,
                "invalid_filename",
                format!("Invalid filename: {:?}", name),
            ),
            Error::InvalidUpload(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "invalid_upload", msg.clone())
            }
            Error::Llm(msg) => (StatusCode::SERVICE_UNAVAILABLE, "llm_error", msg.clone()),
            Error::Io(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "io_error",
                err.to_string(),
            ),
            Error::Json(err) => (StatusCode::BAD_REQUEST, "json_error", err.to_string()),
            Error::Http(err) => (StatusCode::BAD_GATEWAY, "http_error", err.to_string()),
            Error::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg.clone())
            }
        };

        let body = Json(json!({
            "error": {
                "type": error_type,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}

/// Why a chat question could not be answered
///
/// The chat endpoint never fails at the HTTP level: every variant is turned
/// into a `200 {"answer": ...}` body carrying an explanation for the user.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("No documents uploaded yet. Please upload a PDF first.")]
    NoDocuments,

    #[error("⚠️ Missing Google Gemini API Key. \n\nPlease enter your API Key in the sidebar settings on the left, or set GEMINI_API_KEY env var.")]
    MissingApiKey,

    #[error("Error: No suitable Gemini models found for your API key.")]
    NoSuitableModel,

    #[error("Error generating response: {0}")]
    Generation(String),
}

impl From<Error> for ChatError {
    fn from(err: Error) -> Self {
        ChatError::Generation(err.to_string())
    }
}

impl IntoResponse for ChatError {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(ChatResponse::new(self.to_string()))).into_response()
    }
}
