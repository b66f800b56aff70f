//! notebook-rag: upload PDFs and ask questions about them
//!
//! Uploaded documents are parsed to plain text and kept in memory. Every chat
//! question is answered by a Gemini model prompted with the full text of all
//! stored documents.

pub mod config;
pub mod error;
pub mod generation;
pub mod ingestion;
pub mod server;
pub mod storage;
pub mod types;

pub use config::NotebookConfig;
pub use error::{ChatError, Error, Result};
pub use storage::DocumentStore;
pub use types::{
    request::ChatRequest,
    response::{ChatResponse, DeleteResponse, DocumentListResponse, UploadResponse},
};
