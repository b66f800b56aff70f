//! Request and response types for the notebook API

pub mod request;
pub mod response;

pub use request::ChatRequest;
pub use response::{ChatResponse, DeleteResponse, DocumentListResponse, UploadResponse};
