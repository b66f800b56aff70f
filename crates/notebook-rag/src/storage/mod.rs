//! Document storage: extracted text in memory, original PDFs on disk

mod document_store;

pub use document_store::{sanitize_filename, DeleteOutcome, DocumentStore};
