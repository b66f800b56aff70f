//! PDF text extraction

use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use crate::error::{Error, Result};

/// Plain text pulled out of a PDF
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedText {
    /// Page texts, each followed by a newline, concatenated
    pub text: String,
    /// Number of pages the parser reported
    pub page_count: usize,
}

/// PDF text extractor backed by `pdf-extract`
pub struct PdfExtractor;

impl PdfExtractor {
    /// Extract text from an in-memory PDF
    ///
    /// `pdf-extract` panics on some malformed inputs; those panics are
    /// reported as parse errors for `filename` like any other failure.
    pub fn extract_bytes(filename: &str, data: &[u8]) -> Result<ExtractedText> {
        let pages = panic::catch_unwind(AssertUnwindSafe(|| {
            pdf_extract::extract_text_from_mem_by_pages(data)
        }))
        .map_err(|payload| Error::file_parse(filename, panic_message(payload.as_ref())))?
        .map_err(|e| Error::file_parse(filename, e.to_string()))?;

        Ok(ExtractedText {
            page_count: pages.len(),
            text: join_pages(&pages),
        })
    }

    /// Read and extract a PDF on the blocking pool
    pub async fn extract_file(path: &Path) -> Result<ExtractedText> {
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let data = tokio::fs::read(path).await?;

        tokio::task::spawn_blocking(move || Self::extract_bytes(&filename, &data))
            .await
            .map_err(|e| Error::Internal(format!("Task join error: {}", e)))?
    }
}

fn join_pages(pages: &[String]) -> String {
    let mut text = String::with_capacity(pages.iter().map(|p| p.len() + 1).sum());
    for page in pages {
        text.push_str(page);
        text.push('\n');
    }
    text
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        format!("PDF parser panicked: {}", msg)
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        format!("PDF parser panicked: {}", msg)
    } else {
        "PDF parser panicked".to_string()
    }
}
