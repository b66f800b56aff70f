//! Document ingestion: PDF text extraction

mod parser;

pub use parser::{ExtractedText, PdfExtractor};
