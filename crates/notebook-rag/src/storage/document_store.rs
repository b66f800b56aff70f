//! In-memory document registry backed by an uploads directory

use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::ingestion::PdfExtractor;

/// What a delete request found on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    NotFound,
}

/// Filename -> extracted text, plus the directory holding the original files
///
/// The lock only keeps the map itself consistent. Disk and memory are
/// updated in separate steps, so concurrent upload/delete of the same name
/// can leave them disagreeing until the next restart rescans the directory.
pub struct DocumentStore {
    upload_dir: PathBuf,
    documents: RwLock<BTreeMap<String, String>>,
}

impl DocumentStore {
    /// Create an empty store rooted at `upload_dir`
    pub fn new(upload_dir: impl Into<PathBuf>) -> Self {
        Self {
            upload_dir: upload_dir.into(),
            documents: RwLock::new(BTreeMap::new()),
        }
    }

    /// Directory holding the uploaded PDFs
    pub fn upload_dir(&self) -> &Path {
        &self.upload_dir
    }

    /// Insert or replace a document's text
    pub fn insert(&self, id: impl Into<String>, text: impl Into<String>) {
        self.documents.write().insert(id.into(), text.into());
    }

    /// Remove a document, returning its text
    pub fn remove(&self, id: &str) -> Option<String> {
        self.documents.write().remove(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.documents.read().contains_key(id)
    }

    /// Document identifiers in filename order
    pub fn list_ids(&self) -> Vec<String> {
        self.documents.read().keys().cloned().collect()
    }

    /// Snapshot of every `(id, text)` pair in filename order
    pub fn get_all(&self) -> Vec<(String, String)> {
        self.documents
            .read()
            .iter()
            .map(|(id, text)| (id.clone(), text.clone()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.documents.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.read().is_empty()
    }

    /// Scan the upload directory and index every `.pdf` in it
    ///
    /// Creates the directory if needed. Files that fail to parse are logged
    /// and skipped. Returns the number of documents loaded.
    pub async fn load_from_dir(&self) -> Result<usize> {
        tokio::fs::create_dir_all(&self.upload_dir).await?;

        let mut entries = tokio::fs::read_dir(&self.upload_dir).await?;
        let mut loaded = 0;

        while let Some(entry) = entries.next_entry().await? {
            let filename = entry.file_name().to_string_lossy().into_owned();
            if !filename.ends_with(".pdf") {
                continue;
            }
            match entry.file_type().await {
                Ok(file_type) if file_type.is_file() => {}
                Ok(_) => continue,
                Err(e) => {
                    tracing::warn!("Skipping {}: {}", filename, e);
                    continue;
                }
            }

            match PdfExtractor::extract_file(&entry.path()).await {
                Ok(extracted) => {
                    tracing::info!(
                        "Loaded existing document: {} ({} pages)",
                        filename,
                        extracted.page_count
                    );
                    self.insert(filename, extracted.text);
                    loaded += 1;
                }
                Err(e) => {
                    tracing::warn!("Failed to load {}: {}", filename, e);
                }
            }
        }

        Ok(loaded)
    }

    /// Persist an uploaded PDF, extract it and index it
    ///
    /// The file is written before extraction and stays on disk even when
    /// extraction fails. Returns the extracted text.
    pub async fn save_upload(&self, filename: &str, data: &[u8]) -> Result<String> {
        let name = sanitize_filename(filename)?;
        let path = self.upload_dir.join(&name);

        tokio::fs::create_dir_all(&self.upload_dir).await?;
        tokio::fs::write(&path, data).await?;

        let extracted = PdfExtractor::extract_file(&path).await?;
        tracing::info!(
            "Indexed upload {} ({} bytes, {} pages)",
            name,
            data.len(),
            extracted.page_count
        );

        self.insert(name, extracted.text.clone());
        Ok(extracted.text)
    }

    /// Drop a document from memory and delete its file
    ///
    /// The outcome reflects the disk state only: a name known in memory but
    /// missing on disk is still `NotFound`.
    pub async fn delete(&self, filename: &str) -> Result<DeleteOutcome> {
        if self.remove(filename).is_some() {
            tracing::info!("Removed {} from memory", filename);
        }

        // Only bare names can refer to a stored upload
        let path = match sanitize_filename(filename) {
            Ok(name) if name == filename => self.upload_dir.join(name),
            _ => return Ok(DeleteOutcome::NotFound),
        };

        match tokio::fs::remove_file(&path).await {
            Ok(()) => {
                tracing::info!("Deleted {}", path.display());
                Ok(DeleteOutcome::Deleted)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(DeleteOutcome::NotFound),
            Err(e) => Err(e.into()),
        }
    }
}

/// Reduce a client-supplied filename to a bare name inside the upload dir
pub fn sanitize_filename(filename: &str) -> Result<String> {
    let last = filename.rsplit(['/', '\\']).next().unwrap_or("");
    match last {
        "" | "." | ".." => Err(Error::InvalidFilename(filename.to_string())),
        name => Ok(name.to_string()),
    }
}
