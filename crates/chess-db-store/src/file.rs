use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::{Document, DocumentStore, StoreError};

/// Stores the document as pretty-printed UTF-8 JSON in a single file.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        info!("Document store at {}", path.display());
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DocumentStore for JsonFileStore {
    async fn load(&self) -> Document {
        load_or_default(&self.path).await
    }

    async fn save(&self, doc: &Document) -> Result<(), StoreError> {
        let payload = serde_json::to_vec_pretty(doc)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await.map_err(|source| StoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        // Write beside the target so the rename stays on one filesystem.
        let temp_path = self
            .path
            .with_extension(format!("{}.tmp", Uuid::new_v4().simple()));
        if let Err(source) = fs::write(&temp_path, &payload).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(StoreError::Io { path: temp_path, source });
        }
        if let Err(source) = fs::rename(&temp_path, &self.path).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(StoreError::Io {
                path: self.path.clone(),
                source,
            });
        }

        debug!("Saved document ({} bytes) to {}", payload.len(), self.path.display());
        Ok(())
    }
}

/// Read the document at `path`, falling back to an empty one.
///
/// Absent and corrupt documents look the same to the caller; only the log
/// level differs.
pub async fn load_or_default(path: &Path) -> Document {
    let raw = match fs::read(path).await {
        Ok(raw) => raw,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("No document at {}, starting empty", path.display());
            return Document::default();
        }
        Err(e) => {
            warn!("Failed to read document at {}: {}; starting empty", path.display(), e);
            return Document::default();
        }
    };

    match serde_json::from_slice(&raw) {
        Ok(doc) => doc,
        Err(e) => {
            warn!("Corrupt document at {}: {}; starting empty", path.display(), e);
            Document::default()
        }
    }
}
