pub mod file;
pub mod memory;

use std::future::Future;
use std::path::PathBuf;

pub use chess_db_types::models::Document;
pub use file::JsonFileStore;
pub use memory::MemoryStore;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("i/o error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode document: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Whole-document storage.
///
/// Callers load, mutate their private copy, and save it back. Nothing is held
/// across the pair, so two concurrent writers race and the last save wins.
pub trait DocumentStore: Send + Sync {
    /// Never fails: a missing or unreadable document yields `Document::default()`.
    fn load(&self) -> impl Future<Output = Document> + Send;

    /// Replace the stored document. A later `load` sees either the old or the
    /// new document, never a partial write.
    fn save(&self, doc: &Document) -> impl Future<Output = Result<(), StoreError>> + Send;
}
