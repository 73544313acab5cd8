use std::sync::Mutex;

use crate::{Document, DocumentStore, StoreError};

/// Keeps the document in process memory. Each `load` hands out a copy, so
/// callers see the same load/mutate/save semantics as the file store.
#[derive(Default)]
pub struct MemoryStore {
    doc: Mutex<Document>,
}

impl MemoryStore {
    pub fn new(doc: Document) -> Self {
        Self { doc: Mutex::new(doc) }
    }
}

impl DocumentStore for MemoryStore {
    async fn load(&self) -> Document {
        self.doc.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    async fn save(&self, doc: &Document) -> Result<(), StoreError> {
        *self.doc.lock().unwrap_or_else(|e| e.into_inner()) = doc.clone();
        Ok(())
    }
}
