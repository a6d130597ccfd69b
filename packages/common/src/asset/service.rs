use std::sync::Arc;

use crate::storage::{Collection, DocumentStore};

use super::stream::DEFAULT_CHUNK_SIZE;
use super::{AssetKind, AssetRecord};

/// Entry point for asset ingestion and retrieval.
///
/// Cheap to clone; clones share the same store handle.
#[derive(Clone)]
pub struct AssetService {
    pub(super) store: Arc<dyn DocumentStore>,
    pub(super) chunk_size: usize,
}

impl AssetService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }

    /// Size of the chunks emitted when streaming a payload back out.
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    pub(super) fn collection(&self, kind: AssetKind) -> Collection<AssetRecord> {
        Collection::new(Arc::clone(&self.store), kind.collection())
    }
}
