use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use bson::{Bson, Document, doc};
use dashmap::DashMap;
use futures::StreamExt;

use super::error::StoreError;
use super::id::RecordId;
use super::traits::{DocumentStore, DocumentStream};

/// In-process document store.
///
/// Each collection is an insertion-ordered vector behind a `DashMap` shard
/// lock. Intended for tests and `memory://` runs; nothing is persisted.
pub struct InMemoryDocumentStore {
    collections: DashMap<String, Vec<Document>>,
    open: AtomicBool,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self {
            collections: DashMap::new(),
            open: AtomicBool::new(true),
        }
    }

    /// Number of documents in `collection`.
    pub fn count(&self, collection: &str) -> usize {
        self.collections
            .get(collection)
            .map(|docs| docs.len())
            .unwrap_or(0)
    }

    fn ensure_open(&self) -> Result<(), StoreError> {
        if self.open.load(Ordering::Acquire) {
            Ok(())
        } else {
            Err(StoreError::Unavailable("connection closed".into()))
        }
    }

    fn snapshot(&self, collection: &str, predicate: impl Fn(&Document) -> bool) -> Vec<Document> {
        self.collections
            .get(collection)
            .map(|docs| docs.iter().filter(|d| predicate(*d)).cloned().collect())
            .unwrap_or_default()
    }
}

impl Default for InMemoryDocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

fn has_id(doc: &Document, id: RecordId) -> bool {
    matches!(doc.get("_id"), Some(Bson::ObjectId(oid)) if RecordId::from(*oid) == id)
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn insert(&self, collection: &str, doc: Document) -> Result<RecordId, StoreError> {
        self.ensure_open()?;

        let id = RecordId::generate();
        let mut stored = doc! { "_id": bson::oid::ObjectId::from(id) };
        for (key, value) in doc {
            if key != "_id" {
                stored.insert(key, value);
            }
        }

        self.collections
            .entry(collection.to_string())
            .or_default()
            .push(stored);
        Ok(id)
    }

    async fn find_by_id(
        &self,
        collection: &str,
        id: RecordId,
    ) -> Result<Option<Document>, StoreError> {
        self.ensure_open()?;
        Ok(self
            .collections
            .get(collection)
            .and_then(|docs| docs.iter().find(|d| has_id(d, id)).cloned()))
    }

    async fn find_all_by_field(
        &self,
        collection: &str,
        field: &str,
        value: Bson,
        omit: &[&str],
    ) -> Result<DocumentStream, StoreError> {
        self.ensure_open()?;

        let mut docs = self.snapshot(collection, |d| d.get(field) == Some(&value));
        for doc in &mut docs {
            for name in omit {
                doc.remove(*name);
            }
        }
        Ok(futures::stream::iter(docs.into_iter().map(Ok)).boxed())
    }

    async fn find_all(&self, collection: &str) -> Result<DocumentStream, StoreError> {
        self.ensure_open()?;
        let docs = self.snapshot(collection, |_| true);
        Ok(futures::stream::iter(docs.into_iter().map(Ok)).boxed())
    }

    async fn update(
        &self,
        collection: &str,
        id: RecordId,
        changes: Document,
    ) -> Result<u64, StoreError> {
        self.ensure_open()?;

        let Some(mut docs) = self.collections.get_mut(collection) else {
            return Ok(0);
        };
        let Some(doc) = docs.iter_mut().find(|d| has_id(d, id)) else {
            return Ok(0);
        };

        let mut modified = false;
        for (key, value) in changes {
            if key == "_id" {
                continue;
            }
            if doc.get(&key) != Some(&value) {
                doc.insert(key, value);
                modified = true;
            }
        }
        Ok(u64::from(modified))
    }

    async fn delete(&self, collection: &str, id: RecordId) -> Result<u64, StoreError> {
        self.ensure_open()?;

        let Some(mut docs) = self.collections.get_mut(collection) else {
            return Ok(0);
        };
        let before = docs.len();
        docs.retain(|d| !has_id(d, id));
        Ok((before - docs.len()) as u64)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.ensure_open()
    }

    async fn close(&self) {
        self.open.store(false, Ordering::Release);
    }
}
