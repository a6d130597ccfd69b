use async_trait::async_trait;
use bson::{Bson, Document};
use futures::stream::BoxStream;

use super::error::StoreError;
use super::id::RecordId;

/// Lazily produced documents, in insertion order.
pub type DocumentStream = BoxStream<'static, Result<Document, StoreError>>;

/// Generic per-collection document storage.
///
/// Every operation is scoped to a named collection. Documents are keyed by the
/// `_id` field, which the store assigns on insert. Implementations must be
/// safe to share between concurrently running requests; the store is the only
/// synchronization point between them.
///
/// Once [`close`](Self::close) has been called every operation fails with
/// [`StoreError::Unavailable`].
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert a document and return its newly assigned identifier.
    ///
    /// Any `_id` already present in `doc` is discarded.
    async fn insert(&self, collection: &str, doc: Document) -> Result<RecordId, StoreError>;

    /// Look up one document. An absent id is `Ok(None)`, never an error.
    async fn find_by_id(
        &self,
        collection: &str,
        id: RecordId,
    ) -> Result<Option<Document>, StoreError>;

    /// All documents whose `field` equals `value`, in insertion order.
    ///
    /// Fields named in `omit` are left out of the returned documents. Each
    /// call produces a fresh sequence, so a query can be repeated.
    async fn find_all_by_field(
        &self,
        collection: &str,
        field: &str,
        value: Bson,
        omit: &[&str],
    ) -> Result<DocumentStream, StoreError>;

    /// Every document in the collection, in insertion order.
    async fn find_all(&self, collection: &str) -> Result<DocumentStream, StoreError>;

    /// Set the fields of `changes` on the matching document. Returns the
    /// number of documents modified.
    async fn update(
        &self,
        collection: &str,
        id: RecordId,
        changes: Document,
    ) -> Result<u64, StoreError>;

    /// Remove the matching document. Returns the number of documents removed.
    async fn delete(&self, collection: &str, id: RecordId) -> Result<u64, StoreError>;

    /// Round-trip to the backing service.
    async fn ping(&self) -> Result<(), StoreError>;

    /// Tear down the connection.
    async fn close(&self);
}
