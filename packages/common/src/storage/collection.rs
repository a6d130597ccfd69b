use std::marker::PhantomData;
use std::sync::Arc;

use bson::{Bson, Document};
use futures::{StreamExt, TryStreamExt};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::StoreError;
use super::id::RecordId;
use super::traits::DocumentStore;

/// A record read back from the store together with its identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct Stored<T> {
    pub id: RecordId,
    pub record: T,
}

/// Typed view of one collection.
///
/// Records are converted to and from documents here, so nothing above this
/// layer handles untyped documents.
pub struct Collection<T> {
    store: Arc<dyn DocumentStore>,
    name: &'static str,
    _record: PhantomData<fn() -> T>,
}

impl<T> Clone for Collection<T> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            name: self.name,
            _record: PhantomData,
        }
    }
}

impl<T> Collection<T>
where
    T: Serialize + DeserializeOwned + Send + 'static,
{
    pub fn new(store: Arc<dyn DocumentStore>, name: &'static str) -> Self {
        Self {
            store,
            name,
            _record: PhantomData,
        }
    }

    pub async fn insert(&self, record: &T) -> Result<RecordId, StoreError> {
        let doc = to_document(self.name, record)?;
        self.store.insert(self.name, doc).await
    }

    pub async fn find_by_id(&self, id: RecordId) -> Result<Option<Stored<T>>, StoreError> {
        match self.store.find_by_id(self.name, id).await? {
            Some(doc) => Ok(Some(from_document(self.name, doc)?)),
            None => Ok(None),
        }
    }

    /// Every record, in insertion order.
    pub async fn find_all(&self) -> Result<Vec<Stored<T>>, StoreError> {
        let name = self.name;
        self.store
            .find_all(name)
            .await?
            .and_then(|doc| async move { from_document(name, doc) })
            .try_collect()
            .await
    }

    /// Records whose `field` equals `value`, read through the projection `P`.
    ///
    /// `omit` lists stored fields that `P` does not carry; they are never
    /// loaded from the store.
    pub async fn find_all_by_field<P>(
        &self,
        field: &str,
        value: impl Into<Bson>,
        omit: &[&str],
    ) -> Result<Vec<Stored<P>>, StoreError>
    where
        P: DeserializeOwned + Send + 'static,
    {
        let name = self.name;
        self.store
            .find_all_by_field(name, field, value.into(), omit)
            .await?
            .map(|doc| doc.and_then(|doc| from_document(name, doc)))
            .try_collect()
            .await
    }

    /// Apply a partial update. `changes` is serialized and fields that
    /// serialize to nothing are left untouched.
    pub async fn update<U: Serialize>(&self, id: RecordId, changes: &U) -> Result<u64, StoreError> {
        let doc = to_document(self.name, changes)?;
        self.store.update(self.name, id, doc).await
    }

    pub async fn delete(&self, id: RecordId) -> Result<u64, StoreError> {
        self.store.delete(self.name, id).await
    }
}

fn to_document<T: Serialize>(collection: &str, record: &T) -> Result<Document, StoreError> {
    bson::to_document(record).map_err(|e| StoreError::malformed(collection, e))
}

fn from_document<P: DeserializeOwned>(
    collection: &str,
    mut doc: Document,
) -> Result<Stored<P>, StoreError> {
    let id = match doc.remove("_id") {
        Some(Bson::ObjectId(oid)) => RecordId::from(oid),
        Some(other) => {
            return Err(StoreError::malformed(
                collection,
                format!("_id is not an ObjectId: {other}"),
            ));
        }
        None => return Err(StoreError::malformed(collection, "missing _id")),
    };
    let record = bson::from_document(doc).map_err(|e| StoreError::malformed(collection, e))?;
    Ok(Stored { id, record })
}
