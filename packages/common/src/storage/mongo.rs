use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use bson::{Bson, Document, doc, oid::ObjectId};
use futures::{StreamExt, TryStreamExt};
use mongodb::options::ClientOptions;
use mongodb::{Client, Database, IndexModel};
use tracing::{info, warn};

use super::error::StoreError;
use super::id::RecordId;
use super::traits::{DocumentStore, DocumentStream};

/// Connection settings for [`MongoDocumentStore::connect`].
#[derive(Debug, Clone)]
pub struct MongoSettings {
    pub url: String,
    pub database: String,
    /// Applied to server selection and initial connect.
    pub timeout: Duration,
}

/// MongoDB-backed document store.
///
/// Holds one driver client for the life of the process. The driver pools
/// connections internally, so the store is shared between requests as-is.
pub struct MongoDocumentStore {
    client: Client,
    db: Database,
    open: AtomicBool,
}

impl MongoDocumentStore {
    /// Connect and verify the deployment is reachable with a `ping`.
    pub async fn connect(settings: &MongoSettings) -> Result<Self, StoreError> {
        let mut options = ClientOptions::parse(&settings.url).await?;
        options.app_name = Some("evently".into());
        options.server_selection_timeout = Some(settings.timeout);
        options.connect_timeout = Some(settings.timeout);

        let client = Client::with_options(options)?;
        let db = client.database(&settings.database);
        db.run_command(doc! { "ping": 1 }).await?;

        info!(database = %settings.database, "Connected to MongoDB");
        Ok(Self {
            client,
            db,
            open: AtomicBool::new(true),
        })
    }

    /// Create an ascending index on `field` (plus descending `then`, if any)
    /// for each collection. Existing identical indexes are left alone.
    pub async fn ensure_indexes(
        &self,
        collections: &[&str],
        field: &str,
        then: Option<&str>,
    ) -> Result<(), StoreError> {
        self.ensure_open()?;
        for name in collections {
            let mut keys = Document::new();
            keys.insert(field, 1);
            if let Some(then) = then {
                keys.insert(then, -1);
            }
            self.db
                .collection::<Document>(name)
                .create_index(IndexModel::builder().keys(keys).build())
                .await?;
        }
        Ok(())
    }

    fn ensure_open(&self) -> Result<(), StoreError> {
        if self.open.load(Ordering::Acquire) {
            Ok(())
        } else {
            Err(StoreError::Unavailable("connection closed".into()))
        }
    }

    fn collection(&self, name: &str) -> Result<mongodb::Collection<Document>, StoreError> {
        self.ensure_open()?;
        Ok(self.db.collection(name))
    }
}

fn by_id(id: RecordId) -> Document {
    doc! { "_id": ObjectId::from(id) }
}

fn into_stream(cursor: mongodb::Cursor<Document>) -> DocumentStream {
    cursor.map_err(StoreError::from).boxed()
}

#[async_trait]
impl DocumentStore for MongoDocumentStore {
    async fn insert(&self, collection: &str, mut doc: Document) -> Result<RecordId, StoreError> {
        let coll = self.collection(collection)?;
        doc.remove("_id");

        let result = coll.insert_one(doc).await?;
        match result.inserted_id {
            Bson::ObjectId(oid) => Ok(RecordId::from(oid)),
            other => Err(StoreError::malformed(
                collection,
                format!("server assigned a non-ObjectId _id: {other}"),
            )),
        }
    }

    async fn find_by_id(
        &self,
        collection: &str,
        id: RecordId,
    ) -> Result<Option<Document>, StoreError> {
        let coll = self.collection(collection)?;
        Ok(coll.find_one(by_id(id)).await?)
    }

    async fn find_all_by_field(
        &self,
        collection: &str,
        field: &str,
        value: Bson,
        omit: &[&str],
    ) -> Result<DocumentStream, StoreError> {
        let coll = self.collection(collection)?;

        let mut filter = Document::new();
        filter.insert(field, value);

        let mut find = coll.find(filter).sort(doc! { "_id": 1 });
        if !omit.is_empty() {
            let projection: Document = omit
                .iter()
                .map(|f| (f.to_string(), Bson::Int32(0)))
                .collect();
            find = find.projection(projection);
        }
        Ok(into_stream(find.await?))
    }

    async fn find_all(&self, collection: &str) -> Result<DocumentStream, StoreError> {
        let coll = self.collection(collection)?;
        let cursor = coll.find(doc! {}).sort(doc! { "_id": 1 }).await?;
        Ok(into_stream(cursor))
    }

    async fn update(
        &self,
        collection: &str,
        id: RecordId,
        mut changes: Document,
    ) -> Result<u64, StoreError> {
        let coll = self.collection(collection)?;
        changes.remove("_id");
        if changes.is_empty() {
            return Ok(0);
        }

        let result = coll.update_one(by_id(id), doc! { "$set": changes }).await?;
        Ok(result.modified_count)
    }

    async fn delete(&self, collection: &str, id: RecordId) -> Result<u64, StoreError> {
        let coll = self.collection(collection)?;
        let result = coll.delete_one(by_id(id)).await?;
        Ok(result.deleted_count)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.ensure_open()?;
        self.db.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    async fn close(&self) {
        if self.open.swap(false, Ordering::AcqRel) {
            self.client.clone().shutdown().await;
            info!("Disconnected from MongoDB");
        } else {
            warn!("MongoDB connection already closed");
        }
    }
}
