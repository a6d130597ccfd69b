use std::sync::Arc;
use std::time::Duration;

use common::asset::AssetKind;
use common::storage::memory::InMemoryDocumentStore;
use common::storage::mongo::{MongoDocumentStore, MongoSettings};
use common::storage::{DocumentStore, StoreError};
use tracing::info;

use crate::config::DatabaseConfig;

/// Open the configured document store.
///
/// A `memory://` URL yields a fresh in-process store. Anything else is
/// handed to the MongoDB driver, pinged, and indexed for owner lookups.
pub async fn init_store(config: &DatabaseConfig) -> Result<Arc<dyn DocumentStore>, StoreError> {
    if config.is_memory() {
        info!("Using in-memory document store");
        return Ok(Arc::new(InMemoryDocumentStore::new()));
    }

    let settings = MongoSettings {
        url: config.url.clone(),
        database: config.name.clone(),
        timeout: Duration::from_secs(config.timeout_secs),
    };
    let store = MongoDocumentStore::connect(&settings).await?;

    let collections: Vec<&str> = AssetKind::ALL.iter().map(|k| k.collection()).collect();
    store
        .ensure_indexes(&collections, "owner_id", Some("uploaded_at"))
        .await?;

    Ok(Arc::new(store))
}
