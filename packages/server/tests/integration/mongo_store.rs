use std::sync::Arc;
use std::time::Duration;

use axum::body::Bytes;
use bson::{Bson, Document, doc, oid::ObjectId};
use common::asset::{AssetError, AssetKind, AssetService, Upload};
use common::storage::mongo::{MongoDocumentStore, MongoSettings};
use common::storage::{DocumentStore, RecordId, StoreError};
use evently_server::database::init_store;
use futures::{StreamExt, TryStreamExt, stream};

use crate::common::{OWNER, mongo_database};

async fn connect() -> MongoDocumentStore {
    let db = mongo_database().await;
    MongoDocumentStore::connect(&MongoSettings {
        url: db.url,
        database: db.name,
        timeout: Duration::from_secs(db.timeout_secs),
    })
    .await
    .expect("Failed to connect to MongoDB")
}

async fn collect(stream: common::storage::DocumentStream) -> Vec<Document> {
    stream.try_collect().await.unwrap()
}

#[tokio::test]
async fn insert_assigns_server_ids_and_ignores_caller_id() {
    let store = connect().await;
    let forced = RecordId::generate();

    let a = store
        .insert("events", doc! { "_id": ObjectId::from(forced), "name": "a" })
        .await
        .unwrap();
    let b = store.insert("events", doc! { "name": "b" }).await.unwrap();

    assert_ne!(a, b);
    assert_ne!(a, forced);
    assert!(store.find_by_id("events", forced).await.unwrap().is_none());

    let found = store.find_by_id("events", a).await.unwrap().unwrap();
    assert_eq!(found.get_str("name").unwrap(), "a");
}

#[tokio::test]
async fn collections_are_separate_namespaces() {
    let store = connect().await;
    let id = store.insert("event_posters", doc! { "n": 1 }).await.unwrap();
    assert!(store.find_by_id("venue_photos", id).await.unwrap().is_none());
}

#[tokio::test]
async fn find_all_by_field_preserves_insertion_order_and_omits() {
    let store = connect().await;
    for n in 0..4 {
        let owner = if n % 2 == 0 { "x" } else { "y" };
        store
            .insert("photos", doc! { "owner": owner, "n": n, "payload": "big" })
            .await
            .unwrap();
    }

    let docs = collect(
        store
            .find_all_by_field("photos", "owner", Bson::from("x"), &["payload"])
            .await
            .unwrap(),
    )
    .await;

    let ns: Vec<i32> = docs.iter().map(|d| d.get_i32("n").unwrap()).collect();
    assert_eq!(ns, [0, 2]);
    assert!(docs.iter().all(|d| !d.contains_key("payload")));
    assert!(docs.iter().all(|d| d.contains_key("_id")));

    let all = collect(store.find_all("photos").await.unwrap()).await;
    assert_eq!(all.len(), 4);
}

#[tokio::test]
async fn update_reports_modified_count() {
    let store = connect().await;
    let id = store
        .insert("venues", doc! { "name": "Hall A", "capacity": 10 })
        .await
        .unwrap();

    assert_eq!(
        store
            .update("venues", id, doc! { "capacity": 20 })
            .await
            .unwrap(),
        1
    );
    // Same value again: matched but not modified.
    assert_eq!(
        store
            .update("venues", id, doc! { "capacity": 20 })
            .await
            .unwrap(),
        0
    );
    assert_eq!(
        store
            .update("venues", RecordId::generate(), doc! { "capacity": 1 })
            .await
            .unwrap(),
        0
    );

    let found = store.find_by_id("venues", id).await.unwrap().unwrap();
    assert_eq!(found.get_i32("capacity").unwrap(), 20);
    assert_eq!(found.get_str("name").unwrap(), "Hall A");
}

#[tokio::test]
async fn delete_reports_removed_count() {
    let store = connect().await;
    let id = store.insert("venues", doc! {}).await.unwrap();
    assert_eq!(store.delete("venues", id).await.unwrap(), 1);
    assert_eq!(store.delete("venues", id).await.unwrap(), 0);
    assert_eq!(store.delete("missing", id).await.unwrap(), 0);
}

#[tokio::test]
async fn closed_store_is_unavailable() {
    let store = connect().await;
    let id = store.insert("venues", doc! {}).await.unwrap();
    assert!(store.ping().await.is_ok());
    store.close().await;

    assert!(matches!(
        store.insert("venues", doc! {}).await,
        Err(StoreError::Unavailable(_))
    ));
    assert!(matches!(
        store.find_by_id("venues", id).await,
        Err(StoreError::Unavailable(_))
    ));
    assert!(matches!(
        store.find_all("venues").await,
        Err(StoreError::Unavailable(_))
    ));
    assert!(matches!(
        store.delete("venues", id).await,
        Err(StoreError::Unavailable(_))
    ));
    assert!(store.ping().await.is_err());
}

#[tokio::test]
async fn init_store_connects_and_indexes_asset_collections() {
    let config = mongo_database().await;
    let store = init_store(&config).await.expect("Failed to init store");
    assert!(store.ping().await.is_ok());

    // Index creation is idempotent across restarts.
    let again = init_store(&config).await.expect("Failed to re-init store");
    again.close().await;
    store.close().await;
}

#[tokio::test]
async fn assets_round_trip_through_mongo() {
    let store: Arc<dyn DocumentStore> = Arc::new(connect().await);
    let service = AssetService::new(store).with_chunk_size(4);

    let mut ids = Vec::new();
    for name in ["a.png", "b.png", "c.png"] {
        let upload = Upload {
            kind: AssetKind::VenuePhoto,
            owner_id: OWNER.to_string(),
            filename: Some(name.to_string()),
            content_type: Some("image/png".to_string()),
        };
        let body = stream::iter([
            Ok::<_, AssetError>(Bytes::from_static(b"0123")),
            Ok(Bytes::from_static(b"456")),
        ]);
        ids.push(service.ingest(upload, body).await.unwrap());
        tokio::time::sleep(Duration::from_millis(5)).await;
    }

    let listed = service
        .list_for_owner(AssetKind::VenuePhoto, OWNER)
        .await
        .unwrap();
    let names: Vec<&str> = listed.iter().map(|s| s.record.filename.as_str()).collect();
    assert_eq!(names, ["c.png", "b.png", "a.png"]);
    assert!(listed.iter().all(|s| s.record.size == 7));

    let file = service
        .get_file_by_id(AssetKind::VenuePhoto, &ids[0].encode())
        .await
        .unwrap();
    assert_eq!(file.filename, "a.png");
    assert_eq!(file.content_type, "image/png");
    let chunks: Vec<Bytes> = file.body.map(|c| c.unwrap()).collect().await;
    let sizes: Vec<usize> = chunks.iter().map(Bytes::len).collect();
    assert_eq!(sizes, [4, 3]);
    assert_eq!(chunks.concat(), b"0123456");

    assert!(matches!(
        service
            .get_file_by_id(AssetKind::EventPoster, &ids[0].encode())
            .await,
        Err(AssetError::NotFound(_))
    ));
}
