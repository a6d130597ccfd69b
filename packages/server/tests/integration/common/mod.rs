use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, OnceLock};

use common::storage::DocumentStore;
use common::storage::memory::InMemoryDocumentStore;
use evently_server::config::{
    AppConfig, CorsConfig, DatabaseConfig, ServerConfig, StorageConfig,
};
use evently_server::state::AppState;
use reqwest::Client;
use serde_json::Value;
use testcontainers::ContainerAsync;
use testcontainers::runners::AsyncRunner;
use testcontainers_modules::mongo::Mongo;
use tokio::sync::OnceCell;

/// MongoDB container shared across all tests in this binary.
static SHARED_MONGO: OnceCell<(ContainerAsync<Mongo>, u16)> = OnceCell::const_new();

/// Monotonic counter for unique database names.
static DB_COUNTER: AtomicU32 = AtomicU32::new(0);

/// Container ID for atexit cleanup.
static CONTAINER_ID: OnceLock<String> = OnceLock::new();

extern "C" fn cleanup_container() {
    if let Some(id) = CONTAINER_ID.get() {
        let _ = std::process::Command::new("docker")
            .args(["rm", "-f", "-v", id])
            .output();
    }
}

/// Start (or reuse) the shared MongoDB container and return its host port.
async fn shared_mongo_port() -> u16 {
    let (_, port) = SHARED_MONGO
        .get_or_init(|| async {
            let container = Mongo::default()
                .start()
                .await
                .expect("Failed to start MongoDB container");
            let port = container
                .get_host_port_ipv4(27017)
                .await
                .expect("Failed to get MongoDB port");

            let _ = CONTAINER_ID.set(container.id().to_string());
            // Statics are never dropped on normal exit.
            unsafe { libc::atexit(cleanup_container) };

            (container, port)
        })
        .await;
    *port
}

/// Database settings pointing at a fresh, uniquely named database in the
/// shared container.
pub async fn mongo_database() -> DatabaseConfig {
    let port = shared_mongo_port().await;
    let n = DB_COUNTER.fetch_add(1, Ordering::Relaxed);
    DatabaseConfig {
        url: format!("mongodb://127.0.0.1:{port}"),
        name: format!("evently_test_{}_{n}", std::process::id()),
        timeout_secs: 10,
    }
}

pub const OWNER: &str = "507f1f77bcf86cd799439011";

pub mod routes {
    pub const EVENTS: &str = "/api/v1/events";
    pub const ATTENDEES: &str = "/api/v1/attendees";
    pub const VENUES: &str = "/api/v1/venues";
    pub const BOOKINGS: &str = "/api/v1/bookings";

    pub fn record(collection: &str, id: &str) -> String {
        format!("{collection}/{id}")
    }

    pub fn upload_event_poster(event_id: &str) -> String {
        format!("/api/v1/upload_event_poster/{event_id}")
    }

    pub fn event_poster(event_id: &str) -> String {
        format!("/api/v1/event_poster/{event_id}")
    }

    pub fn event_poster_file(poster_id: &str) -> String {
        format!("/api/v1/event_poster/file/{poster_id}")
    }

    pub fn upload_promotional_video(event_id: &str) -> String {
        format!("/api/v1/upload_promotional_video/{event_id}")
    }

    pub fn promotional_video(event_id: &str) -> String {
        format!("/api/v1/promotional_video/{event_id}")
    }

    pub fn promotional_video_file(video_id: &str) -> String {
        format!("/api/v1/promotional_video/file/{video_id}")
    }

    pub fn upload_venue_photo(venue_id: &str) -> String {
        format!("/api/v1/upload_venue_photo/{venue_id}")
    }

    pub fn venue_photos(venue_id: &str) -> String {
        format!("/api/v1/venue_photos/{venue_id}")
    }

    pub fn venue_photo_file(photo_id: &str) -> String {
        format!("/api/v1/venue_photo/file/{photo_id}")
    }
}

/// A running test server over an in-memory store.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
    pub store: Arc<InMemoryDocumentStore>,
}

/// Parsed HTTP response for test assertions.
pub struct TestResponse {
    pub status: u16,
    /// Raw response body as text.
    pub text: String,
    /// Parsed JSON body, or `Null` if the response is not valid JSON.
    pub body: Value,
}

/// Raw HTTP response for file downloads.
pub struct FileResponse {
    pub status: u16,
    pub headers: reqwest::header::HeaderMap,
    pub bytes: Vec<u8>,
}

impl FileResponse {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

pub fn test_config() -> AppConfig {
    AppConfig {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            cors: CorsConfig {
                allow_origins: vec![],
                max_age: 3600,
            },
        },
        database: DatabaseConfig {
            url: "memory://".to_string(),
            name: "event_management_test".to_string(),
            timeout_secs: 1,
        },
        storage: StorageConfig {
            stream_chunk_size: 64 * 1024,
        },
    }
}

impl TestApp {
    pub async fn spawn() -> Self {
        let store = Arc::new(InMemoryDocumentStore::new());
        let state = AppState::new(store.clone(), test_config());
        let app = evently_server::build_router(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            addr,
            client: Client::new(),
            store,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Simulate the database going away.
    pub async fn close_store(&self) {
        self.store.close().await;
    }

    pub async fn get(&self, path: &str) -> TestResponse {
        let res = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("Failed to send GET request");

        TestResponse::from_response(res).await
    }

    pub async fn get_file(&self, path: &str, if_none_match: Option<&str>) -> FileResponse {
        let mut req = self.client.get(self.url(path));
        if let Some(etag) = if_none_match {
            req = req.header("If-None-Match", etag);
        }
        let res = req.send().await.expect("Failed to send GET request");

        let status = res.status().as_u16();
        let headers = res.headers().clone();
        let bytes = res.bytes().await.expect("Failed to read body").to_vec();
        FileResponse {
            status,
            headers,
            bytes,
        }
    }

    pub async fn post(&self, path: &str, body: &Value) -> TestResponse {
        let res = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .expect("Failed to send POST request");

        TestResponse::from_response(res).await
    }

    pub async fn post_raw(&self, path: &str, body: &'static str) -> TestResponse {
        let res = self
            .client
            .post(self.url(path))
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .expect("Failed to send POST request");

        TestResponse::from_response(res).await
    }

    pub async fn put(&self, path: &str, body: &Value) -> TestResponse {
        let res = self
            .client
            .put(self.url(path))
            .json(body)
            .send()
            .await
            .expect("Failed to send PUT request");

        TestResponse::from_response(res).await
    }

    pub async fn delete(&self, path: &str) -> TestResponse {
        let res = self
            .client
            .delete(self.url(path))
            .send()
            .await
            .expect("Failed to send DELETE request");

        TestResponse::from_response(res).await
    }

    /// Send `file_bytes` as the `file` part of a multipart form.
    pub async fn upload(
        &self,
        path: &str,
        file_name: &str,
        mime: Option<&str>,
        file_bytes: Vec<u8>,
    ) -> TestResponse {
        let mut part = reqwest::multipart::Part::bytes(file_bytes).file_name(file_name.to_string());
        if let Some(mime) = mime {
            part = part.mime_str(mime).expect("Failed to set MIME type");
        }
        let form = reqwest::multipart::Form::new().part("file", part);

        let res = self
            .client
            .post(self.url(path))
            .multipart(form)
            .send()
            .await
            .expect("Failed to send multipart upload request");

        TestResponse::from_response(res).await
    }

    /// Upload and return the new asset's `id`.
    pub async fn upload_ok(
        &self,
        path: &str,
        file_name: &str,
        mime: Option<&str>,
        file_bytes: Vec<u8>,
    ) -> String {
        let res = self.upload(path, file_name, mime, file_bytes).await;
        assert_eq!(res.status, 201, "upload failed: {}", res.text);
        res.id()
    }

    pub async fn create_venue(&self, name: &str) -> String {
        let res = self
            .post(
                routes::VENUES,
                &serde_json::json!({
                    "name": name,
                    "address": "1 Conference Way",
                    "capacity": 300,
                }),
            )
            .await;
        assert_eq!(res.status, 201, "create_venue failed: {}", res.text);
        res.id()
    }
}

impl TestResponse {
    pub async fn from_response(res: reqwest::Response) -> Self {
        let status = res.status().as_u16();
        let text = res.text().await.unwrap_or_default();
        let body = serde_json::from_str(&text).unwrap_or(Value::Null);
        Self { status, text, body }
    }

    pub fn id(&self) -> String {
        self.body["id"]
            .as_str()
            .expect("response body should contain 'id'")
            .to_string()
    }

    pub fn code(&self) -> &str {
        self.body["code"].as_str().unwrap_or_default()
    }
}
