use crate::common::TestApp;

#[tokio::test]
async fn root_links_to_docs_and_health() {
    let app = TestApp::spawn().await;
    let res = app.get("/").await;
    assert_eq!(res.status, 200);
    assert_eq!(res.body["message"], "Welcome to Event Management API");
    assert_eq!(res.body["health"], "/health");
}

#[tokio::test]
async fn health_reports_store_connectivity() {
    let app = TestApp::spawn().await;

    let res = app.get("/health").await;
    assert_eq!(res.status, 200);
    assert_eq!(res.body["status"], "healthy");
    assert_eq!(res.body["database"], "event_management_test");
    assert_eq!(res.body["connected"], true);

    app.close_store().await;
    let res = app.get("/health").await;
    assert_eq!(res.status, 200);
    assert_eq!(res.body["connected"], false);
}

#[tokio::test]
async fn openapi_document_lists_asset_routes() {
    let app = TestApp::spawn().await;
    let res = app.get("/api-docs/openapi.json").await;
    assert_eq!(res.status, 200);

    let paths = res.body["paths"].as_object().unwrap();
    for path in [
        "/api/v1/upload_event_poster/{event_id}",
        "/api/v1/event_poster/file/{poster_id}",
        "/api/v1/venue_photos/{venue_id}",
        "/api/v1/events/{id}",
        "/health",
    ] {
        assert!(paths.contains_key(path), "missing {path}");
    }
}
