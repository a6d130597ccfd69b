use crate::common::{TestApp, routes};

#[tokio::test]
async fn lists_every_photo_newest_first_without_payload() {
    let app = TestApp::spawn().await;
    let venue_id = app.create_venue("Main Hall").await;

    let mut ids = Vec::new();
    for name in ["stage.jpg", "lobby.jpg", "seats.jpg"] {
        ids.push(
            app.upload_ok(
                &routes::upload_venue_photo(&venue_id),
                name,
                Some("image/jpeg"),
                vec![0xFF; 64],
            )
            .await,
        );
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    }

    let res = app.get(&routes::venue_photos(&venue_id)).await;
    assert_eq!(res.status, 200, "{}", res.text);
    let photos = res.body.as_array().unwrap();
    assert_eq!(photos.len(), 3);

    let listed: Vec<&str> = photos.iter().map(|p| p["id"].as_str().unwrap()).collect();
    ids.reverse();
    assert_eq!(listed, ids);
    for photo in photos {
        assert!(photo.get("payload").is_none());
        assert_eq!(photo["owner_id"], venue_id.as_str());
        assert_eq!(photo["size"], 64);
    }
}

#[tokio::test]
async fn venue_without_photos_is_an_empty_list() {
    let app = TestApp::spawn().await;
    let venue_id = app.create_venue("Empty Hall").await;

    let res = app.get(&routes::venue_photos(&venue_id)).await;
    assert_eq!(res.status, 200);
    assert_eq!(res.body, serde_json::json!([]));
}

#[tokio::test]
async fn photo_download_uses_default_content_type() {
    let app = TestApp::spawn().await;
    let venue_id = app.create_venue("Main Hall").await;
    let id = app
        .upload_ok(&routes::upload_venue_photo(&venue_id), "photo", None, vec![5; 10])
        .await;

    let file = app.get_file(&routes::venue_photo_file(&id), None).await;
    assert_eq!(file.status, 200);
    assert_eq!(file.bytes, vec![5; 10]);
    assert_eq!(file.header("content-type"), Some("image/jpeg"));
    assert_eq!(
        file.header("content-disposition"),
        Some("inline; filename=\"photo\"; filename*=UTF-8''photo")
    );
}

#[tokio::test]
async fn deleting_the_venue_keeps_its_photos() {
    let app = TestApp::spawn().await;
    let venue_id = app.create_venue("Main Hall").await;
    let id = app
        .upload_ok(&routes::upload_venue_photo(&venue_id), "a.jpg", None, vec![1])
        .await;

    let res = app
        .delete(&routes::record(routes::VENUES, &venue_id))
        .await;
    assert_eq!(res.status, 200);

    let file = app.get_file(&routes::venue_photo_file(&id), None).await;
    assert_eq!(file.status, 200);
    let res = app.get(&routes::venue_photos(&venue_id)).await;
    assert_eq!(res.body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn malformed_venue_id_is_400() {
    let app = TestApp::spawn().await;
    let res = app.get(&routes::venue_photos("not-a-valid-id")).await;
    assert_eq!(res.status, 400);
    assert_eq!(res.code(), "INVALID_IDENTIFIER");
}
