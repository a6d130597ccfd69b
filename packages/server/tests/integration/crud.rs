use serde_json::json;

use crate::common::{OWNER, TestApp, routes};

fn event_body(venue_id: &str) -> serde_json::Value {
    json!({
        "name": "RustConf",
        "description": "Annual conference",
        "date": "2026-09-10",
        "venue_id": venue_id,
        "max_attendees": 500,
    })
}

#[tokio::test]
async fn event_lifecycle() {
    let app = TestApp::spawn().await;
    let venue_id = app.create_venue("Main Hall").await;

    let res = app.post(routes::EVENTS, &event_body(&venue_id)).await;
    assert_eq!(res.status, 201, "{}", res.text);
    assert_eq!(res.body["message"], "Event created");
    let id = res.id();
    let path = routes::record(routes::EVENTS, &id);

    let res = app.get(&path).await;
    assert_eq!(res.status, 200);
    assert_eq!(res.body["id"], id.as_str());
    assert_eq!(res.body["name"], "RustConf");
    assert_eq!(res.body["venue_id"], venue_id.as_str());

    let res = app.put(&path, &json!({ "max_attendees": 750 })).await;
    assert_eq!(res.status, 200, "{}", res.text);
    assert_eq!(res.body["message"], "Event updated successfully");
    assert_eq!(res.body["id"], id.as_str());

    let res = app.get(&path).await;
    assert_eq!(res.body["max_attendees"], 750);
    assert_eq!(res.body["name"], "RustConf");

    let res = app.delete(&path).await;
    assert_eq!(res.status, 200);
    assert_eq!(res.body["message"], "Event deleted successfully");

    let res = app.get(&path).await;
    assert_eq!(res.status, 404);
    assert_eq!(res.body["message"], format!("Event with ID {id} not found"));
}

#[tokio::test]
async fn list_returns_records_in_creation_order() {
    let app = TestApp::spawn().await;
    for name in ["Ada", "Grace", "Linus"] {
        let res = app
            .post(
                routes::ATTENDEES,
                &json!({ "name": name, "email": format!("{name}@example.com") }),
            )
            .await;
        assert_eq!(res.status, 201, "{}", res.text);
    }

    let res = app.get(routes::ATTENDEES).await;
    assert_eq!(res.status, 200);
    let names: Vec<&str> = res
        .body
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Ada", "Grace", "Linus"]);
    assert!(res.body[0]["phone"].is_null());
}

#[tokio::test]
async fn empty_update_is_400() {
    let app = TestApp::spawn().await;
    let venue_id = app.create_venue("Main Hall").await;

    let res = app
        .put(&routes::record(routes::VENUES, &venue_id), &json!({}))
        .await;
    assert_eq!(res.status, 400);
    assert_eq!(res.body["message"], "No valid fields to update");

    let res = app
        .put(
            &routes::record(routes::VENUES, &venue_id),
            &json!({ "capacity": null }),
        )
        .await;
    assert_eq!(res.status, 400);
}

#[tokio::test]
async fn update_and_delete_of_missing_record_are_404() {
    let app = TestApp::spawn().await;
    let path = routes::record(routes::VENUES, OWNER);

    let res = app.put(&path, &json!({ "capacity": 10 })).await;
    assert_eq!(res.status, 404);
    let res = app.delete(&path).await;
    assert_eq!(res.status, 404);
}

#[tokio::test]
async fn malformed_path_id_is_400() {
    let app = TestApp::spawn().await;
    let res = app.get(&routes::record(routes::BOOKINGS, "42")).await;
    assert_eq!(res.status, 400);
    assert_eq!(res.code(), "INVALID_IDENTIFIER");
}

#[tokio::test]
async fn booking_references_must_be_well_formed() {
    let app = TestApp::spawn().await;

    let res = app
        .post(
            routes::BOOKINGS,
            &json!({
                "event_id": "event-1",
                "attendee_id": OWNER,
                "ticket_type": "VIP",
                "quantity": 1,
            }),
        )
        .await;
    assert_eq!(res.status, 400);
    assert_eq!(res.code(), "INVALID_IDENTIFIER");

    // Referenced records are not required to exist.
    let res = app
        .post(
            routes::BOOKINGS,
            &json!({
                "event_id": OWNER,
                "attendee_id": OWNER.to_uppercase(),
                "ticket_type": "VIP",
                "quantity": 1,
            }),
        )
        .await;
    assert_eq!(res.status, 201, "{}", res.text);

    let res = app.get(&routes::record(routes::BOOKINGS, &res.id())).await;
    assert_eq!(res.body["attendee_id"], OWNER);
}

#[tokio::test]
async fn negative_counts_are_rejected() {
    let app = TestApp::spawn().await;
    let res = app
        .post(
            routes::VENUES,
            &json!({ "name": "Hall", "address": "Somewhere", "capacity": -1 }),
        )
        .await;
    assert_eq!(res.status, 400);
    assert_eq!(res.code(), "VALIDATION_ERROR");
}

#[tokio::test]
async fn malformed_json_is_a_structured_400() {
    let app = TestApp::spawn().await;
    let res = app.post_raw(routes::VENUES, "{\"name\": ").await;
    assert_eq!(res.status, 400);
    assert_eq!(res.code(), "VALIDATION_ERROR");

    let res = app.post(routes::VENUES, &json!({ "name": "Hall" })).await;
    assert_eq!(res.status, 400);
    assert_eq!(res.code(), "VALIDATION_ERROR");
}

#[tokio::test]
async fn store_outage_is_500() {
    let app = TestApp::spawn().await;
    app.close_store().await;

    let res = app.get(routes::EVENTS).await;
    assert_eq!(res.status, 500);
    assert_eq!(res.code(), "STORE_UNAVAILABLE");
}
