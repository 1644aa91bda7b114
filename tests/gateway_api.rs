//! HTTP boundary tests driving the router in-process.

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use chrono::NaiveDate;
use serde_json::{Value, json};
use tower::ServiceExt;

use hotel_orders::gateway::{router, state::AppState};
use hotel_orders::{InMemoryStorage, OrderService, RoomAvailability};

fn app() -> axum::Router {
    let records = vec![
        RoomAvailability::new("reddison", "lux", NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), 1),
        RoomAvailability::new("reddison", "lux", NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(), 1),
        RoomAvailability::new("reddison", "lux", NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(), 0),
    ];
    let storage = InMemoryStorage::with_availability(records).unwrap();
    let state = Arc::new(AppState::new(OrderService::new(Arc::new(storage))));
    router(state, Duration::from_secs(5))
}

async fn body_json(resp: axum::http::Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_order(body: Value) -> Request<Body> {
    Request::post("/orders")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn order_json(from: &str, to: &str) -> Value {
    json!({
        "hotel_id": "reddison",
        "room_id": "lux",
        "email": "guest@example.com",
        "from": from,
        "to": to,
    })
}

#[tokio::test]
async fn create_order_returns_created_and_echo() {
    let app = app();
    let resp = app
        .clone()
        .oneshot(post_order(order_json("2024-01-01", "2024-01-03")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let json = body_json(resp).await;
    assert_eq!(json["code"], 0);
    assert_eq!(json["data"]["hotel_id"], "reddison");
    assert_eq!(json["data"]["from"], "2024-01-01T00:00:00Z");
    assert_eq!(json["data"]["to"], "2024-01-03T00:00:00Z");

    // Inventory is consumed and the order listed
    let resp = app
        .clone()
        .oneshot(Request::get("/availability").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let json = body_json(resp).await;
    let quotas: Vec<u64> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["quota"].as_u64().unwrap())
        .collect();
    assert_eq!(quotas, vec![0, 0, 0]);

    let resp = app
        .oneshot(Request::get("/orders").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
    assert_eq!(json["data"][0]["email"], "guest@example.com");
}

#[tokio::test]
async fn second_booking_of_same_night_is_bad_request() {
    let app = app();
    let first = app
        .clone()
        .oneshot(post_order(order_json("2024-01-01T14:00:00Z", "2024-01-02T11:00:00Z")))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = app
        .oneshot(post_order(order_json("2024-01-01", "2024-01-02")))
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::BAD_REQUEST);
    let json = body_json(second).await;
    assert_eq!(json["code"], 1002);
    assert_eq!(json["msg"], "hotel room is not available for selected dates");
    assert!(json.get("data").is_none());
}

#[tokio::test]
async fn sold_out_day_is_bad_request() {
    let resp = app()
        .oneshot(post_order(order_json("2024-01-05", "2024-01-06")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(resp).await["code"], 1002);
}

#[tokio::test]
async fn invalid_order_is_bad_request() {
    let mut body = order_json("2024-01-01", "2024-01-02");
    body["email"] = json!("");
    let resp = app().oneshot(post_order(body)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let json = body_json(resp).await;
    assert_eq!(json["code"], 1001);
    assert_eq!(json["msg"], "not correct order");
}

#[tokio::test]
async fn inverted_range_is_bad_request() {
    let resp = app()
        .oneshot(post_order(order_json("2024-01-02", "2024-01-01")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(resp).await["code"], 1001);
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let req = Request::post("/orders")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"hotel_id\": "))
        .unwrap();
    let resp = app().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(resp).await["code"], 1001);
}

#[tokio::test]
async fn unparseable_date_is_bad_request() {
    let resp = app()
        .oneshot(post_order(order_json("next friday", "2024-01-02")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn health_and_openapi_are_served() {
    let app = app();
    let resp = app
        .clone()
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;
    assert!(json["data"]["timestamp_ms"].as_u64().unwrap() > 0);
    assert!(json["data"]["version"].is_string());

    let resp = app
        .oneshot(
            Request::get("/api-docs/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;
    assert!(json["paths"]["/orders"]["post"].is_object());
}
