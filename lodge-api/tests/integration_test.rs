use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chrono::{Duration, NaiveDate, Utc};
use lodge_api::{app, AppState};
use lodge_store::app_config::BusinessRules;
use serde_json::{json, Value};
use tower::ServiceExt;

fn test_app() -> Router {
    app(AppState::in_memory(BusinessRules::default()))
}

fn days_from_today(days: i64) -> NaiveDate {
    Utc::now().date_naive() + Duration::days(days)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Request::get(uri).body(Body::empty()).unwrap()).await
}

async fn post_booking(app: &Router, body: Value) -> (StatusCode, Value) {
    let request = Request::post("/v1/bookings")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

fn booking_body(room_id: &str, check_in: NaiveDate, check_out: NaiveDate) -> Value {
    json!({
        "room_id": room_id,
        "guest_name": "Mary Jackson",
        "email": "mary@example.com",
        "phone": "555-0104",
        "check_in": check_in,
        "check_out": check_out,
        "guests": 2
    })
}

fn ids(rooms: &Value) -> Vec<String> {
    rooms
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_room_listings() {
    let app = test_app();

    let (status, rooms) = get(&app, "/v1/rooms").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&rooms), vec!["1", "2", "3", "4", "5", "6"]);

    let (_, featured) = get(&app, "/v1/rooms/featured").await;
    assert_eq!(ids(&featured), vec!["1", "2", "4", "6"]);

    let (_, available) = get(&app, "/v1/rooms/available").await;
    assert_eq!(ids(&available).len(), 6);

    let (_, range) = get(&app, "/v1/rooms/price-range").await;
    assert_eq!(range, json!({ "min": 199, "max": 999 }));
}

#[tokio::test]
async fn test_room_filtering() {
    let app = test_app();

    let (status, rooms) = get(&app, "/v1/rooms?min_price=300&max_price=500&min_capacity=2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&rooms), vec!["2", "5", "6"]);

    let (_, rooms) = get(&app, "/v1/rooms?types=suite,presidential").await;
    assert_eq!(ids(&rooms), vec!["2", "4", "6"]);

    let (status, _) = get(&app, "/v1/rooms?types=penthouse").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_room_detail() {
    let app = test_app();

    let (status, room) = get(&app, "/v1/rooms/4").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(room["name"], "Presidential Penthouse");
    assert_eq!(room["type"], "presidential");

    let (status, body) = get(&app, "/v1/rooms/nonexistent").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Room not found: nonexistent");
}

#[tokio::test]
async fn test_booking_flow() {
    let app = test_app();
    let check_in = days_from_today(10);
    let check_out = days_from_today(14);

    let (status, created) = post_booking(&app, booking_body("1", check_in, check_out)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["booking"]["status"], "confirmed");
    assert_eq!(created["quote"], json!({ "nightly_price": 299, "nights": 4, "total": 1196 }));

    let booking_id = created["booking"]["id"].as_str().unwrap().to_string();
    let (status, confirmation) = get(&app, &format!("/v1/bookings/{}", booking_id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(confirmation["booking"]["email"], "mary@example.com");
    assert_eq!(confirmation["room"]["id"], "1");

    // overlapping stay
    let (status, _) = post_booking(&app, booking_body("1", days_from_today(12), days_from_today(16))).await;
    assert_eq!(status, StatusCode::CONFLICT);

    // back-to-back stay
    let (status, _) = post_booking(&app, booking_body("1", check_out, days_from_today(17))).await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, stays) = get(&app, "/v1/rooms/1/bookings").await;
    assert_eq!(stays.as_array().unwrap().len(), 2);
    assert!(stays[0].get("email").is_none());
}

#[tokio::test]
async fn test_availability_endpoint() {
    let app = test_app();
    let check_in = days_from_today(3);
    let check_out = days_from_today(6);
    post_booking(&app, booking_body("2", check_in, check_out)).await;

    let uri = format!("/v1/rooms/2/availability?check_in={}&check_out={}", days_from_today(4), days_from_today(8));
    let (status, body) = get(&app, &uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["available"], false);

    let uri = format!("/v1/rooms/3/availability?check_in={}&check_out={}", days_from_today(4), days_from_today(8));
    let (_, body) = get(&app, &uri).await;
    assert_eq!(body["available"], true);

    let uri = format!("/v1/rooms/2/availability?check_in={}&check_out={}", check_out, check_in);
    let (status, _) = get(&app, &uri).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_booking_validation_and_lookup_failures() {
    let app = test_app();

    let mut body = booking_body("1", days_from_today(-2), days_from_today(1));
    body["email"] = json!("not-an-email");
    body["guests"] = json!(5);
    let (status, response) = post_booking(&app, body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let fields: Vec<&str> = response["fields"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["email", "guests", "check_in"]);

    let (status, _) = post_booking(&app, booking_body("99", days_from_today(1), days_from_today(2))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = get(&app, &format!("/v1/bookings/{}", uuid::Uuid::new_v4())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
