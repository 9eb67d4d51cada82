//! API integration tests, driving the router in-process over a temp data file

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use equipment_registry::{api::create_router, AppConfig, AppState};

const BASE_URL: &str = "/api/v1";

fn app(dir: &TempDir) -> Router {
    let mut config = AppConfig::default();
    config.storage.data_file = dir.path().join("data.json");
    create_router(AppState::new(config))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("Failed to send request");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Failed to parse response")
    };
    (status, body)
}

fn get(path: &str) -> Request<Body> {
    Request::builder()
        .uri(format!("{}{}", BASE_URL, path))
        .body(Body::empty())
        .unwrap()
}

fn post(path: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(format!("{}{}", BASE_URL, path))
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn register(app: &Router, body: Value) -> StatusCode {
    send(app, post("/equipment", body)).await.0
}

fn tags(view: &Value) -> Vec<String> {
    view["items"]
        .as_array()
        .expect("items array")
        .iter()
        .map(|row| row["asset_tag"].as_str().unwrap_or_default().to_string())
        .collect()
}

#[tokio::test]
async fn test_health_check() {
    let dir = TempDir::new().unwrap();
    let app = app(&dir);

    let (status, body) = send(&app, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_register_and_list() {
    let dir = TempDir::new().unwrap();
    let app = app(&dir);

    let (status, body) = send(
        &app,
        post(
            "/equipment",
            json!({
                "asset_tag": "EQP002",
                "name": "Monitor 27\"",
                "brand": "LG",
                "type": "Monitor",
                "value": 1234.5,
                "acquisition_date": "2024-02-10",
                "condition": "Used",
                "charger_power": "Other"
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["asset_tag"], "EQP002");
    assert_eq!(body["acquisition_date"], "2024-02-10");

    let status = register(
        &app,
        json!({ "asset_tag": "EQP010", "name": "Notebook", "type": "Computer", "value": 5000 }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, view) = send(&app, get("/equipment")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(tags(&view), vec!["EQP010", "EQP002"]);
    assert_eq!(view["items"][1]["value_display"], "R$ 1.234,50");
    assert_eq!(view["total_value_display"], "R$ 6,234.50");

    let (_, view) = send(&app, get("/equipment?order=ascending")).await;
    assert_eq!(tags(&view), vec!["EQP002", "EQP010"]);
}

#[tokio::test]
async fn test_duplicate_asset_tag_is_rejected() {
    let dir = TempDir::new().unwrap();
    let app = app(&dir);
    let path = dir.path().join("data.json");

    assert_eq!(
        register(&app, json!({ "asset_tag": "EQP001", "name": "Desk" })).await,
        StatusCode::CREATED
    );
    let before = std::fs::read(&path).unwrap();

    let (status, body) = send(
        &app,
        post("/equipment", json!({ "asset_tag": "EQP001", "name": "Chair" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], 8);
    assert_eq!(std::fs::read(&path).unwrap(), before);

    // Exact match only: a different case is a different tag.
    assert_eq!(
        register(&app, json!({ "asset_tag": "eqp001", "name": "Chair" })).await,
        StatusCode::CREATED
    );
}

#[tokio::test]
async fn test_missing_required_fields() {
    let dir = TempDir::new().unwrap();
    let app = app(&dir);

    let (status, body) = send(&app, post("/equipment", json!({ "name": "Desk" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BadValue");

    let (status, _) = send(&app, post("/equipment", json!({ "asset_tag": "EQP001" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert!(!dir.path().join("data.json").exists());
}

#[tokio::test]
async fn test_malformed_form_gets_error_body() {
    let dir = TempDir::new().unwrap();
    let app = app(&dir);

    for body in [
        json!({ "asset_tag": "EQP001", "name": "Desk", "type": "Boat" }),
        json!({ "asset_tag": "EQP001", "name": "Desk", "value": null }),
        json!({ "asset_tag": "EQP001", "name": "Desk", "acquisition_date": "15/03/2024" }),
    ] {
        let (status, body) = send(&app, post("/equipment", body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], 18);
        assert_eq!(body["error"], "BadValue");
        assert!(body["message"].is_string());
    }

    assert!(!dir.path().join("data.json").exists());
}

#[tokio::test]
async fn test_unknown_sort_order_gets_error_body() {
    let dir = TempDir::new().unwrap();
    let app = app(&dir);

    let (status, body) = send(&app, get("/equipment?order=sideways")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BadValue");

    let (status, _) = send(&app, get("/equipment?order=asc")).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_filters_do_not_change_totals() {
    let dir = TempDir::new().unwrap();
    let app = app(&dir);

    register(&app, json!({ "asset_tag": "EQP001", "name": "Desk", "brand": "Tok", "value": 10.0 })).await;
    register(&app, json!({ "asset_tag": "EQP002", "name": "Monitor", "brand": "LG", "type": "Monitor", "value": 20.5 })).await;

    let (status, view) = send(&app, get("/equipment?name=DESK")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(tags(&view), vec!["EQP001"]);
    assert_eq!(view["displayed"], 1);
    assert_eq!(view["total_records"], 2);
    assert_eq!(view["total_value_display"], "R$ 30.50");

    let (_, view) = send(&app, get("/equipment?brand=lg&type=Monitor")).await;
    assert_eq!(tags(&view), vec!["EQP002"]);

    let (_, all) = send(&app, get("/equipment?type=All")).await;
    let (_, unfiltered) = send(&app, get("/equipment")).await;
    assert_eq!(tags(&all), tags(&unfiltered));
    assert_eq!(all["type_options"], json!(["All", "Monitor", "Furniture"]));

    let (status, _) = send(&app, get("/equipment?type=Spaceship")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_corrupted_file_is_reported_and_kept() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data.json");
    std::fs::write(&path, b"[{\"asset_tag\": ").unwrap();
    let app = app(&dir);

    let (status, view) = send(&app, get("/equipment")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(view["items"], json!([]));
    assert_eq!(view["warnings"][0]["kind"], "corrupt_data");
    assert_eq!(std::fs::read(&path).unwrap(), b"[{\"asset_tag\": ");

    let (status, body) = send(&app, get("/ready")).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "corrupted data file");

    // A successful registration replaces the corrupted document.
    assert_eq!(
        register(&app, json!({ "asset_tag": "EQP001", "name": "Desk" })).await,
        StatusCode::CREATED
    );
    let (status, _) = send(&app, get("/ready")).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_stats() {
    let dir = TempDir::new().unwrap();
    let app = app(&dir);

    register(&app, json!({ "asset_tag": "C1", "name": "Charger", "type": "Charger", "value": 99.9 })).await;
    register(&app, json!({ "asset_tag": "C2", "name": "Charger", "type": "Charger", "value": 0.1 })).await;
    register(&app, json!({ "asset_tag": "M1", "name": "Monitor", "type": "Monitor", "value": 1000 })).await;

    let (status, stats) = send(&app, get("/stats")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["total_records"], 3);
    assert_eq!(stats["total_value_display"], "R$ 1,100.00");
    assert_eq!(
        stats["by_type"],
        json!([
            { "label": "Charger", "value": 2 },
            { "label": "Monitor", "value": 1 }
        ])
    );
}
