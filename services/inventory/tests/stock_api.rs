mod common;

use axum::http::StatusCode;
use common::{get_request, json_request, read_json};
use inventory::app::{build_router, AppState};
use inventory::store::memory::InMemoryStore;
use std::sync::Arc;
use tower::ServiceExt;

fn app() -> axum::Router {
    build_router(AppState {
        store: Arc::new(InMemoryStore::new()),
    })
}

async fn seed(app: &axum::Router, sku: &str, quantity: i64) {
    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/api/inventory",
            serde_json::json!({ "skuCode": sku, "quantity": quantity }),
        ))
        .await
        .expect("seed");
    assert_eq!(response.status(), StatusCode::OK);
}

async fn check(app: &axum::Router, sku: &str, quantity: i64) -> bool {
    let response = app
        .clone()
        .oneshot(get_request(&format!(
            "/api/inventory?skuCode={sku}&quantity={quantity}"
        )))
        .await
        .expect("check");
    assert_eq!(response.status(), StatusCode::OK);
    read_json(response).await.as_bool().expect("boolean body")
}

#[tokio::test]
async fn availability_answer_is_quantity_aware() {
    let app = app();
    seed(&app, "iphone_15", 5).await;

    assert!(check(&app, "iphone_15", 3).await);
    assert!(check(&app, "iphone_15", 5).await);
    assert!(!check(&app, "iphone_15", 6).await);
    // Unknown SKU is definitively out of stock, not an error.
    assert!(!check(&app, "pixel_8", 1).await);
}

#[tokio::test]
async fn missing_parameters_are_rejected() {
    let app = app();

    for uri in [
        "/api/inventory",
        "/api/inventory?skuCode=iphone_15",
        "/api/inventory?quantity=1",
        "/api/inventory?skuCode=iphone_15&quantity=lots",
    ] {
        let response = app.clone().oneshot(get_request(uri)).await.expect("check");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "uri: {uri}");
        let payload = read_json(response).await;
        assert_eq!(payload["code"], "validation_error");
    }
}

#[tokio::test]
async fn upsert_replaces_the_stock_level() {
    let app = app();
    seed(&app, "iphone_15", 5).await;
    seed(&app, "iphone_15", 1).await;

    assert!(check(&app, "iphone_15", 1).await);
    assert!(!check(&app, "iphone_15", 2).await);
}

#[tokio::test]
async fn upsert_validates_the_request() {
    let app = app();

    let blank_sku = json_request(
        "PUT",
        "/api/inventory",
        serde_json::json!({ "skuCode": " ", "quantity": 5 }),
    );
    let response = app.clone().oneshot(blank_sku).await.expect("upsert");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let negative = json_request(
        "PUT",
        "/api/inventory",
        serde_json::json!({ "skuCode": "iphone_15", "quantity": -1 }),
    );
    let response = app.clone().oneshot(negative).await.expect("upsert");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn list_returns_all_rows() {
    let app = app();
    seed(&app, "iphone_15", 5).await;
    seed(&app, "pixel_8", 2).await;

    let response = app
        .clone()
        .oneshot(get_request("/api/inventory/all"))
        .await
        .expect("list");
    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json(response).await;
    let items = payload["items"].as_array().expect("items");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["skuCode"], "iphone_15");
    assert_eq!(items[0]["quantity"], 5);
}

#[tokio::test]
async fn health_endpoint_reports_ok() {
    let response = app()
        .oneshot(get_request("/api/system/health"))
        .await
        .expect("health");
    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json(response).await;
    assert_eq!(payload["status"], "ok");
}
