mod common;

use axum::http::StatusCode;
use catalog::app::{build_router, AppState};
use catalog::store::memory::InMemoryStore;
use common::{get_request, json_request, read_json};
use std::sync::Arc;
use tower::ServiceExt;

fn app() -> axum::Router {
    build_router(AppState {
        store: Arc::new(InMemoryStore::new()),
    })
}

#[tokio::test]
async fn created_product_gets_a_server_assigned_id() {
    let app = app();
    let create = json_request(
        "POST",
        "/api/products",
        serde_json::json!({
            "name": "iPhone 15",
            "description": "smartphone",
            "price": 999
        }),
    );
    let response = app.clone().oneshot(create).await.expect("create");
    assert_eq!(response.status(), StatusCode::CREATED);
    let payload = read_json(response).await;
    assert!(!payload["id"].as_str().expect("id").is_empty());
    assert_eq!(payload["name"], "iPhone 15");
    assert_eq!(payload["price"].as_f64(), Some(999.0));

    let response = app
        .oneshot(get_request("/api/products"))
        .await
        .expect("list");
    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json(response).await;
    assert_eq!(payload["items"].as_array().expect("items").len(), 1);
}

#[tokio::test]
async fn blank_name_is_rejected() {
    let create = json_request(
        "POST",
        "/api/products",
        serde_json::json!({ "name": " ", "description": "", "price": 1 }),
    );
    let response = app().oneshot(create).await.expect("create");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload = read_json(response).await;
    assert_eq!(payload["code"], "validation_error");
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
