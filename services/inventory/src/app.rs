//! Inventory HTTP application wiring.
use crate::api;
use crate::api::openapi::ApiDoc;
use crate::store::InventoryStore;
use axum::Json;
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn InventoryStore>,
}

pub fn build_router(state: AppState) -> Router {
    let trace_layer =
        TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
            tracing::info_span!(
                "http.request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version()
            )
        });

    Router::new()
        .route(
            "/api/inventory",
            axum::routing::get(api::inventory::check_stock).put(api::inventory::set_stock),
        )
        .route(
            "/api/inventory/all",
            axum::routing::get(api::inventory::list_stock),
        )
        .route(
            "/api/system/health",
            axum::routing::get(api::system::system_health),
        )
        .route(
            "/api/openapi.json",
            axum::routing::get(|| async { Json(ApiDoc::openapi()) }),
        )
        .layer(trace_layer)
        .with_state(state)
}
