//! Stock API handlers.
//!
//! # Purpose
//! The availability check is the surface the orders service calls on every
//! placement; it is read-only and makes no reservation. The upsert and list
//! endpoints exist for seeding stock and operational inspection.
use crate::api::error::{api_internal, api_validation_error, ApiError};
use crate::api::types::{StockListResponse, StockUpsertRequest};
use crate::app::AppState;
use crate::model::StockRecord;
use axum::extract::{Query, State};
use axum::Json;
use std::collections::HashMap;

#[utoipa::path(
    get,
    path = "/api/inventory",
    tag = "inventory",
    params(
        ("skuCode" = String, Query, description = "SKU to check"),
        ("quantity" = i64, Query, description = "Requested quantity")
    ),
    responses(
        (status = 200, description = "Whether on-hand stock covers the quantity", body = bool),
        (status = 400, description = "Missing or invalid parameters", body = crate::api::types::ErrorResponse)
    )
)]
/// Answer whether stock for `skuCode` is at least `quantity`.
///
/// Both parameters are required; the answer is a point-in-time read.
pub(crate) async fn check_stock(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<bool>, ApiError> {
    let sku_code = params
        .get("skuCode")
        .filter(|sku| !sku.trim().is_empty())
        .ok_or_else(|| api_validation_error("skuCode query parameter is required"))?;
    let quantity: i64 = params
        .get("quantity")
        .ok_or_else(|| api_validation_error("quantity query parameter is required"))?
        .parse()
        .map_err(|_| api_validation_error("quantity must be an integer"))?;

    let in_stock = state
        .store
        .is_in_stock(sku_code, quantity)
        .await
        .map_err(|err| api_internal("failed to check stock", &err))?;
    metrics::counter!("shopline_stock_checks_total").increment(1);
    tracing::debug!(%sku_code, quantity, in_stock, "stock check");
    Ok(Json(in_stock))
}

#[utoipa::path(
    put,
    path = "/api/inventory",
    tag = "inventory",
    request_body = StockUpsertRequest,
    responses(
        (status = 200, description = "Stored stock level", body = StockRecord),
        (status = 400, description = "Malformed request", body = crate::api::types::ErrorResponse)
    )
)]
/// Set the absolute stock level for a SKU, creating the row if needed.
pub(crate) async fn set_stock(
    State(state): State<AppState>,
    Json(body): Json<StockUpsertRequest>,
) -> Result<Json<StockRecord>, ApiError> {
    if body.sku_code.trim().is_empty() {
        return Err(api_validation_error("skuCode must not be empty"));
    }
    if body.quantity < 0 {
        return Err(api_validation_error("quantity must not be negative"));
    }
    let stored = state
        .store
        .set_stock(StockRecord {
            sku_code: body.sku_code,
            quantity: body.quantity,
        })
        .await
        .map_err(|err| api_internal("failed to store stock level", &err))?;
    Ok(Json(stored))
}

#[utoipa::path(
    get,
    path = "/api/inventory/all",
    tag = "inventory",
    responses(
        (status = 200, description = "All stock rows", body = StockListResponse)
    )
)]
pub(crate) async fn list_stock(
    State(state): State<AppState>,
) -> Result<Json<StockListResponse>, ApiError> {
    let items = state
        .store
        .list_stock()
        .await
        .map_err(|err| api_internal("failed to list stock", &err))?;
    Ok(Json(StockListResponse { items }))
}
