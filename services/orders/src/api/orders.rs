//! Order API handlers.
//!
//! # Purpose
//! Thin HTTP adapters over the placement workflow: deserialize the request,
//! run the workflow, and map its outcome onto status codes and the shared
//! error shape.
use crate::api::error::{
    ApiError, api_internal, api_inventory_unreachable, api_out_of_stock, api_validation_error,
};
use crate::api::types::{OrderCreateRequest, OrderListResponse};
use crate::app::AppState;
use crate::model::NewOrder;
use crate::workflow::PlaceOrderError;
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;

#[utoipa::path(
    post,
    path = "/api/orders",
    tag = "orders",
    request_body = OrderCreateRequest,
    responses(
        (status = 201, description = "Order placed", body = crate::model::Order),
        (status = 400, description = "Malformed request", body = crate::api::types::ErrorResponse),
        (status = 409, description = "Out of stock", body = crate::api::types::ErrorResponse),
        (status = 503, description = "Inventory unreachable", body = crate::api::types::ErrorResponse)
    )
)]
pub(crate) async fn place_order(
    State(state): State<AppState>,
    Json(body): Json<OrderCreateRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let request = NewOrder {
        sku_code: body.sku_code,
        price: body.price,
        quantity: body.quantity,
    };
    match state.placement.place_order(request).await {
        Ok(order) => Ok((StatusCode::CREATED, Json(order))),
        Err(PlaceOrderError::Validation(message)) => Err(api_validation_error(&message)),
        Err(err @ PlaceOrderError::OutOfStock(_)) => Err(api_out_of_stock(&err.to_string())),
        Err(err @ PlaceOrderError::InventoryUnreachable(_)) => {
            Err(api_inventory_unreachable(&err.to_string()))
        }
        Err(PlaceOrderError::Persistence(err)) => Err(api_internal("failed to persist order", &err)),
    }
}

#[utoipa::path(
    get,
    path = "/api/orders",
    tag = "orders",
    responses(
        (status = 200, description = "List placed orders", body = OrderListResponse)
    )
)]
pub(crate) async fn list_orders(
    State(state): State<AppState>,
) -> Result<Json<OrderListResponse>, ApiError> {
    let items = state
        .store
        .list_orders()
        .await
        .map_err(|err| api_internal("failed to list orders", &err))?;
    Ok(Json(OrderListResponse { items }))
}
