//! Product API handlers.
use crate::api::error::{api_internal, api_validation_error, ApiError};
use crate::api::types::{ProductCreateRequest, ProductListResponse};
use crate::app::AppState;
use crate::model::NewProduct;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

#[utoipa::path(
    post,
    path = "/api/products",
    tag = "products",
    request_body = ProductCreateRequest,
    responses(
        (status = 201, description = "Product created", body = crate::model::Product),
        (status = 400, description = "Malformed request", body = crate::api::types::ErrorResponse)
    )
)]
pub(crate) async fn create_product(
    State(state): State<AppState>,
    Json(body): Json<ProductCreateRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if body.name.trim().is_empty() {
        return Err(api_validation_error("name must not be empty"));
    }
    let product = state
        .store
        .insert_product(NewProduct {
            name: body.name,
            description: body.description,
            price: body.price,
        })
        .await
        .map_err(|err| api_internal("failed to create product", &err))?;
    metrics::counter!("shopline_products_created_total").increment(1);
    tracing::info!(product_id = %product.id, name = %product.name, "product created");
    Ok((StatusCode::CREATED, Json(product)))
}

#[utoipa::path(
    get,
    path = "/api/products",
    tag = "products",
    responses(
        (status = 200, description = "List catalog products", body = ProductListResponse)
    )
)]
pub(crate) async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<ProductListResponse>, ApiError> {
    let items = state
        .store
        .list_products()
        .await
        .map_err(|err| api_internal("failed to list products", &err))?;
    Ok(Json(ProductListResponse { items }))
}
