//! OpenAPI schema aggregation for the orders API.
use crate::api::{
    orders, system,
    types::{ErrorResponse, HealthStatus, OrderCreateRequest, OrderListResponse},
};
use crate::model::Order;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "shopline-orders",
        version = "v1",
        description = "Shopline order placement HTTP API"
    ),
    paths(
        orders::place_order,
        orders::list_orders,
        system::system_health
    ),
    components(schemas(
        Order,
        OrderCreateRequest,
        OrderListResponse,
        ErrorResponse,
        HealthStatus
    )),
    tags(
        (name = "orders", description = "Order placement and listing"),
        (name = "system", description = "Health and service metadata")
    )
)]
pub struct ApiDoc;
