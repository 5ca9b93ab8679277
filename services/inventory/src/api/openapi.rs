//! OpenAPI schema aggregation for the inventory API.
use crate::api::{
    inventory, system,
    types::{ErrorResponse, HealthStatus, StockListResponse, StockUpsertRequest},
};
use crate::model::StockRecord;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "shopline-inventory",
        version = "v1",
        description = "Shopline stock availability HTTP API"
    ),
    paths(
        inventory::check_stock,
        inventory::set_stock,
        inventory::list_stock,
        system::system_health
    ),
    components(schemas(
        StockRecord,
        StockUpsertRequest,
        StockListResponse,
        ErrorResponse,
        HealthStatus
    )),
    tags(
        (name = "inventory", description = "Stock levels and availability checks"),
        (name = "system", description = "Health and service metadata")
    )
)]
pub struct ApiDoc;
