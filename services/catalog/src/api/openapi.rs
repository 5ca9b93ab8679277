//! OpenAPI schema aggregation for the catalog API.
use crate::api::{
    products, system,
    types::{ErrorResponse, HealthStatus, ProductCreateRequest, ProductListResponse},
};
use crate::model::Product;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "shopline-catalog",
        version = "v1",
        description = "Shopline product catalog HTTP API"
    ),
    paths(
        products::create_product,
        products::list_products,
        system::system_health
    ),
    components(schemas(
        Product,
        ProductCreateRequest,
        ProductListResponse,
        ErrorResponse,
        HealthStatus
    )),
    tags(
        (name = "products", description = "Product catalog entries"),
        (name = "system", description = "Health and service metadata")
    )
)]
pub struct ApiDoc;
