use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Catalog entry for one sellable product.
///
/// `id` is server-assigned (UUID v4) and immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: Decimal,
}

/// The caller-supplied part of a product, before an id is assigned.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: Decimal,
}
