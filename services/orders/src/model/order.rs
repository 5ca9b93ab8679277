//! Order record definitions.
//!
//! # Purpose
//! Defines the transient placement request and the persisted order row used
//! by the workflow, store backends, and HTTP API.
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A placed order as persisted by the order store.
///
/// `id` is server-assigned and immutable once assigned. `order_number` is the
/// externally visible correlation token, generated exactly once per successful
/// placement and carried in the published order event. Rows are never updated
/// or deleted after insert.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i64,
    pub order_number: String,
    pub sku_code: String,
    pub price: Decimal,
    pub quantity: i32,
}

/// An incoming placement request before it has passed the stock gate.
///
/// The SKU code is opaque to the workflow; existence is only probed through
/// the stock check. Price is assumed validated upstream.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub sku_code: String,
    pub price: Decimal,
    pub quantity: i32,
}
