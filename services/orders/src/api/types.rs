//! HTTP API request/response types.
//!
//! # Purpose
//! Defines the wire payloads for the orders REST API. Field names follow the
//! camelCase convention the downstream shop clients already speak.
use crate::model::Order;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    pub request_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreateRequest {
    pub sku_code: String,
    pub price: Decimal,
    pub quantity: i32,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct OrderListResponse {
    pub items: Vec<Order>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct HealthStatus {
    pub status: String,
}
