//! HTTP API request/response types.
use crate::model::StockRecord;
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
pub struct StockUpsertRequest {
    pub sku_code: String,
    pub quantity: i64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct StockListResponse {
    pub items: Vec<StockRecord>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct HealthStatus {
    pub status: String,
}
