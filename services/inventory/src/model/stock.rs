use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Absolute stock level for one SKU.
///
/// `quantity` is the full on-hand count, not a delta; upserts replace it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StockRecord {
    pub sku_code: String,
    pub quantity: i64,
}
