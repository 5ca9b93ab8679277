//! Stock availability client.
//!
//! # Purpose
//! Typed remote-call wrapper the placement workflow uses to ask the inventory
//! service a yes/no question with a bounded timeout.
//!
//! # Notes
//! The client deliberately has no retry logic; retry policy belongs to the
//! caller, not hidden inside the transport wrapper. Timeouts and connection
//! failures surface as [`InventoryError::Unavailable`] so callers can tell
//! "definitely no stock" apart from "don't know".
use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_INVENTORY_TIMEOUT: Duration = Duration::from_secs(3);

#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("inventory service unavailable: {0}")]
    Unavailable(String),
}

/// Remote stock check contract.
///
/// Answers whether stock for `sku_code` is at least `quantity` (not merely
/// greater than zero; a `> 0` check would under-validate multi-unit orders).
/// The answer is a point-in-time read, not a reservation.
#[async_trait]
pub trait InventoryGateway: Send + Sync {
    async fn check_availability(
        &self,
        sku_code: &str,
        quantity: u32,
    ) -> Result<bool, InventoryError>;
}

/// HTTP client for the inventory query service.
pub struct HttpInventoryClient {
    base_url: String,
    client: reqwest::Client,
}

impl HttpInventoryClient {
    /// Build a client with both connect and read timeouts bounded by
    /// `timeout` so a stock check can never hang a placement indefinitely.
    pub fn new(base_url: String, timeout: Duration) -> Result<Self, anyhow::Error> {
        let client = reqwest::Client::builder()
            .connect_timeout(timeout)
            .timeout(timeout)
            .build()?;
        Ok(Self { base_url, client })
    }
}

#[async_trait]
impl InventoryGateway for HttpInventoryClient {
    async fn check_availability(
        &self,
        sku_code: &str,
        quantity: u32,
    ) -> Result<bool, InventoryError> {
        let url = format!("{}/api/inventory", self.base_url.trim_end_matches('/'));
        let quantity = quantity.to_string();
        let response = self
            .client
            .get(url)
            .query(&[("skuCode", sku_code), ("quantity", quantity.as_str())])
            .send()
            .await
            .map_err(|err| InventoryError::Unavailable(err.to_string()))?
            .error_for_status()
            .map_err(|err| InventoryError::Unavailable(err.to_string()))?;
        response
            .json::<bool>()
            .await
            .map_err(|err| InventoryError::Unavailable(err.to_string()))
    }
}
