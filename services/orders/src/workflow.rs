//! Order placement workflow.
//!
//! # What this module is
//! The coordination core of the service: it turns an incoming order request
//! into either a persisted order plus a published event, or a rejection with
//! a reason the caller can act on. Everything else in this service is plumbing
//! around this module.
//!
//! # State machine
//! `Received -> StockChecked -> Persisted -> EventPublished`, with `Rejected`
//! reachable only from `Received`. The three steps run strictly sequentially
//! within one request; there is no cross-request locking, so two concurrent
//! orders for the same SKU can both pass the stock check before either
//! persists. That time-of-check/time-of-use race is inherent to the design:
//! the stock check is a point-in-time gate, not a reservation.
//!
//! # Partial failure
//! - Stock check failure or a `false` answer rejects before any side effect.
//! - A persist failure aborts inside the store transaction; the freshly
//!   generated order number is discarded and nothing is published.
//! - A publish failure after a successful persist is swallowed: it is logged
//!   and counted but never surfaced to the caller. The order is placed once it
//!   is persisted; the event is an auxiliary signal for downstream consumers.
//!   Preserve this behavior - it is a deliberate tradeoff, not an oversight.
//!
//! # Idempotency
//! There is no request-deduplication key. Re-submitting an identical request
//! produces a new, distinct order with a new order number.
use crate::inventory::{InventoryError, InventoryGateway};
use crate::model::{NewOrder, Order};
use crate::store::{OrderStore, StoreError};
use shopline_events::{EventPublisher, OrderEvent};
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum PlaceOrderError {
    #[error("invalid order request: {0}")]
    Validation(String),
    #[error("product with SKU code {0} is out of stock")]
    OutOfStock(String),
    #[error("inventory service unreachable: {0}")]
    InventoryUnreachable(String),
    #[error("failed to persist order")]
    Persistence(#[from] StoreError),
}

/// The placement workflow with its three collaborators injected explicitly.
///
/// Collaborators are process-wide resources (connection pool, HTTP client,
/// event bus) built once at startup; passing them in keeps the workflow
/// unit-testable with fakes.
pub struct OrderPlacement {
    store: Arc<dyn OrderStore>,
    inventory: Arc<dyn InventoryGateway>,
    publisher: Arc<dyn EventPublisher>,
    order_topic: String,
}

impl OrderPlacement {
    pub fn new(
        store: Arc<dyn OrderStore>,
        inventory: Arc<dyn InventoryGateway>,
        publisher: Arc<dyn EventPublisher>,
        order_topic: String,
    ) -> Self {
        Self {
            store,
            inventory,
            publisher,
            order_topic,
        }
    }

    /// Drive one request through the full placement state machine.
    ///
    /// # Errors
    /// - [`PlaceOrderError::Validation`]: malformed request, no side effects.
    /// - [`PlaceOrderError::OutOfStock`]: stock check answered `false`.
    /// - [`PlaceOrderError::InventoryUnreachable`]: stock check timed out or
    ///   failed; distinct from out-of-stock because it is retryable.
    /// - [`PlaceOrderError::Persistence`]: store write failed after the stock
    ///   check passed; no order number is considered issued.
    pub async fn place_order(&self, request: NewOrder) -> Result<Order, PlaceOrderError> {
        validate(&request)?;

        let in_stock = self
            .inventory
            .check_availability(&request.sku_code, request.quantity as u32)
            .await
            .map_err(|InventoryError::Unavailable(reason)| {
                metrics::counter!("shopline_orders_rejected_total", "reason" => "inventory_unreachable")
                    .increment(1);
                PlaceOrderError::InventoryUnreachable(reason)
            })?;
        if !in_stock {
            metrics::counter!("shopline_orders_rejected_total", "reason" => "out_of_stock")
                .increment(1);
            return Err(PlaceOrderError::OutOfStock(request.sku_code));
        }

        // Fresh 128-bit random order number, generated exactly once per
        // successful placement. If the insert fails the UUID is discarded.
        let order_number = Uuid::new_v4().to_string();
        let order = self.store.insert_order(request, &order_number).await?;

        // Best-effort publish: the order is already placed; a broker failure
        // must not fail the placement or roll anything back.
        let event = OrderEvent {
            order_number: order.order_number.clone(),
        };
        if let Err(err) = self.publisher.publish(&self.order_topic, &event).await {
            metrics::counter!("shopline_order_events_dropped_total").increment(1);
            tracing::warn!(
                error = %err,
                order_number = %order.order_number,
                "order event publish failed"
            );
        }

        metrics::counter!("shopline_orders_placed_total").increment(1);
        tracing::info!(
            order_number = %order.order_number,
            sku_code = %order.sku_code,
            quantity = order.quantity,
            "order placed"
        );
        Ok(order)
    }
}

fn validate(request: &NewOrder) -> Result<(), PlaceOrderError> {
    if request.sku_code.trim().is_empty() {
        return Err(PlaceOrderError::Validation("skuCode must not be empty".into()));
    }
    if request.quantity < 1 {
        return Err(PlaceOrderError::Validation(
            "quantity must be a positive integer".into(),
        ));
    }
    Ok(())
}
