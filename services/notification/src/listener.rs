//! Order event consumer.
//!
//! # Purpose
//! Reacts to order placement events by logging a receipt notification. The
//! topic delivers at least once and slow consumers can lag, so processing is
//! idempotent: a redelivered order number is acknowledged but not re-processed.
use shopline_events::{OrderEvent, SubscribeError, Subscription};
use std::collections::HashSet;

pub struct NotificationListener {
    seen: HashSet<String>,
}

impl NotificationListener {
    pub fn new() -> Self {
        Self {
            seen: HashSet::new(),
        }
    }

    /// Process one event; returns whether it was new.
    ///
    /// First delivery logs the notification at `info` and counts it.
    /// Redeliveries are logged at `debug` and otherwise ignored.
    pub fn handle(&mut self, event: &OrderEvent) -> bool {
        if !self.seen.insert(event.order_number.clone()) {
            tracing::debug!(
                order_number = %event.order_number,
                "duplicate order event ignored"
            );
            return false;
        }
        metrics::counter!("shopline_order_events_received_total").increment(1);
        tracing::info!(
            order_number = %event.order_number,
            "received notification for order"
        );
        true
    }

    pub fn processed_count(&self) -> usize {
        self.seen.len()
    }
}

impl Default for NotificationListener {
    fn default() -> Self {
        Self::new()
    }
}

/// Consume the subscription until the topic closes.
///
/// Lag is survivable: the listener logs the gap and keeps reading from the
/// retained tail. Undecodable payloads are skipped, not fatal.
pub async fn run(mut subscription: Subscription, listener: &mut NotificationListener) {
    loop {
        match subscription.next_event().await {
            Ok(Some(event)) => {
                listener.handle(&event);
            }
            Ok(None) => {
                tracing::info!("order topic closed, stopping listener");
                return;
            }
            Err(SubscribeError::Lagged(skipped)) => {
                tracing::warn!(skipped, "listener lagged behind the order topic");
            }
            Err(SubscribeError::Decode(err)) => {
                tracing::warn!(error = %err, "skipping undecodable order event");
            }
        }
    }
}
