// In-process pub/sub event bus for order notifications.
// The bus keeps a registry of named topics backed by bounded broadcast
// channels; publishing is fire-and-forget and subscribers that fall behind
// observe an explicit lag signal instead of blocking the publisher.
use async_trait::async_trait;
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tokio::sync::{RwLock, broadcast};

const DEFAULT_TOPIC_CAPACITY: usize = 1024;

/// Payload published to the order topic once an order has been persisted.
///
/// Carries only the externally visible order number; consumers that need the
/// full order must look it up through the orders API. The event is created
/// once per persisted order and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderEvent {
    pub order_number: String,
}

#[derive(thiserror::Error, Debug)]
pub enum PublishError {
    #[error("failed to encode event payload: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("topic closed: {0}")]
    Closed(String),
}

#[derive(thiserror::Error, Debug)]
pub enum SubscribeError {
    #[error("subscriber lagged, skipped {0} events")]
    Lagged(u64),
    #[error("undecodable event payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Outbound side of the order topic as seen by the placement workflow.
///
/// One publish attempt per call, no retries and no delivery acknowledgment;
/// retry policy, if any, belongs to the caller.
#[async_trait]
pub trait EventPublisher: Send + Sync {
    async fn publish(&self, topic: &str, event: &OrderEvent) -> Result<(), PublishError>;
}

/// Topic registry with bounded fanout channels.
///
/// Topics are created lazily on first publish or subscribe. Within one
/// process every live subscriber receives every event at least once; slow
/// subscribers get [`SubscribeError::Lagged`] and must tolerate gaps, which is
/// why consumers are required to act idempotently.
pub struct EventBus {
    topics: RwLock<HashMap<String, broadcast::Sender<Bytes>>>,
    capacity: usize,
}

impl EventBus {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_TOPIC_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            topics: RwLock::new(HashMap::new()),
            capacity,
        }
    }

    /// Subscribe to a topic, creating it if it does not exist yet.
    pub async fn subscribe(&self, topic: &str) -> Subscription {
        let sender = self.sender_for(topic).await;
        Subscription {
            receiver: sender.subscribe(),
        }
    }

    async fn sender_for(&self, topic: &str) -> broadcast::Sender<Bytes> {
        {
            let topics = self.topics.read().await;
            if let Some(sender) = topics.get(topic) {
                return sender.clone();
            }
        }
        let mut topics = self.topics.write().await;
        topics
            .entry(topic.to_string())
            .or_insert_with(|| broadcast::channel(self.capacity).0)
            .clone()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventPublisher for EventBus {
    async fn publish(&self, topic: &str, event: &OrderEvent) -> Result<(), PublishError> {
        let payload = Bytes::from(serde_json::to_vec(event)?);
        let sender = self.sender_for(topic).await;
        // A send error only means there are no live subscribers right now;
        // fire-and-forget publication still counts as delivered to the topic.
        match sender.send(payload) {
            Ok(receivers) => {
                metrics::counter!("shopline_events_published_total").increment(1);
                tracing::debug!(topic, receivers, "published order event");
            }
            Err(_) => {
                metrics::counter!("shopline_events_published_total").increment(1);
                tracing::debug!(topic, "published order event with no subscribers");
            }
        }
        Ok(())
    }
}

/// Receiving side of a topic.
pub struct Subscription {
    receiver: broadcast::Receiver<Bytes>,
}

impl Subscription {
    /// Wait for the next event on the topic.
    ///
    /// Returns `Ok(None)` once the topic is closed (all senders dropped).
    /// A lagging subscriber gets [`SubscribeError::Lagged`] and may keep
    /// calling `next_event` to resume from the oldest retained event.
    pub async fn next_event(&mut self) -> Result<Option<OrderEvent>, SubscribeError> {
        match self.receiver.recv().await {
            Ok(payload) => {
                let event = serde_json::from_slice::<OrderEvent>(&payload)?;
                Ok(Some(event))
            }
            Err(broadcast::error::RecvError::Lagged(skipped)) => {
                metrics::counter!("shopline_events_lagged_total").increment(skipped);
                Err(SubscribeError::Lagged(skipped))
            }
            Err(broadcast::error::RecvError::Closed) => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(order_number: &str) -> OrderEvent {
        OrderEvent {
            order_number: order_number.to_string(),
        }
    }

    #[tokio::test]
    async fn publish_without_subscribers_succeeds() {
        let bus = EventBus::new();
        bus.publish("order-topic", &event("a"))
            .await
            .expect("publish is fire-and-forget");
    }

    #[tokio::test]
    async fn subscriber_receives_published_events_in_order() {
        let bus = EventBus::new();
        let mut subscription = bus.subscribe("order-topic").await;
        bus.publish("order-topic", &event("first")).await.unwrap();
        bus.publish("order-topic", &event("second")).await.unwrap();

        let first = subscription.next_event().await.unwrap().unwrap();
        let second = subscription.next_event().await.unwrap().unwrap();
        assert_eq!(first.order_number, "first");
        assert_eq!(second.order_number, "second");
    }

    #[tokio::test]
    async fn topics_are_isolated() {
        let bus = EventBus::new();
        let mut orders = bus.subscribe("order-topic").await;
        let mut other = bus.subscribe("other-topic").await;
        bus.publish("order-topic", &event("a")).await.unwrap();
        bus.publish("other-topic", &event("b")).await.unwrap();

        assert_eq!(orders.next_event().await.unwrap().unwrap().order_number, "a");
        assert_eq!(other.next_event().await.unwrap().unwrap().order_number, "b");
    }

    #[tokio::test]
    async fn slow_subscriber_observes_lag_and_resumes() {
        let bus = EventBus::with_capacity(1);
        let mut subscription = bus.subscribe("order-topic").await;
        bus.publish("order-topic", &event("a")).await.unwrap();
        bus.publish("order-topic", &event("b")).await.unwrap();
        bus.publish("order-topic", &event("c")).await.unwrap();

        match subscription.next_event().await {
            Err(SubscribeError::Lagged(skipped)) => assert!(skipped >= 1),
            other => panic!("expected lag, got {other:?}"),
        }
        // After the lag signal the subscriber resumes from the retained tail.
        let resumed = subscription.next_event().await.unwrap().unwrap();
        assert_eq!(resumed.order_number, "c");
    }

    #[test]
    fn order_event_wire_format_is_camel_case() {
        let json = serde_json::to_value(event("n-1")).unwrap();
        assert_eq!(json, serde_json::json!({ "orderNumber": "n-1" }));
    }
}
