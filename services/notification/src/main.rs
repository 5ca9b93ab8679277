//! Shopline notification consumer entry point.
//!
//! Hosts a local event bus for development runs; the deliverable contract is
//! the listener, which only sees a `Subscription`.
mod config;
mod listener;
mod observability;

use shopline_events::EventBus;
use std::future::Future;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = config::NotificationConfig::from_env_or_yaml().expect("notification config");
    run_with_shutdown(config, async {
        let _ = tokio::signal::ctrl_c().await;
    })
    .await
}

async fn run_with_shutdown<F>(config: config::NotificationConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let metrics_handle = observability::init_observability("shopline-notification");
    let metrics_task = tokio::spawn(observability::serve_metrics(
        metrics_handle,
        config.metrics_bind,
    ));

    let bus = Arc::new(EventBus::new());
    let subscription = bus.subscribe(&config.order_topic).await;
    let mut listener = listener::NotificationListener::new();
    tracing::info!(topic = %config.order_topic, "notification consumer listening");

    tokio::pin!(shutdown);
    tokio::select! {
        _ = listener::run(subscription, &mut listener) => {}
        _ = &mut shutdown => {}
    }

    metrics_task.abort();
    let _ = metrics_task.await;
    Ok(())
}
