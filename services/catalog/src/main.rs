//! Shopline catalog HTTP service entry point.
mod api;
mod app;
mod config;
mod model;
mod observability;
mod store;

use anyhow::Context;
use app::{build_router, AppState};
use std::future::Future;
use std::sync::Arc;
use store::{memory::InMemoryStore, postgres::PostgresStore, ProductStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = config::CatalogConfig::from_env_or_yaml().expect("catalog config");
    run_with_shutdown(config, async {
        let _ = tokio::signal::ctrl_c().await;
    })
    .await
}

async fn run_with_shutdown<F>(config: config::CatalogConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let metrics_handle = observability::init_observability("shopline-catalog");
    let state = build_state(config.clone()).await?;
    let metrics_task = tokio::spawn(observability::serve_metrics(
        metrics_handle,
        config.metrics_bind,
    ));

    let app = build_router(state);

    let addr = config.bind_addr;
    tracing::info!(%addr, "catalog service listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tokio::pin!(shutdown);
    tokio::select! {
        result = axum::serve(listener, app.into_make_service()) => {
            result?;
        }
        _ = &mut shutdown => {}
    }

    metrics_task.abort();
    let _ = metrics_task.await;
    Ok(())
}

async fn build_state(config: config::CatalogConfig) -> anyhow::Result<AppState> {
    let store: Arc<dyn ProductStore> = match config.storage {
        config::StorageBackend::Memory => Arc::new(InMemoryStore::new()),
        config::StorageBackend::Postgres => {
            let pg = config
                .postgres
                .as_ref()
                .context("postgres configuration missing")?;
            Arc::new(PostgresStore::connect(pg).await?)
        }
    };
    Ok(AppState { store })
}
