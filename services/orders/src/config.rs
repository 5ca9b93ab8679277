use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::fs;
use std::net::SocketAddr;

// Orders service configuration sourced from environment variables.
#[derive(Debug, Clone)]
pub struct OrdersConfig {
    pub bind_addr: SocketAddr,
    pub metrics_bind: SocketAddr,
    pub storage: StorageBackend,
    pub postgres: Option<PostgresConfig>,
    pub inventory_url: String,
    pub inventory_timeout_ms: u64,
    pub order_topic: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Memory,
    Postgres,
}

#[derive(Debug, Clone)]
pub struct PostgresConfig {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout_ms: u64,
}

#[derive(Debug, Deserialize)]
struct OrdersConfigOverride {
    bind_addr: Option<String>,
    metrics_bind: Option<String>,
    storage: Option<String>,
    database_url: Option<String>,
    inventory_url: Option<String>,
    inventory_timeout_ms: Option<u64>,
    order_topic: Option<String>,
}

fn parse_storage(value: &str) -> Result<StorageBackend> {
    match value {
        "memory" => Ok(StorageBackend::Memory),
        "postgres" => Ok(StorageBackend::Postgres),
        other => Err(anyhow!("unknown storage backend: {other}")),
    }
}

impl OrdersConfig {
    pub fn from_env() -> Result<Self> {
        let bind_addr = std::env::var("SHOPLINE_ORDERS_BIND")
            .unwrap_or_else(|_| "0.0.0.0:8081".to_string())
            .parse()
            .with_context(|| "parse SHOPLINE_ORDERS_BIND")?;
        let metrics_bind = std::env::var("SHOPLINE_ORDERS_METRICS_BIND")
            .unwrap_or_else(|_| "0.0.0.0:9081".to_string())
            .parse()
            .with_context(|| "parse SHOPLINE_ORDERS_METRICS_BIND")?;
        let storage = parse_storage(
            &std::env::var("SHOPLINE_ORDERS_STORAGE").unwrap_or_else(|_| "memory".to_string()),
        )
        .with_context(|| "parse SHOPLINE_ORDERS_STORAGE")?;
        let postgres = match std::env::var("SHOPLINE_ORDERS_DATABASE_URL") {
            Ok(url) => {
                let max_connections = std::env::var("SHOPLINE_ORDERS_PG_MAX_CONNECTIONS")
                    .unwrap_or_else(|_| "8".to_string())
                    .parse()
                    .with_context(|| "parse SHOPLINE_ORDERS_PG_MAX_CONNECTIONS")?;
                let acquire_timeout_ms = std::env::var("SHOPLINE_ORDERS_PG_ACQUIRE_TIMEOUT_MS")
                    .unwrap_or_else(|_| "3000".to_string())
                    .parse()
                    .with_context(|| "parse SHOPLINE_ORDERS_PG_ACQUIRE_TIMEOUT_MS")?;
                Some(PostgresConfig {
                    url,
                    max_connections,
                    acquire_timeout_ms,
                })
            }
            Err(_) => None,
        };
        let inventory_url = std::env::var("SHOPLINE_ORDERS_INVENTORY_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:8082".to_string());
        let inventory_timeout_ms = match std::env::var("SHOPLINE_ORDERS_INVENTORY_TIMEOUT_MS") {
            Ok(value) => value
                .parse()
                .with_context(|| "parse SHOPLINE_ORDERS_INVENTORY_TIMEOUT_MS")?,
            Err(_) => crate::inventory::DEFAULT_INVENTORY_TIMEOUT.as_millis() as u64,
        };
        let order_topic = std::env::var("SHOPLINE_ORDERS_TOPIC")
            .unwrap_or_else(|_| "order-topic".to_string());
        Ok(Self {
            bind_addr,
            metrics_bind,
            storage,
            postgres,
            inventory_url,
            inventory_timeout_ms,
            order_topic,
        })
    }

    pub fn from_env_or_yaml() -> Result<Self> {
        let mut config = Self::from_env()?;
        if let Ok(path) = std::env::var("SHOPLINE_ORDERS_CONFIG") {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("read SHOPLINE_ORDERS_CONFIG: {path}"))?;
            let override_cfg: OrdersConfigOverride = serde_yaml::from_str(&contents)
                .with_context(|| "parse orders config yaml")?;
            if let Some(value) = override_cfg.bind_addr {
                config.bind_addr = value.parse().with_context(|| "parse bind_addr")?;
            }
            if let Some(value) = override_cfg.metrics_bind {
                config.metrics_bind = value.parse().with_context(|| "parse metrics_bind")?;
            }
            if let Some(value) = override_cfg.storage {
                config.storage = parse_storage(&value)?;
            }
            if let Some(url) = override_cfg.database_url {
                let existing = config.postgres.take();
                config.postgres = Some(PostgresConfig {
                    url,
                    max_connections: existing.as_ref().map(|pg| pg.max_connections).unwrap_or(8),
                    acquire_timeout_ms: existing
                        .as_ref()
                        .map(|pg| pg.acquire_timeout_ms)
                        .unwrap_or(3000),
                });
            }
            if let Some(value) = override_cfg.inventory_url {
                config.inventory_url = value;
            }
            if let Some(value) = override_cfg.inventory_timeout_ms {
                config.inventory_timeout_ms = value;
            }
            if let Some(value) = override_cfg.order_topic {
                config.order_topic = value;
            }
        }
        Ok(config)
    }
}
