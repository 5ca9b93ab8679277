use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::net::SocketAddr;

// Notification consumer configuration sourced from environment variables.
#[derive(Debug, Clone)]
pub struct NotificationConfig {
    pub metrics_bind: SocketAddr,
    pub order_topic: String,
}

#[derive(Debug, Deserialize)]
struct NotificationConfigOverride {
    metrics_bind: Option<String>,
    order_topic: Option<String>,
}

impl NotificationConfig {
    pub fn from_env() -> Result<Self> {
        let metrics_bind = std::env::var("SHOPLINE_NOTIFICATION_METRICS_BIND")
            .unwrap_or_else(|_| "0.0.0.0:9084".to_string())
            .parse()
            .with_context(|| "parse SHOPLINE_NOTIFICATION_METRICS_BIND")?;
        let order_topic = std::env::var("SHOPLINE_NOTIFICATION_TOPIC")
            .unwrap_or_else(|_| "order-topic".to_string());
        Ok(Self {
            metrics_bind,
            order_topic,
        })
    }

    pub fn from_env_or_yaml() -> Result<Self> {
        let mut config = Self::from_env()?;
        if let Ok(path) = std::env::var("SHOPLINE_NOTIFICATION_CONFIG") {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("read SHOPLINE_NOTIFICATION_CONFIG: {path}"))?;
            let override_cfg: NotificationConfigOverride = serde_yaml::from_str(&contents)
                .with_context(|| "parse notification config yaml")?;
            if let Some(value) = override_cfg.metrics_bind {
                config.metrics_bind = value.parse().with_context(|| "parse metrics_bind")?;
            }
            if let Some(value) = override_cfg.order_topic {
                config.order_topic = value;
            }
        }
        Ok(config)
    }
}
