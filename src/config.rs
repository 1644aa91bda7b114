use std::fs;
use std::time::Duration;

use anyhow::Context;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::RoomAvailability;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub log_dir: String,
    pub log_file: String,
    pub use_json: bool,
    pub rotation: String,
    #[serde(default)]
    pub gateway: GatewayConfig,
    /// Availability the ledger starts with
    #[serde(default = "default_inventory")]
    pub inventory: Vec<RoomAvailability>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct GatewayConfig {
    pub host: String,
    pub port: u16,
    pub request_timeout_ms: u64,
    pub shutdown_timeout_ms: u64,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            request_timeout_ms: 10_000,
            shutdown_timeout_ms: 5_000,
        }
    }
}

impl GatewayConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn shutdown_timeout(&self) -> Duration {
        Duration::from_millis(self.shutdown_timeout_ms)
    }
}

/// reddison/lux: one room from 2024-01-01 through 01-04, sold out on 01-05.
fn default_inventory() -> Vec<RoomAvailability> {
    [(1, 1), (2, 1), (3, 1), (4, 1), (5, 0)]
        .into_iter()
        .filter_map(|(day, quota)| {
            NaiveDate::from_ymd_opt(2024, 1, day)
                .map(|date| RoomAvailability::new("reddison", "lux", date, quota))
        })
        .collect()
}

impl AppConfig {
    /// Load `config/<env>.yaml`.
    pub fn load(env: &str) -> anyhow::Result<Self> {
        let config_path = format!("config/{}.yaml", env);
        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path))?;
        Self::from_yaml(&content).with_context(|| format!("Failed to parse {}", config_path))
    }

    pub fn from_yaml(content: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }
}
