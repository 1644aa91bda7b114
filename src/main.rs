//! hotel_orders - Hotel Room Reservation API
//!
//! ```text
//! ┌──────────┐    ┌──────────┐    ┌──────────────┐    ┌──────────┐
//! │  Config  │───▶│  Ledger  │───▶│ OrderService │───▶│ Gateway  │
//! │  (YAML)  │    │ (RwLock) │    │ (check+book) │    │  (axum)  │
//! └──────────┘    └──────────┘    └──────────────┘    └──────────┘
//! ```
//!
//! Usage: `hotel_orders [--env <name>] [--port <port>]`

use std::sync::Arc;

use anyhow::Context;

use hotel_orders::config::AppConfig;
use hotel_orders::gateway::{self, state::AppState};
use hotel_orders::{InMemoryStorage, OrderService};

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

/// Get port override from command line (--port argument)
fn get_port_override() -> Option<u16> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == "--port" && i + 1 < args.len() {
            return args[i + 1].parse().ok();
        }
    }
    None
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = get_env();
    let mut app_config = AppConfig::load(&env)?;
    if let Some(port) = get_port_override() {
        app_config.gateway.port = port;
    }
    let _log_guard = hotel_orders::logging::init_logging(&app_config);

    tracing::info!(
        "Starting hotel_orders {} in {} mode",
        env!("GIT_HASH"),
        env
    );

    let storage = InMemoryStorage::with_availability(app_config.inventory.clone())
        .context("invalid seed inventory")?;
    tracing::info!(
        "Ledger seeded with {} availability records",
        app_config.inventory.len()
    );

    let orders = OrderService::new(Arc::new(storage));
    let state = Arc::new(AppState::new(orders));

    if let Err(e) = gateway::run_server(&app_config.gateway, state, gateway::shutdown_signal()).await
    {
        tracing::error!("server failed: {:#}", e);
        return Err(e);
    }
    Ok(())
}
