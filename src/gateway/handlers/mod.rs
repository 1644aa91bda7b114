//! HTTP handlers
//!
//! - [`order`]: create/list orders, inventory snapshot
//! - [`health`]: liveness

pub mod health;
pub mod helpers;
pub mod order;

pub use health::{HealthResponse, health_check};
pub use order::{create_order, get_availability, get_orders};

// utoipa path items live next to their handlers
pub use health::__path_health_check;
pub use order::{__path_create_order, __path_get_availability, __path_get_orders};
