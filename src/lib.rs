//! hotel_orders - Hotel Room Reservation API
//!
//! Books rooms against a per-day inventory ledger shared by concurrent
//! requests, without overbooking.
//!
//! # Modules
//!
//! - [`days`] - `[from, to)` interval to UTC calendar days
//! - [`models`] - Order and RoomAvailability types
//! - [`storage`] - Availability ledger trait and in-memory implementation
//! - [`service`] - Order service (validate, check, book, persist)
//! - [`gateway`] - HTTP boundary (axum)
//! - [`config`] - YAML configuration
//! - [`logging`] - tracing subscriber setup

pub mod days;
pub mod models;

// Ledger and booking
pub mod service;
pub mod storage;

// Process wiring
pub mod config;
pub mod gateway;
pub mod logging;

// Convenient re-exports at crate root
pub use models::{Order, RoomAvailability};
pub use service::{OrderError, OrderService};
pub use storage::{InMemoryStorage, Storage, StorageError};
