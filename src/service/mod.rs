//! Booking Services Layer
//!
//! Business logic sits here; gateway handlers stay thin HTTP adapters that
//! delegate to [`OrderService`].

pub mod error;
pub mod order;

pub use error::OrderError;
pub use order::{MAX_STAY_DAYS, OrderService, book_days, check_availability, is_valid_order};
