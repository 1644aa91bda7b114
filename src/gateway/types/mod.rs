//! Gateway types module
//!
//! Response envelope, error type and error codes shared by the handlers.
//! Request bodies deserialize straight into [`crate::models::Order`].

pub mod response;

pub use response::{ApiError, ApiResponse, ApiResult, created, error_codes, ok};
