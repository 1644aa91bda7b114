//! Handler helper functions

use std::time::{SystemTime, UNIX_EPOCH};

/// Get current time in milliseconds
///
/// A clock before the Unix epoch reads as 0.
pub fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
