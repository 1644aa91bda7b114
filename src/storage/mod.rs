//! Availability Ledger
//!
//! Storage capability consumed by the order service. The ledger holds the
//! per-day room inventory and the list of confirmed orders.
//!
//! Any conforming implementation (in-memory, file-backed, networked) can be
//! handed to [`crate::service::OrderService`] as an `Arc<dyn Storage>`.

pub mod in_memory;

pub use in_memory::InMemoryStorage;

use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;

use crate::models::{Order, RoomAvailability};

/// Ledger errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// A writer panicked while holding the ledger lock.
    #[error("ledger lock poisoned")]
    Poisoned,

    /// Replacement set holds two records for the same (hotel, room, day).
    #[error("duplicate availability record for {hotel_id}/{room_id} on {date}")]
    DuplicateRecord {
        hotel_id: String,
        room_id: String,
        date: NaiveDate,
    },

    /// An atomic availability update refused to commit.
    #[error("room not available on {0}")]
    QuotaExhausted(NaiveDate),

    /// An update found the ledger in a state it should never reach.
    #[error("ledger invariant violated: {0}")]
    Invariant(String),

    /// Failure of a non-memory backend (I/O, network).
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Closure applied by [`Storage::modify_availability`] to the live records.
pub type AvailabilityUpdate<'a> =
    Box<dyn FnOnce(&mut [RoomAvailability]) -> Result<(), StorageError> + Send + 'a>;

/// Storage capability
///
/// All methods MUST be safe to call concurrently.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Append a confirmed order.
    async fn create_order(&self, order: Order) -> Result<(), StorageError>;

    /// Snapshot of confirmed orders.
    async fn get_orders(&self) -> Result<Vec<Order>, StorageError>;

    /// Snapshot of availability records.
    async fn get_availability(&self) -> Result<Vec<RoomAvailability>, StorageError>;

    /// Replace the whole availability collection.
    ///
    /// The caller supplies the complete replacement set; no merging happens.
    async fn update_availability(&self, records: Vec<RoomAvailability>)
    -> Result<(), StorageError>;

    /// Read-modify-write of the availability collection as one atomic step.
    ///
    /// `apply` sees the current records under exclusive access. Changes are
    /// kept only if it returns `Ok` and the result still has unique keys;
    /// otherwise the collection is left exactly as it was and the error is
    /// returned.
    async fn modify_availability(&self, apply: AvailabilityUpdate<'_>) -> Result<(), StorageError>;
}

/// Fails with [`StorageError::DuplicateRecord`] on the first repeated key.
pub fn ensure_unique(records: &[RoomAvailability]) -> Result<(), StorageError> {
    let mut seen = std::collections::HashSet::with_capacity(records.len());
    for rec in records {
        if !seen.insert(rec.key()) {
            return Err(StorageError::DuplicateRecord {
                hotel_id: rec.hotel_id.clone(),
                room_id: rec.room_id.clone(),
                date: rec.date,
            });
        }
    }
    Ok(())
}
