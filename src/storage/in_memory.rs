//! In-memory ledger
//!
//! One reader/writer lock guards orders and availability together.
//! Readers get cloned snapshots, so nothing they hold changes under them.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use tracing::{debug, info};

use super::{AvailabilityUpdate, Storage, StorageError, ensure_unique};
use crate::models::{Order, RoomAvailability};

#[derive(Debug, Default)]
struct Ledger {
    orders: Vec<Order>,
    availability: Vec<RoomAvailability>,
}

/// Process-local ledger
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    ledger: RwLock<Ledger>,
}

impl InMemoryStorage {
    /// Empty ledger: no inventory, no orders.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ledger provisioned with `records`.
    ///
    /// Fails if two records share a (hotel, room, day) key.
    pub fn with_availability(records: Vec<RoomAvailability>) -> Result<Self, StorageError> {
        ensure_unique(&records)?;
        Ok(Self {
            ledger: RwLock::new(Ledger {
                orders: Vec::new(),
                availability: records,
            }),
        })
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Ledger>, StorageError> {
        self.ledger.read().map_err(|_| StorageError::Poisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Ledger>, StorageError> {
        self.ledger.write().map_err(|_| StorageError::Poisoned)
    }
}

#[async_trait]
impl Storage for InMemoryStorage {
    async fn create_order(&self, order: Order) -> Result<(), StorageError> {
        let mut ledger = self.write()?;
        info!(
            hotel_id = %order.hotel_id,
            room_id = %order.room_id,
            email = %order.email,
            from = %order.from,
            to = %order.to,
            "order recorded"
        );
        ledger.orders.push(order);
        Ok(())
    }

    async fn get_orders(&self) -> Result<Vec<Order>, StorageError> {
        Ok(self.read()?.orders.clone())
    }

    async fn get_availability(&self) -> Result<Vec<RoomAvailability>, StorageError> {
        Ok(self.read()?.availability.clone())
    }

    async fn update_availability(
        &self,
        records: Vec<RoomAvailability>,
    ) -> Result<(), StorageError> {
        ensure_unique(&records)?;
        let mut ledger = self.write()?;
        debug!(records = records.len(), "availability replaced");
        ledger.availability = records;
        Ok(())
    }

    async fn modify_availability(&self, apply: AvailabilityUpdate<'_>) -> Result<(), StorageError> {
        let mut ledger = self.write()?;
        // Work on a copy so a failed update leaves no trace.
        let mut scratch = ledger.availability.clone();
        apply(&mut scratch)?;
        ensure_unique(&scratch)?;
        ledger.availability = scratch;
        Ok(())
    }
}
