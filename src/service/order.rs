//! Order Service - booking logic over the availability ledger
//!
//! A booking is validated, expanded into its day set, then checked and
//! decremented against the ledger inside one exclusive section. The order
//! itself is appended afterwards.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{error, info};

use super::error::OrderError;
use crate::days;
use crate::models::{Order, RoomAvailability};
use crate::storage::{Storage, StorageError};

/// Order Service - handles all booking business logic
#[derive(Clone)]
pub struct OrderService {
    storage: Arc<dyn Storage>,
}

impl OrderService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// Book `order`, returning it unchanged on success.
    ///
    /// On `OrderError::Internal` the inventory may or may not have been
    /// decremented; callers must not assume the booking exists.
    pub async fn create_order(&self, order: Order) -> Result<Order, OrderError> {
        // 1. Validate
        if !is_valid_order(&order) {
            info!("invalid order data: {:?}", order);
            return Err(OrderError::Validation);
        }

        // 2. Day set
        let days = days::between(order.from, order.to);
        if days.is_empty() {
            info!("order covers no calendar day: {:?}", order);
            return Err(OrderError::RoomNotAvailable);
        }

        // 3 + 4. Check and decrement under one ledger write
        let hotel_id = order.hotel_id.as_str();
        let room_id = order.room_id.as_str();
        let booked = self
            .storage
            .modify_availability(Box::new(|records: &mut [RoomAvailability]| {
                check_availability(records, hotel_id, room_id, &days)?;
                book_days(records, hotel_id, room_id, &days)
            }))
            .await;

        match booked {
            Ok(()) => {}
            Err(StorageError::QuotaExhausted(day)) => {
                info!(
                    "hotel room is not available for selected dates (first gap {}): {:?}",
                    day, order
                );
                return Err(OrderError::RoomNotAvailable);
            }
            Err(e) => {
                error!("failed to book room for {:?}: {}", order, e);
                return Err(OrderError::internal("failed to book room")(e));
            }
        }

        // 5. Persist the order
        if let Err(e) = self.storage.create_order(order.clone()).await {
            error!("inventory taken but order not recorded {:?}: {}", order, e);
            return Err(OrderError::internal("failed to create order")(e));
        }

        Ok(order)
    }

    /// Snapshot of confirmed orders.
    pub async fn orders(&self) -> Result<Vec<Order>, OrderError> {
        self.storage
            .get_orders()
            .await
            .map_err(OrderError::internal("failed to list orders"))
    }

    /// Snapshot of the inventory.
    pub async fn availability(&self) -> Result<Vec<RoomAvailability>, OrderError> {
        self.storage
            .get_availability()
            .await
            .map_err(OrderError::internal("failed to read availability"))
    }
}

/// Longest stay accepted, in calendar days.
pub const MAX_STAY_DAYS: i64 = 366;

/// All strings present, `from` strictly before `to`, and the stay spans at
/// most [`MAX_STAY_DAYS`] calendar days.
pub fn is_valid_order(order: &Order) -> bool {
    !order.hotel_id.is_empty()
        && !order.room_id.is_empty()
        && !order.email.is_empty()
        && order.from < order.to
        && (days::day(order.to) - days::day(order.from)).num_days() <= MAX_STAY_DAYS
}

/// Every day needs a matching record with quota left.
///
/// Returns `QuotaExhausted` with the first day that fails.
pub fn check_availability(
    records: &[RoomAvailability],
    hotel_id: &str,
    room_id: &str,
    days: &[NaiveDate],
) -> Result<(), StorageError> {
    for &day in days {
        let available = records
            .iter()
            .any(|r| r.matches(hotel_id, room_id, day) && r.quota > 0);
        if !available {
            return Err(StorageError::QuotaExhausted(day));
        }
    }
    Ok(())
}

/// Take one unit of quota from each day's record.
///
/// Expects `check_availability` to have passed on the same records; a
/// missing or empty record here is an invariant violation.
pub fn book_days(
    records: &mut [RoomAvailability],
    hotel_id: &str,
    room_id: &str,
    days: &[NaiveDate],
) -> Result<(), StorageError> {
    for &day in days {
        match records.iter_mut().find(|r| r.matches(hotel_id, room_id, day)) {
            Some(rec) if rec.quota > 0 => rec.quota -= 1,
            _ => {
                return Err(StorageError::Invariant(format!(
                    "room not available on {}",
                    day
                )));
            }
        }
    }
    Ok(())
}
