//! End-to-end booking flow through the public library API.

use std::sync::Arc;

use chrono::NaiveDate;
use hotel_orders::days;
use hotel_orders::{InMemoryStorage, Order, OrderError, OrderService, RoomAvailability, Storage};

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// The stock inventory: one lux room 01-01..01-04, sold out on 01-05.
fn seeded() -> Arc<InMemoryStorage> {
    let mut records: Vec<RoomAvailability> = (1..=4)
        .map(|d| RoomAvailability::new("reddison", "lux", ymd(2024, 1, d), 1))
        .collect();
    records.push(RoomAvailability::new("reddison", "lux", ymd(2024, 1, 5), 0));
    Arc::new(InMemoryStorage::with_availability(records).unwrap())
}

fn booking(email: &str, from: u32, to: u32) -> Order {
    Order::new(
        "reddison",
        "lux",
        email,
        days::date(2024, 1, from),
        days::date(2024, 1, to),
    )
}

fn quotas(records: &[RoomAvailability]) -> Vec<u32> {
    records.iter().map(|r| r.quota).collect()
}

#[tokio::test]
async fn qa_back_to_back_stays_share_no_night() {
    let storage = seeded();
    let svc = OrderService::new(storage.clone());

    // Check-out day of the first stay is check-in day of the second
    svc.create_order(booking("a@example.com", 1, 3)).await.unwrap();
    svc.create_order(booking("b@example.com", 3, 5)).await.unwrap();

    assert_eq!(quotas(&storage.get_availability().await.unwrap()), vec![0, 0, 0, 0, 0]);
    assert_eq!(svc.orders().await.unwrap().len(), 2);
}

#[tokio::test]
async fn qa_overlap_is_rejected_without_partial_booking() {
    let storage = seeded();
    let svc = OrderService::new(storage.clone());

    svc.create_order(booking("a@example.com", 2, 3)).await.unwrap();

    // 01-01 is free but 01-02 is gone: nothing may be taken
    let res = svc.create_order(booking("b@example.com", 1, 3)).await;
    assert_eq!(res, Err(OrderError::RoomNotAvailable));
    assert_eq!(quotas(&storage.get_availability().await.unwrap()), vec![1, 0, 1, 1, 0]);
    assert_eq!(svc.orders().await.unwrap().len(), 1);
}

#[tokio::test]
async fn qa_range_into_sold_out_day_fails() {
    let svc = OrderService::new(seeded());
    let res = svc.create_order(booking("a@example.com", 4, 6)).await;
    assert_eq!(res, Err(OrderError::RoomNotAvailable));
}

#[tokio::test]
async fn qa_unknown_hotel_is_not_available() {
    let svc = OrderService::new(seeded());
    let mut order = booking("a@example.com", 1, 2);
    order.hotel_id = "hilton".into();
    assert_eq!(svc.create_order(order).await, Err(OrderError::RoomNotAvailable));
}

#[tokio::test]
async fn qa_invalid_order_leaves_ledger_alone() {
    let storage = seeded();
    let svc = OrderService::new(storage.clone());
    let before = storage.get_availability().await.unwrap();

    let res = svc.create_order(booking("", 1, 2)).await;
    assert_eq!(res, Err(OrderError::Validation));
    assert_eq!(storage.get_availability().await.unwrap(), before);
    assert!(storage.get_orders().await.unwrap().is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn qa_concurrent_bookings_never_oversell() {
    let storage = seeded();
    let svc = OrderService::new(storage.clone());

    let handles: Vec<_> = (0..64)
        .map(|i| {
            let svc = svc.clone();
            tokio::spawn(async move {
                // Everyone wants 01-02; half also want 01-03
                let to = if i % 2 == 0 { 3 } else { 4 };
                svc.create_order(booking(&format!("guest{}@example.com", i), 2, to))
                    .await
            })
        })
        .collect();

    let mut booked = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => booked += 1,
            Err(e) => assert_eq!(e, OrderError::RoomNotAvailable),
        }
    }

    assert_eq!(booked, 1);
    let after = storage.get_availability().await.unwrap();
    assert_eq!(after[1].quota, 0);
    assert_eq!(storage.get_orders().await.unwrap().len(), 1);
}
