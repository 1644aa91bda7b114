//! Order-related handlers (create, list) and inventory snapshot

use std::sync::Arc;

use axum::{Json, extract::State, extract::rejection::JsonRejection};

use super::super::state::AppState;
use super::super::types::{ApiError, ApiResult, created, ok};
use crate::models::{Order, RoomAvailability};
use crate::service::OrderError;

/// Create order endpoint
///
/// POST /orders
#[utoipa::path(
    post,
    path = "/orders",
    request_body = Order,
    responses(
        (status = 201, description = "Order booked, echoed back", body = Order),
        (status = 400, description = "Invalid order or room not available"),
        (status = 500, description = "Booking status unknown")
    ),
    tag = "Orders"
)]
pub async fn create_order(
    State(state): State<Arc<AppState>>,
    body: Result<Json<Order>, JsonRejection>,
) -> ApiResult<Order> {
    let Json(order) = body?;

    match state.orders.create_order(order).await {
        Ok(order) => {
            tracing::info!("order successfully created: {:?}", order);
            created(order)
        }
        Err(e @ OrderError::Internal { .. }) => {
            tracing::error!("error on order creation: {}", e);
            ApiError::from(e).into_err()
        }
        Err(e) => ApiError::from(e).into_err(),
    }
}

/// List orders endpoint
///
/// GET /orders
#[utoipa::path(
    get,
    path = "/orders",
    responses(
        (status = 200, description = "Confirmed orders", body = Vec<Order>),
        (status = 500, description = "Ledger unavailable")
    ),
    tag = "Orders"
)]
pub async fn get_orders(State(state): State<Arc<AppState>>) -> ApiResult<Vec<Order>> {
    let orders = state.orders.orders().await.map_err(|e| {
        tracing::error!("error on order listing: {}", e);
        ApiError::internal("error on order listing")
    })?;
    ok(orders)
}

/// Inventory snapshot endpoint
///
/// GET /availability
#[utoipa::path(
    get,
    path = "/availability",
    responses(
        (status = 200, description = "Remaining quota per hotel, room and day", body = Vec<RoomAvailability>),
        (status = 500, description = "Ledger unavailable")
    ),
    tag = "Orders"
)]
pub async fn get_availability(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Vec<RoomAvailability>> {
    let records = state.orders.availability().await.map_err(|e| {
        tracing::error!("error on availability read: {}", e);
        ApiError::internal("error on availability read")
    })?;
    ok(records)
}
