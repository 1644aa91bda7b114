use crate::service::OrderService;

/// Gateway application state (shared)
#[derive(Clone)]
pub struct AppState {
    /// Booking logic over the shared ledger
    pub orders: OrderService,
}

impl AppState {
    pub fn new(orders: OrderService) -> Self {
        Self { orders }
    }
}
