//! OpenAPI Documentation
//!
//! Auto-generated OpenAPI 3 document for the booking API.
//!
//! - OpenAPI JSON: `http://localhost:8080/api-docs/openapi.json`

use utoipa::OpenApi;

use crate::gateway::handlers::HealthResponse;
use crate::models::{Order, RoomAvailability};

/// Main API Documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Hotel Orders API",
        version = "0.1.0",
        description = "Books hotel rooms against a per-day inventory ledger.",
        license(
            name = "MIT"
        )
    ),
    servers(
        (url = "http://localhost:8080", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::health_check,
        crate::gateway::handlers::create_order,
        crate::gateway::handlers::get_orders,
        crate::gateway::handlers::get_availability,
    ),
    components(
        schemas(
            HealthResponse,
            Order,
            RoomAvailability,
        )
    ),
    tags(
        (name = "System", description = "Liveness"),
        (name = "Orders", description = "Room booking and inventory"),
    )
)]
pub struct ApiDoc;
