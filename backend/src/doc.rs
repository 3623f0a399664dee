//! OpenAPI documentation for the orders service.
//!
//! Served by Swagger UI at `/docs` in debug builds and printed by the
//! `openapi-dump` binary.

use utoipa::OpenApi;

use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::orders_dto::{CreateOrderRequest, CreateOrderResponse, OrderResponse};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Orders service API",
        description = "Create and list customer orders backed by PostgreSQL."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::orders::list_orders,
        crate::inbound::http::orders::create_order,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(OrderResponse, CreateOrderRequest, CreateOrderResponse, ErrorBody)),
    tags(
        (name = "orders", description = "Order records"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
