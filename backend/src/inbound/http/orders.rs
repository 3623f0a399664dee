//! Order endpoints.
//!
//! ```text
//! GET  /orders   list every stored order
//! POST /orders   validate and insert one order
//! ```

use actix_web::{HttpResponse, get, post, web};

use crate::domain::OrderDraft;
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::orders_dto::{CreateOrderRequest, CreateOrderResponse, OrderResponse};
use crate::inbound::http::state::HttpState;

/// List all orders in ascending `order_id` order.
#[utoipa::path(
    get,
    path = "/orders",
    responses(
        (status = 200, description = "All stored orders", body = [OrderResponse]),
        (status = 500, description = "Store unavailable", body = ErrorBody)
    ),
    tags = ["orders"],
    operation_id = "listOrders"
)]
#[get("/orders")]
pub async fn list_orders(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<OrderResponse>>> {
    let orders = state.orders_query.list_orders().await?;
    Ok(web::Json(orders.iter().map(OrderResponse::from).collect()))
}

/// Insert a single order.
#[utoipa::path(
    post,
    path = "/orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order stored", body = CreateOrderResponse),
        (status = 400, description = "Missing or invalid fields", body = ErrorBody),
        (status = 500, description = "Store unavailable", body = ErrorBody)
    ),
    tags = ["orders"],
    operation_id = "createOrder"
)]
#[post("/orders")]
pub async fn create_order(
    state: web::Data<HttpState>,
    payload: web::Json<CreateOrderRequest>,
) -> ApiResult<HttpResponse> {
    let draft = OrderDraft::from(payload.into_inner());
    let order_id = state.orders.create_order(draft).await?;
    Ok(HttpResponse::Created().json(CreateOrderResponse::from(order_id)))
}
