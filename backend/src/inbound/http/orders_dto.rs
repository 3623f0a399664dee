//! Request and response shapes for the `/orders` endpoints.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::domain::{ORDER_DATE_FORMAT, Order, OrderDraft, OrderId};

/// Body message returned after a successful insert.
pub const ORDER_CREATED_MESSAGE: &str = "Order added successfully";

/// Incoming order payload.
///
/// Fields are captured as raw JSON so that presence is judged before any
/// type checking. Numbers and strings are both accepted for every field.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateOrderRequest {
    #[serde(default)]
    #[schema(value_type = i32, example = 42)]
    pub customer_id: Option<Value>,
    #[serde(default)]
    #[schema(value_type = String, format = Date, example = "2023-06-01")]
    pub order_date: Option<Value>,
    #[serde(default)]
    #[schema(value_type = String, example = "199.99")]
    pub amount: Option<Value>,
    #[serde(default)]
    #[schema(value_type = String, example = "Pending")]
    pub status: Option<Value>,
}

/// Render a JSON value as the text the domain parses.
///
/// `null` is treated as absent. Non-scalar values keep their JSON text so
/// that validation reports them against the offending field.
fn as_text(value: Option<Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        other => Some(other.to_string()),
    }
}

impl From<CreateOrderRequest> for OrderDraft {
    fn from(request: CreateOrderRequest) -> Self {
        Self {
            customer_id: as_text(request.customer_id),
            order_date: as_text(request.order_date),
            amount: as_text(request.amount),
            status: as_text(request.status),
        }
    }
}

/// One stored order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct OrderResponse {
    #[schema(example = 1)]
    pub order_id: i32,
    #[schema(example = 42)]
    pub customer_id: i32,
    #[schema(format = Date, example = "2023-06-01")]
    pub order_date: String,
    /// Decimal rendered with exactly two fractional digits.
    #[schema(example = "199.99")]
    pub amount: String,
    #[schema(example = "Pending")]
    pub status: String,
}

impl From<&Order> for OrderResponse {
    fn from(order: &Order) -> Self {
        Self {
            order_id: order.id().get(),
            customer_id: order.customer_id().get(),
            order_date: order.order_date().format(ORDER_DATE_FORMAT).to_string(),
            amount: order.amount().to_string(),
            status: order.status().as_str().to_owned(),
        }
    }
}

/// Confirmation body for `POST /orders`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CreateOrderResponse {
    #[schema(example = "Order added successfully")]
    pub message: String,
    #[schema(example = 101)]
    pub order_id: i32,
}

impl From<OrderId> for CreateOrderResponse {
    fn from(order_id: OrderId) -> Self {
        Self {
            message: ORDER_CREATED_MESSAGE.to_owned(),
            order_id: order_id.get(),
        }
    }
}
