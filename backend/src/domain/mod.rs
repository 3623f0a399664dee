//! Domain primitives, services, and ports.
//!
//! Purpose: define the order entity and its validation, the use-case
//! services that drive it, and the ports adapters plug into. Nothing here
//! depends on HTTP or Diesel.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - Order, NewOrder, OrderDraft and their value types.
//! - OrderService: implements the `OrdersCommand` and `OrdersQuery` ports.
//! - OrderSeeder: generates and persists synthetic orders.

pub mod error;
pub mod order;
pub mod order_seeding;
pub mod order_service;
pub mod ports;
pub mod trace_id;

pub use self::error::{Error, ErrorCode};
pub use self::order::{
    AMOUNT_SCALE, Amount, CustomerId, FIELD_AMOUNT, FIELD_CUSTOMER_ID, FIELD_ORDER_DATE,
    FIELD_STATUS, MISSING_FIELDS_MESSAGE, NewOrder, ORDER_DATE_FORMAT, Order, OrderDraft,
    OrderId, OrderStatus, OrderValidationError, StoredStatus, parse_order_date,
};
pub use self::order_seeding::{OrderSeedOutcome, OrderSeeder, OrderSeedingError};
pub use self::order_service::OrderService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
