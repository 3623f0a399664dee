//! Driving port for order creation.
//!
//! Inbound adapters hand over the client's loosely typed input; the domain
//! decides what is missing or invalid.

use async_trait::async_trait;

use crate::domain::{Error, OrderDraft, OrderId};

/// Domain use-case port for creating orders.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrdersCommand: Send + Sync {
    /// Validate the draft and persist it, returning the new identifier.
    ///
    /// Validation failures surface as [`crate::domain::ErrorCode::InvalidRequest`]
    /// and never reach the store.
    async fn create_order(&self, draft: OrderDraft) -> Result<OrderId, Error>;
}
