//! Driving port for reading orders.

use async_trait::async_trait;

use crate::domain::{Error, Order};

/// Domain use-case port for listing orders.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrdersQuery: Send + Sync {
    /// Return every order, ordered by identifier ascending.
    async fn list_orders(&self) -> Result<Vec<Order>, Error>;
}
