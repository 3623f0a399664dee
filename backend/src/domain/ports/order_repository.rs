//! Port abstraction for order persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{NewOrder, Order, OrderId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by order repository adapters.
    pub enum OrderRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "order repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "order repository query failed: {message}",
    }
}

impl OrderRepositoryError {
    /// Underlying store message without the repository prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::Connection { message } | Self::Query { message } => message,
        }
    }
}

/// Persistence contract for orders.
///
/// Each call is a single statement; there is no transaction spanning calls.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Persist one order and return the identifier assigned by the store.
    async fn insert(&self, order: &NewOrder) -> Result<OrderId, OrderRepositoryError>;

    /// Return every persisted order, ordered by identifier ascending.
    async fn list_all(&self) -> Result<Vec<Order>, OrderRepositoryError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(OrderRepositoryError::connection("refused"), "order repository connection failed: refused")]
    #[case(OrderRepositoryError::query("syntax error"), "order repository query failed: syntax error")]
    fn errors_prefix_display(#[case] err: OrderRepositoryError, #[case] expected: &str) {
        assert_eq!(err.to_string(), expected);
    }

    #[rstest]
    fn message_strips_prefix() {
        let err = OrderRepositoryError::query("relation \"orders\" does not exist");
        assert_eq!(err.message(), "relation \"orders\" does not exist");
    }
}
