//! Shared HTTP adapter state.
//!
//! Handlers depend on the driving ports only, so tests can swap in mocks
//! without touching persistence.

use std::sync::Arc;

use crate::domain::ports::{OrdersCommand, OrdersQuery};

/// Dependency bundle passed to HTTP handlers through `web::Data`.
#[derive(Clone)]
pub struct HttpState {
    pub orders: Arc<dyn OrdersCommand>,
    pub orders_query: Arc<dyn OrdersQuery>,
}

impl HttpState {
    /// Construct state from explicit port implementations.
    pub fn new(orders: Arc<dyn OrdersCommand>, orders_query: Arc<dyn OrdersQuery>) -> Self {
        Self {
            orders,
            orders_query,
        }
    }

    /// Use one service for both the command and query ports.
    pub fn from_service<S>(service: Arc<S>) -> Self
    where
        S: OrdersCommand + OrdersQuery + 'static,
    {
        Self {
            orders: service.clone(),
            orders_query: service,
        }
    }
}
