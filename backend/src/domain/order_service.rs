//! Order domain service.
//!
//! `OrderService` implements both order driving ports on top of an
//! [`OrderRepository`]. Validation happens here, before any store call;
//! store failures are returned with their underlying message intact.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error, info};

use crate::domain::ports::{OrderRepository, OrderRepositoryError, OrdersCommand, OrdersQuery};
use crate::domain::{Error, NewOrder, Order, OrderDraft, OrderId, OrderValidationError};

fn map_repository_error(err: OrderRepositoryError) -> Error {
    error!(error = %err, "order repository call failed");
    Error::internal(err.message())
}

fn map_validation_error(err: OrderValidationError) -> Error {
    match &err {
        OrderValidationError::MissingFields { fields } => {
            debug!(?fields, "order rejected: missing fields");
        }
        other => debug!(
            field = other.field(),
            code = other.code(),
            "order rejected: invalid field"
        ),
    }
    err.into()
}

/// Order service implementing the create and list use-cases.
#[derive(Clone)]
pub struct OrderService<R> {
    order_repo: Arc<R>,
}

impl<R> OrderService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(order_repo: Arc<R>) -> Self {
        Self { order_repo }
    }
}

#[async_trait]
impl<R> OrdersCommand for OrderService<R>
where
    R: OrderRepository,
{
    async fn create_order(&self, draft: OrderDraft) -> Result<OrderId, Error> {
        let order = NewOrder::try_from(draft).map_err(map_validation_error)?;

        let order_id = self
            .order_repo
            .insert(&order)
            .await
            .map_err(map_repository_error)?;

        info!(
            order_id = order_id.get(),
            customer_id = order.customer_id().get(),
            status = %order.status(),
            "order created"
        );
        Ok(order_id)
    }
}

#[async_trait]
impl<R> OrdersQuery for OrderService<R>
where
    R: OrderRepository,
{
    async fn list_orders(&self) -> Result<Vec<Order>, Error> {
        self.order_repo
            .list_all()
            .await
            .map_err(map_repository_error)
    }
}

#[cfg(test)]
#[path = "order_service_tests.rs"]
mod tests;
