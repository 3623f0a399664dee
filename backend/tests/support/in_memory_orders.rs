//! In-memory `OrderRepository` for HTTP behaviour tests.
//!
//! Identifiers are assigned sequentially from 1. A configured failure makes
//! every call return a connection error carrying that message.

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use orders_backend::domain::ports::{OrderRepository, OrderRepositoryError};
use orders_backend::domain::{NewOrder, Order, OrderId};

#[derive(Default)]
struct State {
    orders: Vec<Order>,
    failure: Option<String>,
}

#[derive(Clone, Default)]
pub struct InMemoryOrders {
    state: Arc<Mutex<State>>,
}

impl InMemoryOrders {
    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|err| err.into_inner())
    }

    pub fn fail_with(&self, message: impl Into<String>) {
        self.lock().failure = Some(message.into());
    }

    pub fn len(&self) -> usize {
        self.lock().orders.len()
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrders {
    async fn insert(&self, order: &NewOrder) -> Result<OrderId, OrderRepositoryError> {
        let mut state = self.lock();
        if let Some(message) = &state.failure {
            return Err(OrderRepositoryError::connection(message.clone()));
        }
        let next = i32::try_from(state.orders.len() + 1)
            .map_err(|_| OrderRepositoryError::query("order id space exhausted"))?;
        let order_id = OrderId::new(next);
        state.orders.push(Order::new(order_id, order.clone()));
        Ok(order_id)
    }

    async fn list_all(&self) -> Result<Vec<Order>, OrderRepositoryError> {
        let state = self.lock();
        if let Some(message) = &state.failure {
            return Err(OrderRepositoryError::connection(message.clone()));
        }
        Ok(state.orders.clone())
    }
}
