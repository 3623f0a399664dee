//! PostgreSQL-backed order repository.
//!
//! Each call checks out one pooled connection and issues a single statement.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::warn;

use crate::domain::ports::{OrderRepository, OrderRepositoryError};
use crate::domain::{NewOrder, Order, OrderId};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{NewOrderRow, OrderRow};
use super::pool::{DbPool, PoolError};
use super::schema::orders;

/// Diesel-backed implementation of the order repository port.
#[derive(Clone)]
pub struct DieselOrderRepository {
    pool: DbPool,
}

impl DieselOrderRepository {
    /// Create a new repository with the given connection pool.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use orders_backend::outbound::persistence::{DbPool, DieselOrderRepository, PoolConfig};
    ///
    /// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
    /// let pool = DbPool::new(PoolConfig::new("postgres://localhost/sales")).await?;
    /// let repository = DieselOrderRepository::new(pool);
    /// # let _ = repository;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn pool_error(error: PoolError) -> OrderRepositoryError {
    map_pool_error(error, OrderRepositoryError::connection)
}

fn diesel_error(error: diesel::result::Error) -> OrderRepositoryError {
    map_diesel_error(
        error,
        OrderRepositoryError::query,
        OrderRepositoryError::connection,
    )
}

impl<'a> From<&'a NewOrder> for NewOrderRow<'a> {
    fn from(order: &'a NewOrder) -> Self {
        Self {
            customer_id: order.customer_id().get(),
            order_date: order.order_date(),
            amount: order.amount().as_decimal(),
            status: order.status().as_str(),
        }
    }
}

/// Convert a stored row into a domain order.
///
/// Write-side rules are not re-applied: rows created before they existed
/// are listed as stored, with a warning.
fn row_to_order(row: OrderRow) -> Order {
    let OrderRow {
        order_id,
        customer_id,
        order_date,
        amount,
        status,
    } = row;
    let order = Order::from_stored(
        OrderId::new(order_id),
        customer_id,
        order_date,
        amount,
        status,
    );
    if let Some(err) = order.validation_error() {
        warn!(order_id, error = %err, "stored order breaks current validation rules");
    }
    order
}

#[async_trait]
impl OrderRepository for DieselOrderRepository {
    async fn insert(&self, order: &NewOrder) -> Result<OrderId, OrderRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let row = NewOrderRow::from(order);

        let order_id: i32 = diesel::insert_into(orders::table)
            .values(&row)
            .returning(orders::order_id)
            .get_result(&mut conn)
            .await
            .map_err(diesel_error)?;

        Ok(OrderId::new(order_id))
    }

    async fn list_all(&self) -> Result<Vec<Order>, OrderRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        let rows: Vec<OrderRow> = orders::table
            .select(OrderRow::as_select())
            .order(orders::order_id.asc())
            .load(&mut conn)
            .await
            .map_err(diesel_error)?;

        Ok(rows.into_iter().map(row_to_order).collect())
    }
}
