//! Synthetic order seeding orchestration.
//!
//! Converts generated example orders into validated domain orders, then
//! inserts them one at a time through the order repository port. There is no
//! batch transaction: a failure part-way through leaves the earlier rows in
//! place and reports how many were written.

use std::sync::Arc;

use example_orders::{
    ExampleOrderSeed, GenerationError, OrderBatchSpec, StatusSeed, generate_example_orders,
};
use thiserror::Error;
use tracing::{debug, info};

use crate::domain::ports::{OrderRepository, OrderRepositoryError};
use crate::domain::{Amount, CustomerId, NewOrder, OrderId, OrderStatus, OrderValidationError};

/// Result of a completed seeding run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSeedOutcome {
    /// RNG seed the batch was generated from.
    pub seed: u64,
    /// Identifiers assigned to the inserted orders, in insertion order.
    pub order_ids: Vec<OrderId>,
}

/// Errors raised while generating or persisting seed orders.
#[derive(Debug, Error)]
pub enum OrderSeedingError {
    /// Order generation failed.
    #[error("example order generation failed: {0}")]
    Generation(#[from] GenerationError),
    /// A generated order failed domain validation.
    #[error("generated order failed validation: {0}")]
    InvalidOrder(#[from] OrderValidationError),
    /// Persistence failed after `inserted` orders were written.
    #[error("order seeding stopped after {inserted} inserted orders: {source}")]
    Persistence {
        inserted: usize,
        #[source]
        source: OrderRepositoryError,
    },
}

/// Service that generates and persists synthetic orders.
#[derive(Clone)]
pub struct OrderSeeder<R> {
    order_repo: Arc<R>,
}

impl<R> OrderSeeder<R> {
    /// Create a new seeder with the given persistence adapter.
    pub fn new(order_repo: Arc<R>) -> Self {
        Self { order_repo }
    }
}

impl<R> OrderSeeder<R>
where
    R: OrderRepository,
{
    /// Generate a batch from `spec` and `seed`, then insert every order.
    ///
    /// # Errors
    ///
    /// Returns [`OrderSeedingError`] if generation, validation, or any insert
    /// fails. Validation runs over the whole batch before the first insert.
    pub async fn seed(
        &self,
        spec: &OrderBatchSpec,
        seed: u64,
    ) -> Result<OrderSeedOutcome, OrderSeedingError> {
        let orders = generate_example_orders(spec, seed)?
            .into_iter()
            .map(convert_seed_order)
            .collect::<Result<Vec<_>, _>>()?;
        debug!(seed, count = orders.len(), "generated example orders");

        let mut order_ids = Vec::with_capacity(orders.len());
        for order in &orders {
            let order_id =
                self.order_repo
                    .insert(order)
                    .await
                    .map_err(|source| OrderSeedingError::Persistence {
                        inserted: order_ids.len(),
                        source,
                    })?;
            order_ids.push(order_id);
        }

        info!(seed, inserted = order_ids.len(), "example orders seeded");
        Ok(OrderSeedOutcome { seed, order_ids })
    }
}

fn convert_seed_order(seed_order: ExampleOrderSeed) -> Result<NewOrder, OrderValidationError> {
    Ok(NewOrder::new(
        CustomerId::new(seed_order.customer_id)?,
        seed_order.order_date,
        Amount::new(seed_order.amount)?,
        map_status(seed_order.status),
    ))
}

fn map_status(status: StatusSeed) -> OrderStatus {
    match status {
        StatusSeed::Pending => OrderStatus::Pending,
        StatusSeed::Shipped => OrderStatus::Shipped,
        StatusSeed::Delivered => OrderStatus::Delivered,
        StatusSeed::Cancelled => OrderStatus::Cancelled,
        StatusSeed::Returned => OrderStatus::Returned,
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for order seeding orchestration.

    use std::sync::atomic::{AtomicI32, Ordering};

    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    use super::*;
    use crate::domain::ports::MockOrderRepository;
    use rstest::rstest;

    fn counting_repo(expected_calls: usize) -> MockOrderRepository {
        let next_id = Arc::new(AtomicI32::new(1));
        let mut repo = MockOrderRepository::new();
        repo.expect_insert()
            .times(expected_calls)
            .returning(move |_| Ok(OrderId::new(next_id.fetch_add(1, Ordering::SeqCst))));
        repo
    }

    #[rstest]
    #[tokio::test]
    async fn seed_inserts_every_generated_order() {
        let seeder = OrderSeeder::new(Arc::new(counting_repo(100)));

        let outcome = seeder
            .seed(&OrderBatchSpec::default(), 42)
            .await
            .expect("seed succeeds");

        assert_eq!(outcome.seed, 42);
        assert_eq!(outcome.order_ids.len(), 100);
        assert_eq!(outcome.order_ids.first(), Some(&OrderId::new(1)));
        assert_eq!(outcome.order_ids.last(), Some(&OrderId::new(100)));
    }

    #[rstest]
    #[tokio::test]
    async fn empty_batch_touches_nothing() {
        let seeder = OrderSeeder::new(Arc::new(counting_repo(0)));

        let outcome = seeder
            .seed(&OrderBatchSpec::default().with_count(0), 1)
            .await
            .expect("seed succeeds");

        assert!(outcome.order_ids.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn persistence_failure_reports_inserted_count() {
        let calls = Arc::new(AtomicI32::new(0));
        let mut repo = MockOrderRepository::new();
        repo.expect_insert().times(3).returning(move |_| {
            let call = calls.fetch_add(1, Ordering::SeqCst);
            if call < 2 {
                Ok(OrderId::new(call + 1))
            } else {
                Err(OrderRepositoryError::connection("server closed the connection"))
            }
        });

        let seeder = OrderSeeder::new(Arc::new(repo));
        let error = seeder
            .seed(&OrderBatchSpec::default().with_count(5), 7)
            .await
            .expect_err("third insert fails");

        assert!(matches!(
            error,
            OrderSeedingError::Persistence { inserted: 2, .. }
        ));
    }

    #[rstest]
    fn convert_seed_order_rejects_non_positive_customer() {
        let seed_order = ExampleOrderSeed {
            customer_id: 0,
            order_date: NaiveDate::from_ymd_opt(2023, 1, 1).expect("valid date"),
            amount: Decimal::new(1_000, 2),
            status: StatusSeed::Pending,
        };

        let result = convert_seed_order(seed_order);
        assert!(matches!(
            result,
            Err(OrderValidationError::InvalidCustomerId { .. })
        ));
    }

    #[rstest]
    fn status_mapping_preserves_names() {
        for status in StatusSeed::ALL {
            assert_eq!(map_status(status).as_str(), status.as_str());
        }
    }
}
