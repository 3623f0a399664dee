//! Deterministic synthetic order generation for seeding and demonstration.
//!
//! The crate turns an [`OrderBatchSpec`] and a 64-bit seed into a batch of
//! [`ExampleOrderSeed`] records. It is deliberately independent of backend
//! domain types; callers convert seeds into their own validated entities
//! before persisting them.
//!
//! # Example
//!
//! ```
//! use example_orders::{OrderBatchSpec, generate_example_orders};
//!
//! let spec = OrderBatchSpec::default().with_count(5);
//! let orders = generate_example_orders(&spec, 42).expect("generation succeeds");
//!
//! assert_eq!(orders.len(), 5);
//! assert_eq!(orders, generate_example_orders(&spec, 42).expect("generation succeeds"));
//! ```

mod batch;
mod error;
mod generator;
mod seed;

pub use batch::{
    DEFAULT_ORDER_COUNT, DEFAULT_MAX_AMOUNT_CENTS, DEFAULT_MAX_CUSTOMER_ID,
    DEFAULT_MIN_AMOUNT_CENTS, DEFAULT_MIN_CUSTOMER_ID, OrderBatchSpec,
};
pub use error::GenerationError;
pub use generator::generate_example_orders;
pub use seed::{ExampleOrderSeed, StatusSeed};
