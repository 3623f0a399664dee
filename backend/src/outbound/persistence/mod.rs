//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete implementations of the order ports backed by PostgreSQL through
//! `diesel-async` and `bb8` pooling, plus a migration-based schema bootstrap.
//!
//! - **Thin adapters**: repositories only translate between Diesel rows and
//!   domain types.
//! - **Internal models**: row structs (`models.rs`) and table definitions
//!   (`schema.rs`) never leave this module.
//! - **Strongly typed errors**: database failures map to port error enums
//!   carrying the store's own message.

mod diesel_error_mapping;
mod diesel_order_repository;
mod models;
mod pool;
mod schema;
mod schema_bootstrap;

pub use diesel_order_repository::DieselOrderRepository;
pub use pool::{DEFAULT_POOL_MAX_SIZE, DbPool, PoolConfig, PoolError};
pub use schema_bootstrap::{DieselSchemaBootstrap, MIGRATIONS, apply_migrations};
