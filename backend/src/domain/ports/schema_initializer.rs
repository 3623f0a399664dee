//! Port for ensuring the order schema exists before the store is used.

use async_trait::async_trait;

use super::define_port_error;

define_port_error! {
    /// Failures raised while preparing the persistent schema.
    pub enum SchemaInitializationError {
        /// The store could not be reached.
        Connection { message: String } => "schema initialisation could not connect: {message}",
        /// Applying the schema failed.
        Migration { message: String } => "schema migration failed: {message}",
    }
}

/// Ensures the tables required by the order store exist.
///
/// Implementations must be idempotent: repeated calls succeed without
/// touching existing data.
#[async_trait]
pub trait SchemaInitializer: Send + Sync {
    /// Create any missing schema objects.
    async fn ensure_schema(&self) -> Result<(), SchemaInitializationError>;
}
