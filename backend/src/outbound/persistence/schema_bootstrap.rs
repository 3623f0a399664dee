//! Schema bootstrap backed by embedded Diesel migrations.
//!
//! Migrations are compiled into the binary. Diesel records applied versions
//! in `__diesel_schema_migrations`, so repeat runs are no-ops, and the
//! create statement itself is `IF NOT EXISTS` so a table created before the
//! migration history existed is adopted rather than rejected.

use async_trait::async_trait;
use diesel::{Connection, PgConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::info;

use crate::domain::ports::{SchemaInitializationError, SchemaInitializer};

/// Migrations shipped with the backend.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Applies pending migrations over a dedicated synchronous connection.
#[derive(Clone)]
pub struct DieselSchemaBootstrap {
    database_url: String,
}

impl DieselSchemaBootstrap {
    /// Create a bootstrap for the given database URL.
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
        }
    }
}

/// Apply every pending migration and return the versions that ran.
///
/// # Errors
///
/// Returns [`SchemaInitializationError::Connection`] when the store cannot be
/// reached and [`SchemaInitializationError::Migration`] when a migration fails.
pub fn apply_migrations(database_url: &str) -> Result<Vec<String>, SchemaInitializationError> {
    let mut conn = PgConnection::establish(database_url)
        .map_err(|err| SchemaInitializationError::connection(err.to_string()))?;

    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| SchemaInitializationError::migration(err.to_string()))?;

    Ok(applied.iter().map(ToString::to_string).collect())
}

#[async_trait]
impl SchemaInitializer for DieselSchemaBootstrap {
    async fn ensure_schema(&self) -> Result<(), SchemaInitializationError> {
        let database_url = self.database_url.clone();
        let applied = tokio::task::spawn_blocking(move || apply_migrations(&database_url))
            .await
            .map_err(|err| {
                SchemaInitializationError::migration(format!("migration task failed: {err}"))
            })??;

        if applied.is_empty() {
            info!("order schema already up to date");
        } else {
            info!(versions = ?applied, "applied order schema migrations");
        }
        Ok(())
    }
}
