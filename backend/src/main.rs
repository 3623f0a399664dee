//! Orders service entry point: bootstraps the schema, then serves HTTP.

use std::io;

use actix_web::web;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use orders_backend::domain::ports::SchemaInitializer;
use orders_backend::inbound::http::health::HealthState;
use orders_backend::outbound::persistence::{DbPool, DieselSchemaBootstrap, PoolConfig};
use orders_backend::server::{ServerConfig, create_server};
use orders_backend::settings::AppSettings;
use ortho_config::OrthoConfig;

fn fatal(context: &str, err: impl std::fmt::Display) -> io::Error {
    io::Error::other(format!("{context}: {err}"))
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load().map_err(|err| fatal("failed to load settings", err))?;
    let database_url = settings
        .database_url()
        .map_err(|err| fatal("invalid database settings", err))?;
    let bind_addr = settings
        .listen_addr()
        .map_err(|err| fatal("invalid listen address", err))?;
    let pool_size = settings
        .pool_max_size()
        .map_err(|err| fatal("invalid pool size", err))?;

    DieselSchemaBootstrap::new(database_url.clone())
        .ensure_schema()
        .await
        .map_err(|err| fatal("schema initialization failed", err))?;

    let pool = DbPool::new(PoolConfig::new(database_url).with_max_size(pool_size))
        .await
        .map_err(|err| fatal("failed to build connection pool", err))?;

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(
        health_state.clone(),
        ServerConfig::new(bind_addr).with_db_pool(pool),
    )?;
    health_state.mark_ready();
    info!(%bind_addr, "orders service listening");

    let drain_state = health_state.clone();
    actix_web::rt::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("shutdown requested; draining");
            drain_state.mark_draining();
        }
    });

    server.await
}
