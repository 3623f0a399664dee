//! Generate synthetic orders and insert them through the order repository.
//!
//! Database settings come from `ORDERS_*` environment variables or the
//! configuration file. The batch itself is shaped by command-line flags.
//!
//! ```sh
//! ORDERS_DBNAME=orders ORDERS_USER=app ORDERS_PASSWORD=secret \
//! ORDERS_HOST=localhost ORDERS_PORT=5432 \
//!     cargo run --bin seed-orders -- --count 250 --seed 42
//! ```
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::ffi::OsString;
use std::io;
use std::sync::Arc;

use clap::Parser;
use ortho_config::OrthoConfig;
use example_orders::{DEFAULT_ORDER_COUNT, OrderBatchSpec};
use tokio::runtime::Builder;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use orders_backend::domain::OrderSeeder;
use orders_backend::domain::ports::SchemaInitializer;
use orders_backend::outbound::persistence::{
    DbPool, DieselOrderRepository, DieselSchemaBootstrap, PoolConfig,
};
use orders_backend::settings::AppSettings;

/// `seed-orders` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "seed-orders",
    about = "Insert a batch of synthetic orders into the orders table",
    version
)]
struct CliArgs {
    /// Number of orders to generate.
    #[arg(long, value_name = "n", default_value_t = DEFAULT_ORDER_COUNT)]
    count: usize,
    /// RNG seed; a random one is drawn and logged when omitted.
    #[arg(long, value_name = "u64")]
    seed: Option<u64>,
}

fn main() -> io::Result<()> {
    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|error| io::Error::other(format!("create Tokio runtime: {error}")))?;
    runtime.block_on(async_main())
}

async fn async_main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let args = CliArgs::try_parse().unwrap_or_else(|error| error.exit());
    let settings = AppSettings::load_from_iter([OsString::from("seed-orders")])
        .map_err(|error| io::Error::other(format!("load settings: {error}")))?;
    let database_url = settings
        .database_url()
        .map_err(|error| io::Error::other(format!("invalid database settings: {error}")))?;

    DieselSchemaBootstrap::new(database_url.clone())
        .ensure_schema()
        .await
        .map_err(|error| io::Error::other(format!("schema initialization failed: {error}")))?;

    let pool = DbPool::new(PoolConfig::new(database_url).with_max_size(1))
        .await
        .map_err(|error| io::Error::other(format!("create database pool: {error}")))?;

    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed, count = args.count, "seeding orders");

    let spec = OrderBatchSpec::default().with_count(args.count);
    let seeder = OrderSeeder::new(Arc::new(DieselOrderRepository::new(pool)));
    let outcome = seeder
        .seed(&spec, seed)
        .await
        .map_err(|error| io::Error::other(format!("seeding failed: {error}")))?;

    let first = outcome.order_ids.first().map(|id| id.get());
    let last = outcome.order_ids.last().map(|id| id.get());
    info!(
        seed = outcome.seed,
        inserted = outcome.order_ids.len(),
        ?first,
        ?last,
        "seeding complete"
    );
    Ok(())
}
