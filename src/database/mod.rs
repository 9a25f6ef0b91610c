//! Database connection management.
//!
//! The connection pool is created once at startup by [`connect()`], handed to the store that
//! owns it, and closed when the server shuts down.

use std::num::NonZero;
use std::thread;

use sqlx::migrate::Migrator;

use crate::config::DatabaseConfig;

mod error;
pub use error::{StoreError, StoreResult};

pub type DB = sqlx::MySql;
pub type Pool = sqlx::Pool<DB>;

/// Schema migrations embedded into the binary.
pub static MIGRATIONS: Migrator = sqlx::migrate!("./database/migrations");

/// Opens a connection pool to the database described by `config`.
///
/// `min-connections` connections are opened immediately. If `max-connections` is not set, the
/// number of available CPU cores is used instead.
#[tracing::instrument(skip_all, fields(database.host = config.url.host_str()), err)]
pub async fn connect(config: &DatabaseConfig) -> StoreResult<Pool>
{
	let max_connections = config
		.max_connections
		.map_or_else(get_core_count, NonZero::get)
		.max(config.min_connections);

	let pool = sqlx::pool::PoolOptions::<DB>::new()
		.min_connections(config.min_connections)
		.max_connections(max_connections)
		.connect(config.url.as_str())
		.await?;

	tracing::info!(min_connections = config.min_connections, max_connections, "connected to database");

	Ok(pool)
}

/// Brings the database schema up to date.
#[tracing::instrument(skip_all, err)]
pub async fn migrate(pool: &Pool) -> Result<(), sqlx::migrate::MigrateError>
{
	MIGRATIONS.run(pool).await
}

fn get_core_count() -> u32
{
	thread::available_parallelism()
		.map_or(1, NonZero::get)
		.try_into()
		.unwrap_or(u32::MAX)
}
