//! Student Records.
//!
//! This crate implements an HTTP API for listing, adding and deleting student records stored in
//! MySQL, as well as a dashboard client that talks to that API.

/*
 * Student Records
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see https://www.gnu.org/licenses.
 */

use std::io;
use std::net::SocketAddr;

use derive_more::{Display, Error, From};
use tokio::net::TcpListener;

#[cfg(test)]
mod testing;

mod signals;

pub mod config;
pub use config::Config;

pub mod dashboard;
pub mod database;
pub mod http;
pub mod logging;
pub mod openapi;
pub mod services;
pub mod students;

use self::database::StoreError;
use self::services::StudentService;
use self::students::MySqlStudentStore;

#[derive(Debug, Display, Error, From)]
pub enum RunError
{
	#[display("failed to connect to database: {_0}")]
	Connect(StoreError),

	#[display("failed to run migrations: {_0}")]
	Migrate(sqlx::migrate::MigrateError),

	#[display("failed to run HTTP server: {_0}")]
	Io(io::Error),
}

/// Runs the HTTP server until SIGINT is received.
///
/// The database pool is opened before the server starts listening and closed after it has
/// stopped.
#[tracing::instrument(skip_all, err)]
pub async fn run(config: Config) -> Result<(), RunError>
{
	let pool = database::connect(&config.database).await?;

	if config.database.run_migrations {
		database::migrate(&pool).await?;
	}

	let store = MySqlStudentStore::new(pool);
	let student_service = StudentService::new(store.clone());
	let router = http::router(student_service, config.http.allowed_origins());

	let result = serve(router, config.http.listen_on).await;

	tracing::info!("closing database connections");
	store.close().await;

	result
}

async fn serve(router: axum::Router, addr: SocketAddr) -> Result<(), RunError>
{
	let listener = TcpListener::bind(addr).await?;
	let local_addr = listener.local_addr()?;

	tracing::info!(addr = %local_addr, "listening for requests");

	axum::serve(listener, router.into_make_service_with_connect_info::<SocketAddr>())
		.with_graceful_shutdown(signals::sigint())
		.await?;

	tracing::info!("server shut down");

	Ok(())
}
