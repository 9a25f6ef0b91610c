//! Runtime configuration.
//!
//! Configuration is read from a TOML file with kebab-case keys. Every section and every key is
//! optional; missing values fall back to defaults suitable for local development.

#![allow(missing_copy_implementations, reason = "configs won't be copied around")]

use std::path::Path;
use std::{fs, io};

use derive_more::{Display, Error, From};
use serde::Deserialize;

mod database;
mod http;
mod tracing;

pub use self::database::DatabaseConfig;
pub use self::http::HttpConfig;
pub use self::tracing::{FilesConfig, Filter, StderrConfig, TracingConfig};

/// The default location of the configuration file.
pub const DEFAULT_PATH: &str = "./student-records.toml";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct Config
{
	pub http: HttpConfig,
	pub database: DatabaseConfig,
	pub tracing: TracingConfig,
}

#[derive(Debug, Display, Error, From)]
pub enum LoadConfigError
{
	#[display("failed to read configuration file: {_0}")]
	Read(io::Error),

	#[display("failed to parse configuration file: {_0}")]
	Parse(toml::de::Error),
}

impl Config
{
	pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, LoadConfigError>
	{
		let file = fs::read_to_string(path.as_ref())?;
		let config = toml::from_str(&file)?;

		Ok(config)
	}
}

#[cfg(test)]
mod tests
{
	use std::net::SocketAddr;

	use super::*;

	#[test]
	fn empty_file_yields_defaults() -> color_eyre::Result<()>
	{
		let config = toml::from_str::<Config>("")?;

		assert_eq!(config.http.listen_on, SocketAddr::from(([127, 0, 0, 1], 5000)));
		assert_eq!(config.database.url.scheme(), "mysql");
		assert!(config.database.run_migrations);
		assert!(config.tracing.enable);
		assert!(config.tracing.stderr.enable);
		assert!(!config.tracing.files.enable);

		Ok(())
	}

	#[test]
	fn parses_every_section() -> color_eyre::Result<()>
	{
		let config = toml::from_str::<Config>(
			r#"
			[http]
			listen-on = "0.0.0.0:8080"
			allowed-origins = ["https://dashboard.example.org"]

			[database]
			url = "mysql://user:pass@db/records"
			min-connections = 2
			max-connections = 8
			run-migrations = false

			[tracing]
			enable = true
			filters = ["student_records=trace"]

			[tracing.stderr]
			enable = false
			ansi = false

			[tracing.files]
			enable = true
			directory = "/tmp/student-records"
			"#,
		)?;

		assert_eq!(config.http.listen_on.port(), 8080);
		assert_eq!(config.http.allowed_origins().count(), 1);
		assert_eq!(config.database.url.host_str(), Some("db"));
		assert_eq!(config.database.min_connections, 2);
		assert_eq!(config.database.max_connections.map(|max| max.get()), Some(8));
		assert!(!config.database.run_migrations);
		assert_eq!(config.tracing.filters.len(), 1);
		assert!(!config.tracing.stderr.enable);
		assert!(config.tracing.files.enable);

		Ok(())
	}

	#[test]
	fn rejects_unknown_keys()
	{
		assert!(toml::from_str::<Config>("[http]\nlisten = \"0.0.0.0:1\"").is_err());
		assert!(toml::from_str::<Config>("[steam]\napi-key = \"x\"").is_err());
	}

	#[test]
	fn zero_max_connections_means_unset() -> color_eyre::Result<()>
	{
		let config = toml::from_str::<Config>("[database]\nmax-connections = 0")?;

		assert!(config.database.max_connections.is_none());

		Ok(())
	}
}
