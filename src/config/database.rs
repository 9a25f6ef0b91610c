use std::num::NonZero;

use serde::{Deserialize, Deserializer};
use url::Url;

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct DatabaseConfig
{
	/// Overridden by the `DATABASE_URL` environment variable.
	#[serde(default = "default_url")]
	pub url: Url,

	/// The number of connections to open eagerly and keep around.
	#[serde(default = "default_min_connections")]
	pub min_connections: u32,

	/// Defaults to the number of available CPU cores.
	#[serde(default, deserialize_with = "deserialize_option_u32")]
	pub max_connections: Option<NonZero<u32>>,

	/// Whether to apply pending schema migrations on startup.
	#[serde(default = "default_run_migrations")]
	pub run_migrations: bool,
}

impl Default for DatabaseConfig
{
	fn default() -> Self
	{
		Self {
			url: default_url(),
			min_connections: default_min_connections(),
			max_connections: None,
			run_migrations: default_run_migrations(),
		}
	}
}

fn default_url() -> Url
{
	Url::parse("mysql://root@localhost/student_db").unwrap_or_else(|err| {
		panic!("hard-coded URL should be valid\n{err}");
	})
}

fn default_min_connections() -> u32
{
	1
}

fn default_run_migrations() -> bool
{
	true
}

fn deserialize_option_u32<'de, D>(deserializer: D) -> Result<Option<NonZero<u32>>, D::Error>
where
	D: Deserializer<'de>,
{
	<Option<u32> as Deserialize<'de>>::deserialize(deserializer)
		.map(|maybe_num| maybe_num.and_then(NonZero::new))
}
