use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, de};
use tracing_subscriber::EnvFilter;

/// Filter used when neither `RUST_LOG` nor `tracing.filters` say otherwise.
const DEFAULT_FILTER: &str = "student_records=info,tower_http=info,warn";

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct TracingConfig
{
	/// Install a tracing subscriber at all.
	#[serde(default = "default_true")]
	pub enable: bool,

	/// Filter directives applied on top of `RUST_LOG`.
	pub filters: Vec<Filter>,

	pub stderr: StderrConfig,
	pub files: FilesConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct StderrConfig
{
	#[serde(default = "default_true")]
	pub enable: bool,

	/// Emit ANSI escape codes for colors and other formatting.
	#[serde(default = "default_true")]
	pub ansi: bool,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct FilesConfig
{
	pub enable: bool,

	/// Directory to store (daily rotated, JSON formatted) log files in.
	#[serde(default = "default_files_directory")]
	pub directory: Box<Path>,
}

/// A filter directive.
#[derive(Debug)]
pub struct Filter(pub tracing_subscriber::filter::Directive);

impl TracingConfig
{
	/// Constructs an [`EnvFilter`] from `RUST_LOG` and the directives in the config.
	pub fn env_filter(&self) -> EnvFilter
	{
		let base = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

		self.filters
			.iter()
			.map(|Filter(directive)| directive.clone())
			.fold(base, EnvFilter::add_directive)
	}
}

impl Default for TracingConfig
{
	fn default() -> Self
	{
		Self {
			enable: true,
			filters: Vec::new(),
			stderr: StderrConfig::default(),
			files: FilesConfig::default(),
		}
	}
}

impl Default for StderrConfig
{
	fn default() -> Self
	{
		Self { enable: true, ansi: true }
	}
}

impl Default for FilesConfig
{
	fn default() -> Self
	{
		Self { enable: false, directory: default_files_directory() }
	}
}

impl<'de> Deserialize<'de> for Filter
{
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		String::deserialize(deserializer)?
			.parse()
			.map(Self)
			.map_err(de::Error::custom)
	}
}

fn default_true() -> bool
{
	true
}

fn default_files_directory() -> Box<Path>
{
	PathBuf::from("./logs").into_boxed_path()
}
