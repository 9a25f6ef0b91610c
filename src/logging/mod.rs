//! Installation of the global [`tracing`] subscriber.
//!
//! Output can go to stderr (human readable) and to daily rotated log files (JSON), each of which
//! is toggled individually in the [`TracingConfig`].

use std::io;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::Layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::TracingConfig;

mod files;
mod stderr;

/// Installs the global subscriber.
///
/// The returned guard flushes buffered file output when dropped, so it has to be kept alive
/// for as long as the program is running.
pub fn init(config: &TracingConfig) -> io::Result<Option<WorkerGuard>>
{
	if !config.enable {
		return Ok(None);
	}

	let stderr = stderr::layer(&config.stderr);
	let (files, guard) = files::layer(&config.files)?.unzip();
	let layer = Layer::and_then(stderr, files);

	tracing_subscriber::registry()
		.with(layer.with_filter(config.env_filter()))
		.try_init()
		.map_err(io::Error::other)?;

	tracing::info!("initialized tracing");

	Ok(guard)
}
