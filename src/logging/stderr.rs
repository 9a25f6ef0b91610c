use std::io;

use tracing_subscriber::Layer;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::registry::LookupSpan;

use crate::config::StderrConfig;

/// Creates a layer that emits human readable logs to stderr.
pub(super) fn layer<S>(config: &StderrConfig) -> Option<impl Layer<S>>
where
	S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
	layer_with_writer(config, io::stderr)
}

fn layer_with_writer<S, W>(config: &StderrConfig, writer: W) -> Option<impl Layer<S>>
where
	S: tracing::Subscriber + for<'a> LookupSpan<'a>,
	W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
	if !config.enable {
		return None;
	}

	let layer = tracing_subscriber::fmt::layer()
		.pretty()
		.with_ansi(config.ansi)
		.with_file(true)
		.with_level(true)
		.with_line_number(true)
		.with_span_events(FmtSpan::CLOSE)
		.with_target(true)
		.with_writer(writer);

	Some(layer)
}
