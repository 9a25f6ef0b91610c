/// Resolves once the process receives SIGINT.
pub async fn sigint()
{
	match tokio::signal::ctrl_c().await {
		Ok(()) => tracing::warn!("received SIGINT"),
		Err(error) => tracing::error!(%error, "failed to receive SIGINT"),
	}
}
