use std::any::Any;

use http::StatusCode;
use tower_http::catch_panic::{CatchPanicLayer, ResponseForPanic};

use crate::http::ErrorResponse;

pub fn layer() -> CatchPanicLayer<PanicHandler>
{
	CatchPanicLayer::custom(PanicHandler)
}

/// Turns handler panics into `500 Internal Server Error` responses.
#[derive(Debug, Clone, Copy)]
pub struct PanicHandler;

impl ResponseForPanic for PanicHandler
{
	type ResponseBody = axum::body::Body;

	fn response_for_panic(
		&mut self,
		error: Box<dyn Any + Send + 'static>,
	) -> http::Response<Self::ResponseBody>
	{
		let error = error
			.downcast_ref::<&str>()
			.copied()
			.or_else(|| error.downcast_ref::<String>().map(String::as_str));

		tracing::error!(?error, "http handler panicked");

		ErrorResponse::new("something went wrong; please report this incident")
			.with_status(StatusCode::INTERNAL_SERVER_ERROR)
	}
}
