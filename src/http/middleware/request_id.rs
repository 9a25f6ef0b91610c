use tower_http::request_id::{
	MakeRequestId,
	PropagateRequestIdLayer,
	RequestId,
	SetRequestIdLayer,
};
use ulid::Ulid;

/// Assigns every incoming request a fresh `x-request-id`.
pub fn set_layer() -> SetRequestIdLayer<MakeUlidRequestId>
{
	SetRequestIdLayer::x_request_id(MakeUlidRequestId)
}

/// Copies the request's `x-request-id` onto the response.
pub fn propagate_layer() -> PropagateRequestIdLayer
{
	PropagateRequestIdLayer::x_request_id()
}

#[derive(Debug, Clone, Copy)]
pub struct MakeUlidRequestId;

impl MakeRequestId for MakeUlidRequestId
{
	fn make_request_id<B>(&mut self, _: &http::Request<B>) -> Option<RequestId>
	{
		Ulid::new()
			.to_string()
			.parse::<http::HeaderValue>()
			.inspect_err(|error| tracing::warn!(%error, "generated request id is not a valid header value"))
			.map(RequestId::new)
			.ok()
	}
}
