use http::{HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Allows the dashboard, which usually lives on a different origin, to call the API.
pub fn layer(allowed_origins: impl IntoIterator<Item = HeaderValue>) -> CorsLayer
{
	CorsLayer::new()
		.allow_origin(AllowOrigin::list(allowed_origins))
		.allow_methods([Method::GET, Method::POST, Method::DELETE])
		.allow_headers([header::CONTENT_TYPE])
		.expose_headers([header::HeaderName::from_static("x-request-id")])
}
