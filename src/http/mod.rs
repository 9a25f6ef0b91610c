//! The HTTP facade.
//!
//! Every error produced here, whether by an extractor rejecting a request or by a service
//! operation failing, is rendered as a JSON object of the form `{"error": "…"}`.

use axum::{Router, routing};

use crate::openapi;
use crate::services::StudentService;
use crate::services::students;
use crate::students::StudentStore;

pub mod error;
pub use error::ErrorResponse;

pub mod message;
pub use message::Message;

pub mod extract;

mod middleware;

/// Returns the top-level router.
///
/// This is what we pass to [`axum::serve()`].
pub fn router<S>(
	student_service: StudentService<S>,
	allowed_origins: impl IntoIterator<Item = ::http::HeaderValue>,
) -> Router
where
	S: StudentStore,
{
	Router::new()
		.route("/", routing::get(|| async { "student records api" }))
		.route("/docs/openapi.json", routing::get(openapi::serve))
		.merge(students::http::router(student_service))
		.layer(middleware::catch_panic::layer())
		.layer(middleware::trace::layer())
		.layer(middleware::request_id::propagate_layer())
		.layer(middleware::request_id::set_layer())
		.layer(middleware::cors::layer(allowed_origins))
}
