use std::error::Error;

use axum::response::{IntoResponse, Response};
use http::StatusCode;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::database::StoreError;

/// Body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse
{
	/// A human readable description of what went wrong.
	#[schema(example = "Table 'student_db.students' doesn't exist")]
	pub error: String,
}

impl ErrorResponse
{
	pub fn new(error: impl Into<String>) -> Self
	{
		Self { error: error.into() }
	}

	/// Turns `self` into a response with the given status code.
	pub fn with_status(self, status: StatusCode) -> Response
	{
		(status, axum::Json(self)).into_response()
	}
}

impl IntoResponse for StoreError
{
	fn into_response(self) -> Response
	{
		if self.is_constraint_violation() {
			tracing::warn!(error = &self as &dyn Error, "store rejected write");
		} else {
			tracing::error!(error = &self as &dyn Error, "store operation failed");
		}

		let message = if cfg!(feature = "production") {
			String::from("something went wrong; please report this incident")
		} else {
			self.message().into_owned()
		};

		ErrorResponse::new(message).with_status(StatusCode::INTERNAL_SERVER_ERROR)
	}
}
