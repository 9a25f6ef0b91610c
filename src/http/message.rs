use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// An acknowledgment returned by operations that don't return any data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Message
{
	#[schema(example = "Student added successfully")]
	pub message: String,
}

impl Message
{
	pub const STUDENT_ADDED: &str = "Student added successfully";
	pub const STUDENT_DELETED: &str = "Student deleted";

	pub fn new(message: impl Into<String>) -> Self
	{
		Self { message: message.into() }
	}
}

impl IntoResponse for Message
{
	fn into_response(self) -> Response
	{
		axum::Json(self).into_response()
	}
}
