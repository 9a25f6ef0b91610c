use axum::response::{IntoResponse, Response};
use utoipa::OpenApi;

use crate::http::{ErrorResponse, Message};
use crate::services::students::http as students;
use crate::students::{NewStudent, Student, StudentId};

static DESCRIPTION: &str = "\
A small API for keeping track of students, the course they are enrolled in, and their year of study.

# Responses

Successful mutations respond with `{\"message\": \"…\"}`.
Every error response has the shape `{\"error\": \"…\"}`:

- `400 Bad Request` on a malformed URI path (e.g. a non-integer ID)
- `415 Unsupported Media Type` when a request body is not declared as JSON
- `422 Unprocessable Entity` on a request body with missing or ill-typed fields
- `500 Internal Server Error` when the database fails

Every response also includes an `x-request-id` header, which is useful to include in bug reports.
";

#[derive(OpenApi)]
#[openapi(
	info(
		title = "Student Records API",
		description = DESCRIPTION,
		license(name = "GPL-3.0", url = "https://www.gnu.org/licenses/gpl-3.0.txt"),
	),
	tags((name = "Students", description = "Student records")),
	components(schemas(Student, NewStudent, StudentId, Message, ErrorResponse)),
	paths(students::get_students, students::add_student, students::delete_student),
)]
pub struct Schema;

impl Schema
{
	pub fn generate() -> utoipa::openapi::OpenApi
	{
		<Self as OpenApi>::openapi()
	}

	pub fn json() -> Result<String, serde_json::Error>
	{
		Self::generate().to_pretty_json()
	}
}

/// Serves the OpenAPI document at `/docs/openapi.json`.
pub(crate) async fn serve() -> Response
{
	axum::Json(Schema::generate()).into_response()
}

#[cfg(test)]
mod tests
{
	use super::*;

	#[test]
	fn documents_every_student_route() -> color_eyre::Result<()>
	{
		let schema = Schema::generate();

		assert!(schema.paths.paths.contains_key("/api/students"));
		assert!(schema.paths.paths.contains_key("/api/students/{id}"));

		let json = Schema::json()?;

		assert!(json.contains("Student added successfully"));

		Ok(())
	}
}
