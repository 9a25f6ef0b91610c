//! HTTP handlers for the `/api/students` endpoints.

use axum::extract::State;
use axum::{Router, routing};

use super::StudentService;
use crate::database::StoreError;
use crate::http::Message;
use crate::http::extract::{Json, Path};
use crate::students::{NewStudent, Student, StudentStore};

/// Returns a router for the `/api/students` endpoints.
pub fn router<S>(student_service: StudentService<S>) -> Router
where
	S: StudentStore,
{
	Router::new()
		.route("/api/students", routing::get(get_students::<S>).post(add_student::<S>))
		.route("/api/students/{id}", routing::delete(delete_student::<S>))
		.with_state(student_service)
}

/// Returns every student record, ordered by ID.
#[tracing::instrument(level = "debug", skip(student_service), err(level = "debug"))]
#[utoipa::path(
  get,
  path = "/api/students",
  tag = "Students",
  responses(
    (status = 200, body = Vec<Student>),
    (status = 500, body = crate::http::ErrorResponse),
  ),
)]
pub(crate) async fn get_students<S>(
	State(student_service): State<StudentService<S>>,
) -> Result<Json<Vec<Student>>, StoreError>
where
	S: StudentStore,
{
	student_service.get_students().await.map(Json)
}

/// Adds a new student record.
#[tracing::instrument(level = "debug", skip(student_service), err(level = "debug"))]
#[utoipa::path(
  post,
  path = "/api/students",
  tag = "Students",
  request_body = NewStudent,
  responses(
    (status = 200, body = Message),
    (status = 415, body = crate::http::ErrorResponse, description = "missing `Content-Type: application/json`"),
    (status = 422, body = crate::http::ErrorResponse, description = "missing or ill-typed fields"),
    (status = 500, body = crate::http::ErrorResponse),
  ),
)]
pub(crate) async fn add_student<S>(
	State(student_service): State<StudentService<S>>,
	Json(student): Json<NewStudent>,
) -> Result<Message, StoreError>
where
	S: StudentStore,
{
	student_service.add_student(student).await?;

	Ok(Message::new(Message::STUDENT_ADDED))
}

/// Deletes a student record.
///
/// Succeeds whether or not a record with the given ID exists. Any integer is accepted.
#[tracing::instrument(level = "debug", skip(student_service), err(level = "debug"))]
#[utoipa::path(
  delete,
  path = "/api/students/{id}",
  tag = "Students",
  params(("id" = i64, Path, description = "The student's ID")),
  responses(
    (status = 200, body = Message),
    (status = 400, body = crate::http::ErrorResponse, description = "non-integer ID"),
    (status = 500, body = crate::http::ErrorResponse),
  ),
)]
pub(crate) async fn delete_student<S>(
	State(student_service): State<StudentService<S>>,
	Path(id): Path<i64>,
) -> Result<Message, StoreError>
where
	S: StudentStore,
{
	student_service.delete_student(id).await?;

	Ok(Message::new(Message::STUDENT_DELETED))
}

#[cfg(test)]
mod tests
{
	use axum::body::Body;
	use http::{Request, StatusCode, header};
	use serde_json::json;

	use crate::students::StudentStore;
	use crate::testing::{self, MemoryStore};

	fn get(uri: &str) -> color_eyre::Result<Request<Body>>
	{
		Ok(Request::get(uri).body(Body::empty())?)
	}

	fn post_json(body: serde_json::Value) -> color_eyre::Result<Request<Body>>
	{
		Ok(Request::post("/api/students")
			.header(header::CONTENT_TYPE, "application/json")
			.body(Body::from(body.to_string()))?)
	}

	fn delete(id: impl std::fmt::Display) -> color_eyre::Result<Request<Body>>
	{
		Ok(Request::delete(format!("/api/students/{id}")).body(Body::empty())?)
	}

	#[tokio::test]
	async fn empty_store_lists_nothing() -> color_eyre::Result<()>
	{
		let router = testing::router(MemoryStore::default());
		let (status, body) = testing::send(router, get("/api/students")?).await?;

		assert_eq!(status, StatusCode::OK);
		assert_eq!(body, json!([]));

		Ok(())
	}

	#[tokio::test]
	async fn created_students_are_listed_with_ids() -> color_eyre::Result<()>
	{
		let router = testing::router(MemoryStore::default());

		for student in [
			json!({ "name": "A", "course": "CS", "year": 1 }),
			json!({ "name": "B", "course": "EE", "year": 5 }),
		] {
			let (status, body) = testing::send(router.clone(), post_json(student)?).await?;

			assert_eq!(status, StatusCode::OK);
			assert_eq!(body, json!({ "message": "Student added successfully" }));
		}

		let (status, body) = testing::send(router, get("/api/students")?).await?;

		assert_eq!(status, StatusCode::OK);
		assert_eq!(
			body,
			json!([
				{ "id": 1, "name": "A", "course": "CS", "year": 1 },
				{ "id": 2, "name": "B", "course": "EE", "year": 5 },
			])
		);

		Ok(())
	}

	#[tokio::test]
	async fn delete_removes_existing_and_ignores_missing() -> color_eyre::Result<()>
	{
		let store = MemoryStore::default();
		let id = store.insert(testing::new_student("X", "Y", 2)).await?;
		let router = testing::router(store.clone());

		let (status, body) = testing::send(router.clone(), delete(9000)?).await?;

		assert_eq!(status, StatusCode::OK);
		assert_eq!(body, json!({ "message": "Student deleted" }));
		assert_eq!(store.list().await?.len(), 1);

		for missing in ["-1", "0", "4294967296", "-9223372036854775808"] {
			let (status, body) = testing::send(router.clone(), delete(missing)?).await?;

			assert_eq!(status, StatusCode::OK, "DELETE /api/students/{missing}");
			assert_eq!(body, json!({ "message": "Student deleted" }));
		}

		assert_eq!(store.list().await?.len(), 1);

		let (status, body) = testing::send(router, delete(id)?).await?;

		assert_eq!(status, StatusCode::OK);
		assert_eq!(body, json!({ "message": "Student deleted" }));
		assert!(store.list().await?.is_empty());

		Ok(())
	}

	#[tokio::test]
	async fn malformed_bodies_never_reach_the_store() -> color_eyre::Result<()>
	{
		let store = MemoryStore::default();
		let router = testing::router(store.clone());

		let missing_field = post_json(json!({ "name": "A", "year": 1 }))?;
		let (status, body) = testing::send(router.clone(), missing_field).await?;

		assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
		assert!(body["error"].is_string());

		let wrong_type = post_json(json!({ "name": "A", "course": "CS", "year": [1] }))?;
		let (status, _) = testing::send(router.clone(), wrong_type).await?;

		assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

		let not_json = Request::post("/api/students")
			.header(header::CONTENT_TYPE, "application/json")
			.body(Body::from("{ name"))?;
		let (status, _) = testing::send(router.clone(), not_json).await?;

		assert_eq!(status, StatusCode::BAD_REQUEST);

		let no_content_type = Request::post("/api/students")
			.body(Body::from(json!({ "name": "A", "course": "CS", "year": 1 }).to_string()))?;
		let (status, body) = testing::send(router.clone(), no_content_type).await?;

		assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
		assert!(body["error"].is_string());

		for not_an_integer in ["abc", "1.5"] {
			let (status, body) = testing::send(router.clone(), delete(not_an_integer)?).await?;

			assert_eq!(status, StatusCode::BAD_REQUEST, "DELETE /api/students/{not_an_integer}");
			assert!(body["error"].is_string());
		}

		assert!(store.list().await?.is_empty());

		Ok(())
	}

	#[tokio::test]
	async fn store_failures_are_internal_server_errors() -> color_eyre::Result<()>
	{
		let store = MemoryStore::default();
		let router = testing::router(store.clone());

		store.set_unavailable(true);

		let requests = [
			get("/api/students")?,
			post_json(json!({ "name": "A", "course": "CS", "year": 1 }))?,
			delete(1)?,
		];

		for request in requests {
			let (status, body) = testing::send(router.clone(), request).await?;

			assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
			assert!(body["error"].as_str().is_some_and(|error| !error.is_empty()));
		}

		Ok(())
	}

	#[tokio::test]
	async fn concurrent_create_and_delete_both_succeed() -> color_eyre::Result<()>
	{
		let store = MemoryStore::default();
		let existing = store.insert(testing::new_student("A", "CS", 1)).await?;
		let router = testing::router(store.clone());

		let remove = delete(existing)?;
		let create = post_json(json!({ "name": "B", "course": "EE", "year": 5 }))?;
		let (created, deleted) = tokio::join!(
			testing::send(router.clone(), create),
			testing::send(router, remove),
		);

		assert_eq!(created?.0, StatusCode::OK);
		assert_eq!(deleted?.0, StatusCode::OK);

		let students = store.list().await?;

		assert_eq!(students.len(), 1);
		assert_eq!(students[0].name, "B");

		Ok(())
	}

	#[tokio::test]
	async fn responses_carry_a_request_id() -> color_eyre::Result<()>
	{
		use tower::ServiceExt;

		let router = testing::router(MemoryStore::default());
		let response = router.oneshot(get("/")?).await?;

		assert_eq!(response.status(), StatusCode::OK);
		assert!(response.headers().contains_key("x-request-id"));

		Ok(())
	}
}
