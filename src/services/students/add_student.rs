//! This module implements functionality to add new student records.

use super::StudentService;
use crate::database::StoreResult;
use crate::students::{NewStudent, StudentId, StudentStore};

impl<S> StudentService<S>
where
	S: StudentStore,
{
	/// Stores a new record.
	///
	/// The ID is assigned by the store. It is returned so callers inside the crate can log or
	/// test against it; the HTTP layer does not echo it back.
	#[tracing::instrument(skip(self), err(level = "debug"))]
	pub async fn add_student(&self, student: NewStudent) -> StoreResult<StudentId>
	{
		let id = self.store.insert(student).await?;

		tracing::info!(%id, "added student");

		Ok(id)
	}
}
