//! This module implements functionality to list student records.

use super::StudentService;
use crate::database::StoreResult;
use crate::students::{Student, StudentStore};

impl<S> StudentService<S>
where
	S: StudentStore,
{
	/// Returns every stored record, ordered by ID.
	#[tracing::instrument(level = "debug", skip(self), err(level = "debug"))]
	pub async fn get_students(&self) -> StoreResult<Vec<Student>>
	{
		let students = self.store.list().await?;

		tracing::debug!(count = students.len(), "fetched students");

		Ok(students)
	}
}
