//! This module implements functionality to delete student records.

use super::StudentService;
use crate::database::StoreResult;
use crate::students::{StudentId, StudentStore};

impl<S> StudentService<S>
where
	S: StudentStore,
{
	/// Deletes the record with the given ID, if there is one.
	///
	/// Deleting an ID that does not exist is not an error. This includes integers that are out
	/// of range for a [`StudentId`]; those never reach the store.
	#[tracing::instrument(skip(self), err(level = "debug"))]
	pub async fn delete_student(&self, id: i64) -> StoreResult<()>
	{
		let Ok(id) = StudentId::try_from(id) else {
			tracing::debug!(id, "id cannot name a stored student");
			return Ok(());
		};

		match self.store.delete(id).await? {
			0 => tracing::debug!(%id, "no student to delete"),
			rows => tracing::info!(%id, rows, "deleted student"),
		}

		Ok(())
	}
}
