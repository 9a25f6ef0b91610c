use derive_more::{Constructor, Debug};

use super::{NewStudent, Student, StudentId, StudentStore};
use crate::database::{self, StoreError, StoreResult};

/// A [`StudentStore`] backed by the `students` table of a MySQL database.
#[derive(Debug, Clone, Constructor)]
pub struct MySqlStudentStore
{
	#[debug("MySql")]
	mysql: database::Pool,
}

impl MySqlStudentStore
{
	/// Closes every connection in the underlying pool.
	///
	/// Outstanding queries are allowed to finish; new ones will fail.
	pub async fn close(&self)
	{
		self.mysql.close().await;
	}
}

impl StudentStore for MySqlStudentStore
{
	#[tracing::instrument(level = "debug", skip(self), err(level = "debug"))]
	async fn list(&self) -> StoreResult<Vec<Student>>
	{
		sqlx::query_as::<_, Student>(
			"SELECT id, name, course, year
			 FROM students
			 ORDER BY id",
		)
		.fetch_all(&self.mysql)
		.await
		.map_err(StoreError::from)
	}

	#[tracing::instrument(level = "debug", skip(self), ret(level = "debug"), err(level = "debug"))]
	async fn insert(&self, student: NewStudent) -> StoreResult<StudentId>
	{
		let result = sqlx::query(
			"INSERT INTO students (name, course, year)
			 VALUES (?, ?, ?)",
		)
		.bind(student.name)
		.bind(student.course)
		.bind(student.year)
		.execute(&self.mysql)
		.await?;

		u32::try_from(result.last_insert_id())
			.map(StudentId::from)
			.map_err(|error| StoreError::decode_column("id", error))
	}

	#[tracing::instrument(level = "debug", skip(self), ret(level = "debug"), err(level = "debug"))]
	async fn delete(&self, id: StudentId) -> StoreResult<u64>
	{
		let result = sqlx::query("DELETE FROM students WHERE id = ?")
			.bind(id)
			.execute(&self.mysql)
			.await?;

		Ok(result.rows_affected())
	}
}
