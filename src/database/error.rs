use std::borrow::Cow;
use std::error::Error;

use derive_more::{Display, Error, From};

pub type StoreResult<T> = Result<T, StoreError>;

/// Any failure surfaced by the database while reading or writing records.
#[derive(Debug, Display, Error, From)]
#[display("database error: {_0}")]
pub struct StoreError(sqlx::Error);

impl StoreError
{
	pub(crate) fn decode_column(
		column: impl Into<String>,
		error: impl Into<Box<dyn Error + Send + Sync>>,
	) -> Self
	{
		Self(sqlx::Error::ColumnDecode { index: column.into(), source: error.into() })
	}

	/// Returns the message associated with this error.
	///
	/// For errors returned by the database server this is the server's own message, otherwise
	/// it is the driver's description of what went wrong.
	pub fn message(&self) -> Cow<'_, str>
	{
		match self.0.as_database_error() {
			Some(error) => Cow::Borrowed(error.message()),
			None => Cow::Owned(self.0.to_string()),
		}
	}

	/// Returns whether this error was caused by a `UNIQUE`, `CHECK` or foreign key constraint.
	pub fn is_constraint_violation(&self) -> bool
	{
		self.0.as_database_error().is_some_and(|error| {
			error.is_unique_violation() || error.is_check_violation() || error.is_foreign_key_violation()
		})
	}
}
