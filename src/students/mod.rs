//! Student records and the store that persists them.
//!
//! The HTTP service only ever talks to a [`StudentStore`]; the production implementation is
//! [`MySqlStudentStore`], which is constructed once at startup and closed on shutdown.

use std::fmt;
use std::future::Future;

use derive_more::Display;
use serde::{Deserialize, Deserializer, Serialize, de};
use utoipa::ToSchema;

use crate::database::StoreResult;

mod id;
pub use id::StudentId;

mod mysql;
pub use mysql::MySqlStudentStore;

/// The last year in which a student still counts as active.
pub const FINAL_ACTIVE_YEAR: i32 = 4;

/// A persisted student record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Student
{
	/// The student's ID.
	pub id: StudentId,

	/// The student's name.
	#[schema(example = "Ada Lovelace")]
	pub name: String,

	/// The course the student is enrolled in.
	#[schema(example = "Computer Science")]
	pub course: String,

	/// The student's year of study.
	#[schema(example = 2)]
	pub year: i32,
}

/// A student record that has not been stored yet.
///
/// `year` may be sent either as a JSON integer or as a string containing one, which is what
/// HTML number inputs produce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NewStudent
{
	pub name: String,
	pub course: String,

	#[serde(deserialize_with = "deserialize_year")]
	#[schema(example = 1)]
	pub year: i32,
}

/// Display classification of a student, derived from their year.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Standing
{
	#[display("active")]
	Active,

	#[display("graduate")]
	Graduate,
}

impl Standing
{
	pub const fn of(year: i32) -> Self
	{
		if year <= FINAL_ACTIVE_YEAR { Self::Active } else { Self::Graduate }
	}
}

impl Student
{
	pub const fn standing(&self) -> Standing
	{
		Standing::of(self.year)
	}
}

/// Persistent storage for student records.
///
/// Every operation is a single independent statement; implementations must not assume any
/// ordering between concurrent calls.
pub trait StudentStore: fmt::Debug + Clone + Send + Sync + 'static
{
	/// Returns every stored record, ordered by ID.
	fn list(&self) -> impl Future<Output = StoreResult<Vec<Student>>> + Send;

	/// Stores a new record and returns the ID the store assigned to it.
	fn insert(&self, student: NewStudent) -> impl Future<Output = StoreResult<StudentId>> + Send;

	/// Deletes the record with the given ID and returns how many rows were affected.
	fn delete(&self, id: StudentId) -> impl Future<Output = StoreResult<u64>> + Send;
}

fn deserialize_year<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
	D: Deserializer<'de>,
{
	struct YearVisitor;

	impl de::Visitor<'_> for YearVisitor
	{
		type Value = i32;

		fn expecting(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result
		{
			fmt.write_str("an integer year")
		}

		fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
		where
			E: de::Error,
		{
			i32::try_from(value).map_err(|_| E::custom(format_args!("year {value} is out of range")))
		}

		fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
		where
			E: de::Error,
		{
			i32::try_from(value).map_err(|_| E::custom(format_args!("year {value} is out of range")))
		}

		fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
		where
			E: de::Error,
		{
			value
				.trim()
				.parse::<i32>()
				.map_err(|_| E::invalid_value(de::Unexpected::Str(value), &self))
		}
	}

	deserializer.deserialize_any(YearVisitor)
}
