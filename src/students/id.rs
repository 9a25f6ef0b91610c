use std::num::TryFromIntError;

use derive_more::{Display, From, Into};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The store-assigned primary key of a student record.
#[derive(
	Debug,
	Display,
	Clone,
	Copy,
	PartialEq,
	Eq,
	PartialOrd,
	Ord,
	Hash,
	From,
	Into,
	Serialize,
	Deserialize,
	sqlx::Type,
	ToSchema,
)]
#[serde(transparent)]
#[sqlx(transparent)]
#[schema(value_type = u32, example = 1)]
pub struct StudentId(u32);

/// Integers outside the `INT UNSIGNED` range cannot name any stored record.
impl TryFrom<i64> for StudentId
{
	type Error = TryFromIntError;

	fn try_from(value: i64) -> Result<Self, Self::Error>
	{
		u32::try_from(value).map(Self)
	}
}

impl From<StudentId> for i64
{
	fn from(StudentId(id): StudentId) -> Self
	{
		Self::from(id)
	}
}
