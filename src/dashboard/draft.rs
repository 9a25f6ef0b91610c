use std::num::ParseIntError;

use derive_more::{Display, Error};

use crate::students::NewStudent;

/// The pending contents of the "add student" form.
///
/// Fields are kept as text exactly as they were entered; they are only validated when the draft
/// is submitted.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Draft
{
	pub name: String,
	pub course: String,
	pub year: String,
}

#[derive(Debug, Display, Error)]
pub enum DraftError
{
	#[display("`{field}` is required")]
	MissingField
	{
		field: &'static str,
	},

	#[display("`year` must be an integer: {_0}")]
	InvalidYear(ParseIntError),
}

impl Draft
{
	pub fn new(name: impl Into<String>, course: impl Into<String>, year: impl Into<String>) -> Self
	{
		Self { name: name.into(), course: course.into(), year: year.into() }
	}

	pub fn is_empty(&self) -> bool
	{
		self.name.is_empty() && self.course.is_empty() && self.year.is_empty()
	}

	pub fn clear(&mut self)
	{
		*self = Self::default();
	}

	/// Validates the draft.
	///
	/// Every field is required; `year` must parse as an integer but is otherwise unconstrained.
	pub fn to_new_student(&self) -> Result<NewStudent, DraftError>
	{
		let name = required("name", &self.name)?;
		let course = required("course", &self.course)?;
		let year = required("year", &self.year)?
			.parse::<i32>()
			.map_err(DraftError::InvalidYear)?;

		Ok(NewStudent { name: String::from(name), course: String::from(course), year })
	}
}

fn required<'a>(field: &'static str, value: &'a str) -> Result<&'a str, DraftError>
{
	match value.trim() {
		"" => Err(DraftError::MissingField { field }),
		value => Ok(value),
	}
}

#[cfg(test)]
mod tests
{
	use super::*;

	#[test]
	fn valid_draft_becomes_new_student() -> color_eyre::Result<()>
	{
		let student = Draft::new(" Ada ", "Maths", "-2").to_new_student()?;

		assert_eq!(student, NewStudent {
			name: String::from("Ada"),
			course: String::from("Maths"),
			year: -2,
		});

		Ok(())
	}

	#[test]
	fn empty_fields_are_rejected()
	{
		let missing_course = Draft::new("Ada", "  ", "1").to_new_student();

		assert!(matches!(missing_course, Err(DraftError::MissingField { field: "course" })));
		assert!(matches!(
			Draft::default().to_new_student(),
			Err(DraftError::MissingField { field: "name" })
		));
	}

	#[test]
	fn non_integer_year_is_rejected()
	{
		let draft = Draft::new("Ada", "Maths", "second");

		assert!(matches!(draft.to_new_student(), Err(DraftError::InvalidYear(_))));
	}

	#[test]
	fn clear_resets_every_field()
	{
		let mut draft = Draft::new("Ada", "Maths", "2");
		draft.clear();

		assert!(draft.is_empty());
	}
}
