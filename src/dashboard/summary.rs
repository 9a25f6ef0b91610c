use crate::students::{Standing, Student};

/// The counters shown above the records table.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary
{
	pub total: usize,
	pub active: usize,
	pub graduates: usize,
}

impl Summary
{
	pub fn of(students: &[Student]) -> Self
	{
		let mut summary = Self { total: students.len(), ..Self::default() };

		for student in students {
			match student.standing() {
				Standing::Active => summary.active += 1,
				Standing::Graduate => summary.graduates += 1,
			}
		}

		summary
	}
}
