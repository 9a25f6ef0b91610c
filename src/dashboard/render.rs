use std::fmt;

use super::Summary;
use crate::students::Student;

const HEADERS: [&str; 5] = ["ID", "Name", "Course", "Year", "Action"];

/// A plain-text rendering of the dashboard.
#[derive(Debug, Clone, Copy)]
pub struct View<'a>
{
	records: &'a [Student],
	summary: Summary,
}

impl<'a> View<'a>
{
	pub fn new(records: &'a [Student]) -> Self
	{
		Self { records, summary: Summary::of(records) }
	}
}

impl fmt::Display for View<'_>
{
	fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		let Summary { total, active, graduates } = self.summary;

		writeln!(fmt, "Student Records")?;
		writeln!(fmt)?;
		writeln!(fmt, "Total Students: {total}  Active: {active}  Graduates: {graduates}")?;
		writeln!(fmt)?;

		if self.records.is_empty() {
			return writeln!(fmt, "No students yet.");
		}

		let rows = self
			.records
			.iter()
			.map(|student| {
				[
					student.id.to_string(),
					student.name.clone(),
					student.course.clone(),
					student.year.to_string(),
					format!("delete {}", student.id),
				]
			})
			.collect::<Vec<_>>();

		let mut widths = HEADERS.map(|header| header.chars().count());

		for row in &rows {
			for (width, cell) in widths.iter_mut().zip(row) {
				*width = (*width).max(cell.chars().count());
			}
		}

		write_row(fmt, &widths, HEADERS)?;

		for row in &rows {
			write_row(fmt, &widths, row.each_ref().map(String::as_str))?;
		}

		Ok(())
	}
}

fn write_row(fmt: &mut fmt::Formatter<'_>, widths: &[usize; 5], cells: [&str; 5]) -> fmt::Result
{
	let mut line = String::new();

	for (idx, (cell, width)) in cells.iter().zip(widths).enumerate() {
		if idx > 0 {
			line.push_str("  ");
		}

		line.push_str(cell);
		line.extend(std::iter::repeat_n(' ', width - cell.chars().count()));
	}

	writeln!(fmt, "{}", line.trim_end())
}
