//! A service to manage student records.

use derive_more::Constructor;

use crate::students::{MySqlStudentStore, StudentStore};

pub mod get_students;
pub mod add_student;
pub mod delete_student;
pub mod http;

/// A service to manage student records.
#[derive(Debug, Clone, Constructor)]
pub struct StudentService<S = MySqlStudentStore>
where
	S: StudentStore,
{
	store: S,
}
