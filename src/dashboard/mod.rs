//! The dashboard client.
//!
//! A [`Dashboard`] holds the records it last fetched from the API and the draft of the "add
//! student" form. It never updates its records optimistically: every mutation is followed by a
//! full re-fetch, and a failed fetch leaves the previous records in place.

use derive_more::{Display, Error};

use crate::students::Student;

mod client;
pub use client::{ApiClient, ClientError};

mod draft;
pub use draft::{Draft, DraftError};

mod summary;
pub use summary::Summary;

mod render;
pub use render::View;

#[derive(Debug, Display, Error)]
pub enum DashboardError
{
	#[display("invalid draft: {_0}")]
	Draft(DraftError),

	#[display("{_0}")]
	Client(ClientError),

	/// The mutation went through, but the records could not be re-fetched afterwards.
	#[display("change was saved, but reloading the records failed: {_0}")]
	Refresh(ClientError),
}

impl From<DraftError> for DashboardError
{
	fn from(error: DraftError) -> Self
	{
		Self::Draft(error)
	}
}

impl From<ClientError> for DashboardError
{
	fn from(error: ClientError) -> Self
	{
		Self::Client(error)
	}
}

#[derive(Debug)]
pub struct Dashboard
{
	client: ApiClient,
	records: Vec<Student>,
	draft: Draft,
}

impl Dashboard
{
	/// Creates an empty dashboard. Call [`Dashboard::refresh()`] to load the records.
	pub fn new(client: ApiClient) -> Self
	{
		Self { client, records: Vec::new(), draft: Draft::default() }
	}

	pub fn records(&self) -> &[Student]
	{
		&self.records
	}

	pub fn draft(&self) -> &Draft
	{
		&self.draft
	}

	pub fn draft_mut(&mut self) -> &mut Draft
	{
		&mut self.draft
	}

	/// Computes the counters for the records currently on display.
	pub fn summary(&self) -> Summary
	{
		Summary::of(&self.records)
	}

	pub fn view(&self) -> View<'_>
	{
		View::new(&self.records)
	}

	/// Replaces the records with the API's current list.
	///
	/// On failure the previous records are kept.
	#[tracing::instrument(level = "debug", skip(self), err(level = "debug"))]
	pub async fn refresh(&mut self) -> Result<(), DashboardError>
	{
		self.records = self.client.list().await?;

		Ok(())
	}

	async fn refresh_after_mutation(&mut self) -> Result<(), DashboardError>
	{
		self.records = self.client.list().await.map_err(DashboardError::Refresh)?;

		Ok(())
	}

	/// Submits the draft and re-fetches the records.
	///
	/// The draft is only cleared once the API has accepted it. An invalid draft is rejected
	/// without sending any request. If only the re-fetch fails, the error is
	/// [`DashboardError::Refresh`].
	#[tracing::instrument(skip(self), err(level = "debug"))]
	pub async fn submit(&mut self) -> Result<(), DashboardError>
	{
		let student = self.draft.to_new_student()?;
		let message = self.client.create(&student).await?;

		tracing::debug!(message = %message.message, "submitted draft");

		self.draft.clear();
		self.refresh_after_mutation().await
	}

	/// Deletes a record and re-fetches the records.
	#[tracing::instrument(skip(self), err(level = "debug"))]
	pub async fn delete(&mut self, id: i64) -> Result<(), DashboardError>
	{
		let message = self.client.delete(id).await?;

		tracing::debug!(message = %message.message, "deleted record");

		self.refresh_after_mutation().await
	}
}
