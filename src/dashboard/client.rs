use derive_more::{Display, Error};
use http::StatusCode;
use serde::de::DeserializeOwned;
use url::Url;

use crate::http::{ErrorResponse, Message};
use crate::students::{NewStudent, Student};

/// An HTTP client for the `/api/students` endpoints.
#[derive(Debug, Clone)]
pub struct ApiClient
{
	http_client: reqwest::Client,
	base_url: Url,
}

/// Errors returned by [`ApiClient`].
///
/// Network failures and non-2xx responses are both errors; callers are not expected to treat
/// them differently.
#[derive(Debug, Display, Error)]
pub enum ClientError
{
	#[display("invalid API url: {_0}")]
	Url(url::ParseError),

	#[display("failed to talk to the API: {_0}")]
	Http(reqwest::Error),

	#[display("API responded with {status}: {message}")]
	Api
	{
		status: StatusCode,
		message: String,
	},
}

impl From<url::ParseError> for ClientError
{
	fn from(error: url::ParseError) -> Self
	{
		Self::Url(error)
	}
}

impl From<reqwest::Error> for ClientError
{
	fn from(error: reqwest::Error) -> Self
	{
		Self::Http(error)
	}
}

impl ApiClient
{
	/// Creates a client for the API hosted at `base_url`.
	pub fn new(base_url: Url) -> Self
	{
		Self::with_client(reqwest::Client::new(), base_url)
	}

	pub fn with_client(http_client: reqwest::Client, mut base_url: Url) -> Self
	{
		if !base_url.path().ends_with('/') {
			let path = format!("{}/", base_url.path());
			base_url.set_path(&path);
		}

		Self { http_client, base_url }
	}

	pub fn base_url(&self) -> &Url
	{
		&self.base_url
	}

	#[tracing::instrument(level = "debug", skip(self), err(level = "debug"))]
	pub async fn list(&self) -> Result<Vec<Student>, ClientError>
	{
		let url = self.base_url.join("api/students")?;
		let response = self.http_client.get(url).send().await?;

		decode(response).await
	}

	#[tracing::instrument(level = "debug", skip(self), err(level = "debug"))]
	pub async fn create(&self, student: &NewStudent) -> Result<Message, ClientError>
	{
		let url = self.base_url.join("api/students")?;
		let response = self.http_client.post(url).json(student).send().await?;

		decode(response).await
	}

	#[tracing::instrument(level = "debug", skip(self), err(level = "debug"))]
	pub async fn delete(&self, id: i64) -> Result<Message, ClientError>
	{
		let url = self.base_url.join(&format!("api/students/{id}"))?;
		let response = self.http_client.delete(url).send().await?;

		decode(response).await
	}
}

async fn decode<T>(response: reqwest::Response) -> Result<T, ClientError>
where
	T: DeserializeOwned,
{
	let status = response.status();

	if status.is_success() {
		return Ok(response.json::<T>().await?);
	}

	let message = match response.json::<ErrorResponse>().await {
		Ok(ErrorResponse { error }) => error,
		Err(error) => {
			tracing::debug!(%error, "error response has no `error` field");
			String::from(status.canonical_reason().unwrap_or("unknown error"))
		},
	};

	Err(ClientError::Api { status, message })
}

#[cfg(test)]
mod tests
{
	use super::*;

	#[test]
	fn base_url_is_treated_as_directory() -> color_eyre::Result<()>
	{
		let client = ApiClient::new("http://localhost:5000/records".parse()?);

		assert_eq!(client.base_url().as_str(), "http://localhost:5000/records/");
		assert_eq!(
			client.base_url().join("api/students")?.as_str(),
			"http://localhost:5000/records/api/students",
		);

		Ok(())
	}
}
