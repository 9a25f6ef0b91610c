use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::{FromRequest, Request};
use axum::response::{IntoResponse, Response};
use derive_more::{Display, Error};
use http::StatusCode;
use mime::Mime;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::http::ErrorResponse;

/// An [extractor] for JSON request bodies.
///
/// This is the same as [`axum::Json`], except that it produces the same kind of error response
/// as all of our errors.
///
/// [extractor]: axum::extract
#[derive(Debug)]
pub struct Json<T>(pub T);

impl<S, T> FromRequest<S> for Json<T>
where
	S: Send + Sync,
	T: DeserializeOwned,
{
	type Rejection = JsonRejection;

	#[tracing::instrument(level = "debug", skip_all, err(level = "debug"))]
	async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection>
	{
		if !has_json_content_type(req.headers()) {
			return Err(JsonRejection::MissingContentType);
		}

		let bytes = Bytes::from_request(req, state).await?;
		let parsed = serde_json::from_slice(&bytes)?;

		Ok(Self(parsed))
	}
}

impl<T> IntoResponse for Json<T>
where
	T: Serialize,
{
	fn into_response(self) -> Response
	{
		axum::Json(self.0).into_response()
	}
}

/// Rejection for the [`Json`] extractor.
#[derive(Debug, Display, Error)]
pub enum JsonRejection
{
	#[display("missing `Content-Type: application/json` header")]
	MissingContentType,

	#[display("failed to read request body: {_0}")]
	ReadRequestBody(BytesRejection),

	#[display("{_0}")]
	Deserialize(serde_json::Error),
}

impl From<BytesRejection> for JsonRejection
{
	fn from(rejection: BytesRejection) -> Self
	{
		Self::ReadRequestBody(rejection)
	}
}

impl From<serde_json::Error> for JsonRejection
{
	fn from(error: serde_json::Error) -> Self
	{
		Self::Deserialize(error)
	}
}

impl JsonRejection
{
	pub fn status(&self) -> StatusCode
	{
		use serde_json::error::Category as ECategory;

		match self {
			Self::MissingContentType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
			Self::ReadRequestBody(rejection) => rejection.status(),
			Self::Deserialize(source) => match source.classify() {
				ECategory::Syntax | ECategory::Eof | ECategory::Io => StatusCode::BAD_REQUEST,
				ECategory::Data => StatusCode::UNPROCESSABLE_ENTITY,
			},
		}
	}
}

impl IntoResponse for JsonRejection
{
	fn into_response(self) -> Response
	{
		let status = self.status();

		ErrorResponse::new(self.to_string()).with_status(status)
	}
}

/// Checks if the given `headers` contain a JSON-like Content-Type.
fn has_json_content_type(headers: &http::HeaderMap) -> bool
{
	let Some(content_type) = headers.get(http::header::CONTENT_TYPE) else {
		tracing::debug!("request headers do not contain a `Content-Type` header");
		return false;
	};

	let Ok(content_type) = content_type.to_str() else {
		tracing::debug!("request headers contain a `Content-Type` header, but it's not UTF-8");
		return false;
	};

	let Ok(mime) = content_type.parse::<Mime>() else {
		tracing::debug!(content_type, "`Content-Type` header is not a valid mime type");
		return false;
	};

	mime.type_() == mime::APPLICATION
		&& (mime.subtype() == mime::JSON || mime.suffix() == Some(mime::JSON))
}
