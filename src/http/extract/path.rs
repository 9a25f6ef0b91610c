use axum::extract::FromRequestParts;
use axum::extract::rejection::PathRejection as BaseRejection;
use axum::response::{IntoResponse, Response};
use derive_more::{Display, Error, From};
use http::StatusCode;

use crate::http::ErrorResponse;

/// An [extractor] for path parameters.
///
/// This is the same as [`axum::extract::Path`], except that it produces the same kind of error
/// response as all of our errors.
///
/// [extractor]: axum::extract
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(PathRejection))]
pub struct Path<T>(pub T);

/// Rejection for the [`Path`] extractor.
#[derive(Debug, Display, Error, From)]
#[display("{_0}")]
pub struct PathRejection(BaseRejection);

impl IntoResponse for PathRejection
{
	fn into_response(self) -> Response
	{
		let status = match self.0 {
			BaseRejection::MissingPathParams(_) => StatusCode::INTERNAL_SERVER_ERROR,
			_ => StatusCode::BAD_REQUEST,
		};

		ErrorResponse::new(self.0.body_text()).with_status(status)
	}
}
