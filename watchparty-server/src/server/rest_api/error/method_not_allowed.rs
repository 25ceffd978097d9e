use crate::server::rest_api::error::ApiErrorResponse;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use std::fmt::{Display, Formatter};

#[derive(Debug, PartialEq, Eq)]
pub struct MethodNotAllowedError;

impl Display for MethodNotAllowedError {
	fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
		write!(formatter, "Method not allowed")
	}
}

impl std::error::Error for MethodNotAllowedError {}

impl From<MethodNotAllowedError> for ApiErrorResponse {
	fn from(error: MethodNotAllowedError) -> Self {
		ApiErrorResponse::new(StatusCode::METHOD_NOT_ALLOWED, error.to_string())
	}
}

impl IntoResponse for MethodNotAllowedError {
	fn into_response(self) -> Response {
		ApiErrorResponse::from(self).into_response()
	}
}

/// Method fallback of every resource route.
pub async fn method_not_allowed() -> MethodNotAllowedError {
	MethodNotAllowedError
}
