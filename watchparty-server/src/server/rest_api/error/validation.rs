use crate::server::rest_api::error::ApiErrorResponse;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
	#[error("room_id is required")]
	RoomIdRequired,
	#[error("room_id must be an integer")]
	RoomIdNotAnInteger,
	#[error("room_id and message are required")]
	RoomIdAndMessageRequired,
	#[error("Invalid query string: {0}")]
	InvalidQuery(String),
	#[error("Invalid request body: {0}")]
	InvalidBody(String),
}

impl From<ValidationError> for ApiErrorResponse {
	fn from(error: ValidationError) -> Self {
		ApiErrorResponse::new(StatusCode::BAD_REQUEST, error.to_string())
	}
}

impl IntoResponse for ValidationError {
	fn into_response(self) -> Response {
		ApiErrorResponse::from(self).into_response()
	}
}
