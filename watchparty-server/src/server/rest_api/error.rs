use crate::database::error::DatabaseError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::error;

mod method_not_allowed;
mod validation;

pub use method_not_allowed::method_not_allowed;
pub use validation::ValidationError;

/// Error body shared by all client errors: `{"error": "<message>"}`
#[derive(Serialize, Debug)]
pub struct ApiErrorResponse {
	#[serde(skip)]
	status: StatusCode,
	error: String,
}

impl ApiErrorResponse {
	pub fn new(status: StatusCode, error: impl Into<String>) -> Self {
		Self {
			status,
			error: error.into(),
		}
	}
}

impl IntoResponse for ApiErrorResponse {
	fn into_response(self) -> Response {
		(self.status, Json(self)).into_response()
	}
}

#[derive(thiserror::Error, Debug)]
pub enum RestApiError {
	#[error(transparent)]
	Validation(#[from] ValidationError),
	#[error(transparent)]
	Database(#[from] DatabaseError),
}

impl IntoResponse for RestApiError {
	fn into_response(self) -> Response {
		match self {
			Self::Validation(error) => ApiErrorResponse::from(error).into_response(),
			// Infrastructure failures stay opaque to the client.
			Self::Database(error) => {
				error!(?error, "Request failed: {error}");
				StatusCode::INTERNAL_SERVER_ERROR.into_response()
			}
		}
	}
}
