use crate::context::ApplicationContext;
use crate::database::{Database, Repository};
use crate::server::rest_api::cors::cors_layer;
use crate::server::rest_api::error::{RestApiError, method_not_allowed};
use crate::server::rest_api::models::UserResponse;
use axum::extract::State;
use axum::http::Method;
use axum::routing::get;
use axum::{Json, Router};
use std::sync::Arc;

pub fn router() -> Router<ApplicationContext> {
	Router::new()
		.route("/users", get(list_users).head(method_not_allowed).fallback(method_not_allowed))
		.layer(cors_layer([Method::GET, Method::OPTIONS]))
}

async fn list_users(
	State(database): State<Arc<dyn Database>>,
	State(repository): State<Arc<dyn Repository>>,
) -> Result<Json<Vec<UserResponse>>, RestApiError> {
	let mut connection = database.connection().await?;
	let users = repository.user().list(&mut *connection).await?;

	Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}
