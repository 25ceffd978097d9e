use crate::context::ApplicationContext;
use crate::database::{Database, Repository};
use crate::server::rest_api::cors::cors_layer;
use crate::server::rest_api::error::{RestApiError, method_not_allowed};
use crate::server::rest_api::models::RoomResponse;
use axum::extract::State;
use axum::http::Method;
use axum::routing::get;
use axum::{Json, Router};
use std::sync::Arc;

pub fn router() -> Router<ApplicationContext> {
	Router::new()
		.route("/rooms", get(list_rooms).head(method_not_allowed).fallback(method_not_allowed))
		.layer(cors_layer([Method::GET, Method::OPTIONS]))
}

async fn list_rooms(
	State(database): State<Arc<dyn Database>>,
	State(repository): State<Arc<dyn Repository>>,
) -> Result<Json<Vec<RoomResponse>>, RestApiError> {
	let mut connection = database.connection().await?;
	let rooms = repository.room().list_active(&mut *connection).await?;

	Ok(Json(rooms.into_iter().map(RoomResponse::from).collect()))
}
