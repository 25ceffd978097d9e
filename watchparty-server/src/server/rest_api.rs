use crate::context::ApplicationContext;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

mod cors;
mod error;
mod messages;
mod models;
mod response;
mod rooms;
mod users;

pub fn rest_api() -> Router<ApplicationContext> {
	Router::new()
		.merge(rooms::router())
		.merge(users::router())
		.merge(messages::router())
		.route("/health", get(health))
}

/// Liveness only, never touches the database.
async fn health() -> Json<serde_json::Value> {
	Json(json!({"status": "ok"}))
}
