use crate::chat::RECENT_MESSAGE_LIMIT;
use crate::context::ApplicationContext;
use crate::database::{Database, Repository};
use crate::server::rest_api::cors::cors_layer;
use crate::server::rest_api::error::{RestApiError, ValidationError, method_not_allowed};
use crate::server::rest_api::models::{MessageListQuery, MessageResponse, PostMessageRequest, PostMessageResponse};
use crate::server::rest_api::response::Created;
use crate::types::record_id::RecordId;
use axum::body::Bytes;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::Method;
use axum::routing::get;
use axum::{Json, Router};
use std::sync::Arc;
use tracing::debug;

/// Author of messages posted without a `user_id` or with `"user_id": null`.
const FALLBACK_USER_ID: RecordId = RecordId::new(1);

pub fn router() -> Router<ApplicationContext> {
	Router::new()
		.route(
			"/messages",
			get(list_messages)
				.post(post_message)
				.head(method_not_allowed)
				.fallback(method_not_allowed),
		)
		.layer(cors_layer([Method::GET, Method::POST, Method::OPTIONS]))
}

async fn list_messages(
	State(database): State<Arc<dyn Database>>,
	State(repository): State<Arc<dyn Repository>>,
	query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<Vec<MessageResponse>>, RestApiError> {
	let Query(parameters) = query.map_err(|rejection| ValidationError::InvalidQuery(rejection.body_text()))?;
	let room_id = room_id_from_query(parameters.into_iter().collect())?;

	let mut connection = database.connection().await?;
	let messages = repository
		.chat()
		.list_recent(&mut *connection, room_id, RECENT_MESSAGE_LIMIT)
		.await?;

	Ok(Json(messages.into_iter().map(MessageResponse::from).collect()))
}

async fn post_message(
	State(database): State<Arc<dyn Database>>,
	State(repository): State<Arc<dyn Repository>>,
	body: Bytes,
) -> Result<Created<Json<PostMessageResponse>>, RestApiError> {
	let NewMessage {
		room_id,
		user_id,
		message,
	} = NewMessage::try_from(parse_body(&body)?)?;

	let mut connection = database.connection().await?;
	let message_id = repository
		.chat()
		.create(&mut *connection, room_id, user_id, &message)
		.await?;
	debug!(%room_id, %user_id, %message_id, "Created chat message");

	Ok(Created(Json(PostMessageResponse {
		success: true,
		message_id,
	})))
}

fn room_id_from_query(MessageListQuery { room_id }: MessageListQuery) -> Result<RecordId, ValidationError> {
	let room_id = room_id
		.filter(|room_id| !room_id.is_empty())
		.ok_or(ValidationError::RoomIdRequired)?;

	room_id.parse().map_err(|_| ValidationError::RoomIdNotAnInteger)
}

/// An empty body counts as `{}`.
fn parse_body(body: &[u8]) -> Result<PostMessageRequest, ValidationError> {
	if body.iter().all(u8::is_ascii_whitespace) {
		return Ok(PostMessageRequest::default());
	}

	serde_json::from_slice(body).map_err(|error| ValidationError::InvalidBody(error.to_string()))
}

#[derive(Debug, PartialEq, Eq)]
struct NewMessage {
	room_id: RecordId,
	user_id: RecordId,
	message: String,
}

impl TryFrom<PostMessageRequest> for NewMessage {
	type Error = ValidationError;

	fn try_from(
		PostMessageRequest {
			room_id,
			user_id,
			message,
		}: PostMessageRequest,
	) -> Result<Self, Self::Error> {
		// A room id of 0 never refers to a room and counts as missing.
		let room_id = room_id.filter(|room_id| !room_id.is_zero());
		let message = message.filter(|message| !message.is_empty());
		let (Some(room_id), Some(message)) = (room_id, message) else {
			return Err(ValidationError::RoomIdAndMessageRequired);
		};

		Ok(Self {
			room_id,
			user_id: user_id.unwrap_or(FALLBACK_USER_ID),
			message,
		})
	}
}
