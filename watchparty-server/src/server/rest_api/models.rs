use crate::chat::model::ChatMessage;
use crate::room::model::ActiveRoom;
use crate::types::record_id::RecordId;
use crate::user::model::UserPresence;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Debug)]
pub struct RoomResponse {
	pub id: RecordId,
	pub name: String,
	pub status: String,
	pub video_time: f64,
	pub is_playing: bool,
	pub movie_title: Option<String>,
	pub poster_emoji: Option<String>,
	pub viewers: i64,
}

impl From<ActiveRoom> for RoomResponse {
	fn from(
		ActiveRoom {
			id,
			name,
			status,
			video_time,
			is_playing,
			movie_title,
			poster_emoji,
			viewers,
		}: ActiveRoom,
	) -> Self {
		Self {
			id,
			name,
			status,
			video_time,
			is_playing,
			movie_title,
			poster_emoji,
			viewers,
		}
	}
}

#[derive(Serialize, Debug)]
pub struct UserResponse {
	pub id: RecordId,
	pub name: String,
	pub avatar_emoji: String,
	pub status: String,
	pub watching_movie: Option<String>,
}

impl From<UserPresence> for UserResponse {
	fn from(
		UserPresence {
			id,
			name,
			avatar_emoji,
			status,
			watching_movie,
		}: UserPresence,
	) -> Self {
		Self {
			id,
			name,
			avatar_emoji,
			status,
			watching_movie,
		}
	}
}

#[derive(Serialize, Debug)]
pub struct MessageResponse {
	pub id: RecordId,
	pub message: String,
	pub created_at: DateTime<Utc>,
	pub user_name: String,
	pub avatar_emoji: String,
}

impl From<ChatMessage> for MessageResponse {
	fn from(
		ChatMessage {
			id,
			message,
			created_at,
			user_name,
			avatar_emoji,
		}: ChatMessage,
	) -> Self {
		Self {
			id,
			message,
			created_at,
			user_name,
			avatar_emoji,
		}
	}
}

/// Query of `GET /messages`, `room_id` stays text until it has been checked for presence.
#[derive(Debug, Default)]
pub struct MessageListQuery {
	pub room_id: Option<String>,
}

/// Repeated parameters don't fail, the last `room_id` wins.
impl FromIterator<(String, String)> for MessageListQuery {
	fn from_iter<Parameters: IntoIterator<Item = (String, String)>>(parameters: Parameters) -> Self {
		let room_id = parameters
			.into_iter()
			.filter(|(key, _)| key == "room_id")
			.map(|(_, value)| value)
			.last();

		Self { room_id }
	}
}

/// Body of `POST /messages`, every field may be missing.
#[derive(Deserialize, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct PostMessageRequest {
	pub room_id: Option<RecordId>,
	pub user_id: Option<RecordId>,
	pub message: Option<String>,
}

#[derive(Serialize, Debug)]
pub struct PostMessageResponse {
	pub success: bool,
	pub message_id: RecordId,
}
