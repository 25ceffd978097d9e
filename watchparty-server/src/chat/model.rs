use crate::types::record_id::RecordId;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A chat message joined with its author.
#[derive(FromRow, Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
	pub id: RecordId,
	pub message: String,
	pub created_at: DateTime<Utc>,
	pub user_name: String,
	pub avatar_emoji: String,
}
