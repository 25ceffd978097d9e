use crate::types::record_id::RecordId;
use sqlx::FromRow;

#[derive(FromRow, Clone, Debug, PartialEq, Eq)]
pub struct UserPresence {
	pub id: RecordId,
	pub name: String,
	pub avatar_emoji: String,
	pub status: String,
	/// Title of the movie in the user's current room, if any.
	pub watching_movie: Option<String>,
}
