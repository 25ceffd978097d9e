use crate::types::record_id::RecordId;
use sqlx::FromRow;

/// An active room joined with its movie and its live viewer count.
#[derive(FromRow, Clone, Debug, PartialEq)]
pub struct ActiveRoom {
	pub id: RecordId,
	pub name: String,
	pub status: String,
	/// Playback position in seconds
	pub video_time: f64,
	pub is_playing: bool,
	pub movie_title: Option<String>,
	pub poster_emoji: Option<String>,
	pub viewers: i64,
}
