use super::{SqliteRepository, sqlite_connection};
use crate::chat::model::ChatMessage;
use crate::chat::repository::ChatRepository;
use crate::database::Connection;
use crate::database::error::DatabaseError;
use crate::types::record_id::RecordId;
use async_trait::async_trait;
use sqlx::{query_as, query_scalar};

#[async_trait]
impl ChatRepository for SqliteRepository {
	async fn list_recent(
		&self,
		connection: &mut dyn Connection,
		room_id: RecordId,
		limit: u32,
	) -> Result<Vec<ChatMessage>, DatabaseError> {
		let connection = sqlite_connection(connection)?;

		// id breaks ties between messages created within the same millisecond
		query_as(
			r"SELECT
				m.id,
				m.message,
				m.created_at,
				u.name AS user_name,
				u.avatar_emoji
			FROM messages m
			JOIN users u ON m.user_id = u.id
			WHERE m.room_id = ?1
			ORDER BY m.created_at DESC, m.id DESC
			LIMIT ?2",
		)
		.bind(room_id)
		.bind(limit)
		.fetch_all(connection)
		.await
		.map_err(Into::into)
	}

	async fn create(
		&self,
		connection: &mut dyn Connection,
		room_id: RecordId,
		user_id: RecordId,
		message: &str,
	) -> Result<RecordId, DatabaseError> {
		let connection = sqlite_connection(connection)?;

		query_scalar(r"INSERT INTO messages(room_id, user_id, message) VALUES (?1, ?2, ?3) RETURNING id")
			.bind(room_id)
			.bind(user_id)
			.bind(message)
			.fetch_one(connection)
			.await
			.map_err(Into::into)
	}
}
