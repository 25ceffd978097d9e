use super::{SqliteRepository, sqlite_connection};
use crate::database::Connection;
use crate::database::error::DatabaseError;
use crate::room::model::ActiveRoom;
use crate::room::repository::RoomRepository;
use async_trait::async_trait;
use sqlx::query_as;

#[async_trait]
impl RoomRepository for SqliteRepository {
	async fn list_active(&self, connection: &mut dyn Connection) -> Result<Vec<ActiveRoom>, DatabaseError> {
		let connection = sqlite_connection(connection)?;

		query_as(
			r"SELECT
				r.id,
				r.name,
				r.status,
				r.video_time,
				r.is_playing,
				m.title AS movie_title,
				m.poster_emoji,
				(
					SELECT COUNT(*)
					FROM users u
					WHERE u.current_room_id = r.id AND u.status = 'online'
				) AS viewers
			FROM rooms r
			LEFT JOIN movies m ON r.movie_id = m.id
			WHERE r.status = 'active'
			ORDER BY r.created_at DESC, r.id DESC",
		)
		.fetch_all(connection)
		.await
		.map_err(Into::into)
	}
}
