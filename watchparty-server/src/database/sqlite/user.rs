use super::{SqliteRepository, sqlite_connection};
use crate::database::Connection;
use crate::database::error::DatabaseError;
use crate::user::model::UserPresence;
use crate::user::repository::UserRepository;
use async_trait::async_trait;
use sqlx::query_as;

#[async_trait]
impl UserRepository for SqliteRepository {
	async fn list(&self, connection: &mut dyn Connection) -> Result<Vec<UserPresence>, DatabaseError> {
		let connection = sqlite_connection(connection)?;

		query_as(
			r"SELECT
				u.id,
				u.name,
				u.avatar_emoji,
				u.status,
				m.title AS watching_movie
			FROM users u
			LEFT JOIN rooms r ON u.current_room_id = r.id
			LEFT JOIN movies m ON r.movie_id = m.id
			ORDER BY u.status DESC, u.name ASC",
		)
		.fetch_all(connection)
		.await
		.map_err(Into::into)
	}
}
