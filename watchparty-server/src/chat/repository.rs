use crate::chat::model;
use crate::database::Connection;
use crate::database::error::DatabaseError;
use crate::types::record_id::RecordId;
use async_trait::async_trait;


#[async_trait]
pub trait ChatRepository: Send + Sync + 'static {
	/// The newest `limit` messages of a room, newest first.
	///
	/// Rooms that don't exist simply have no messages.
	async fn list_recent(
		&self,
		connection: &mut dyn Connection,
		room_id: RecordId,
		limit: u32,
	) -> Result<Vec<model::ChatMessage>, DatabaseError>;

	async fn create(
		&self,
		connection: &mut dyn Connection,
		room_id: RecordId,
		user_id: RecordId,
		message: &str,
	) -> Result<RecordId, DatabaseError>;
}
