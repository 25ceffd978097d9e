use crate::database::Connection;
use crate::database::error::DatabaseError;
use crate::room::model;
use async_trait::async_trait;


#[async_trait]
pub trait RoomRepository: Send + Sync + 'static {
	/// All rooms with status "active", newest first.
	///
	/// Viewers are the users that are online and currently in the room.
	async fn list_active(&self, connection: &mut dyn Connection) -> Result<Vec<model::ActiveRoom>, DatabaseError>;
}
