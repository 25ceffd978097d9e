use crate::database::Connection;
use crate::database::error::DatabaseError;
use crate::user::model;
use async_trait::async_trait;


#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
	/// All users, status descending ("online" before "offline"), then by name.
	async fn list(&self, connection: &mut dyn Connection) -> Result<Vec<model::UserPresence>, DatabaseError>;
}
