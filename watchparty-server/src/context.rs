use crate::configuration::Configuration;
use crate::database::error::DatabaseError;
use crate::database::sqlite::{SqliteDatabase, SqliteRepository};
use crate::database::{Database, Repository};
use axum::extract::FromRef;
use std::sync::Arc;

#[derive(Clone, FromRef)]
pub struct ApplicationContext {
	pub configuration: Configuration,
	pub database: Arc<dyn Database>,
	pub repository: Arc<dyn Repository>,
}

impl ApplicationContext {
	pub fn new(configuration: Configuration) -> Result<ApplicationContext, DatabaseError> {
		let database = Arc::new(SqliteDatabase::connect_lazy(
			&configuration.database_url,
			configuration.max_connections,
		)?);

		Ok(Self {
			configuration,
			database,
			repository: Arc::new(SqliteRepository),
		})
	}
}
