use anyhow::Context;
use sqlx::error::ErrorKind;
use sqlx::migrate::MigrateError;

/// Store failure, independent of the database backend.
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
	#[error("Row not found")]
	NotFound(anyhow::Error),
	#[error("Connection error: {0}")]
	Connection(anyhow::Error),
	#[error("Timed out waiting for a connection: {0}")]
	Timeout(anyhow::Error),
	#[error("Foreign key violation: {0}")]
	ForeignKeyViolation(anyhow::Error),
	#[error("Failed to decode row: {0}")]
	Decode(anyhow::Error),
	#[error("Migration error: {0}")]
	Migration(anyhow::Error),
	#[error("Connection belongs to a different database: {0}")]
	DatabaseMismatch(anyhow::Error),
	#[error("Database error: {0}")]
	Database(anyhow::Error),
}

impl From<sqlx::Error> for DatabaseError {
	fn from(error: sqlx::Error) -> Self {
		use sqlx::Error::*;
		match error {
			Database(ref database_error) if matches!(database_error.kind(), ErrorKind::ForeignKeyViolation) => {
				Self::ForeignKeyViolation(error.into())
			}
			RowNotFound => Self::NotFound(error.into()),
			Decode(_) | ColumnDecode { .. } => Self::Decode(error.into()),
			PoolTimedOut => Self::Timeout(error.into()),
			Configuration(_) | Io(_) | Tls(_) | PoolClosed => Self::Connection(error.into()),
			Migrate(error) => Self::Migration((*error).into()),
			other => Self::Database(other.into()),
		}
	}
}

impl From<MigrateError> for DatabaseError {
	fn from(error: MigrateError) -> Self {
		Self::Migration(error.into())
	}
}

pub trait IntoDatabaseResult<Ok>: Sized {
	fn connection_error(self, context: &'static str) -> Result<Ok, DatabaseError>;
}

impl<Ok, Error> IntoDatabaseResult<Ok> for Result<Ok, Error>
where
	Error: std::error::Error + Send + Sync + 'static,
{
	fn connection_error(self, context: &'static str) -> Result<Ok, DatabaseError> {
		self.context(context).map_err(DatabaseError::Connection)
	}
}
