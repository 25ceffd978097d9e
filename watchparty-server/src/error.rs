use crate::configuration::ConfigurationError;
use crate::database::error::DatabaseError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WatchpartyError {
	#[error("Failed to load configuration: {0}")]
	Configuration(#[from] ConfigurationError),
	#[error("Invalid log filters: {0}")]
	LogFilter(#[from] tracing_subscriber::filter::ParseError),
	#[error("Failed to set up database: {0}")]
	Database(#[from] DatabaseError),
	#[error("IO error while serving requests: {0}")]
	Server(#[from] std::io::Error),
}
