use serde::Deserialize;
use std::fs::read_to_string;
use std::net::SocketAddr;
use std::path::Path;
use thiserror::Error;

/// Environment variable that takes precedence over `database_url` from the configuration file.
pub const DATABASE_URL_VARIABLE: &str = "DATABASE_URL";

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Configuration {
	#[serde(with = "socket_addr_deserializer")]
	pub address: SocketAddr,
	pub log_filters: String,
	pub database_url: String,
	pub max_connections: u32,
}

impl Configuration {
	pub fn from_file(path: impl AsRef<Path>) -> Result<Configuration, ConfigurationError> {
		let text = read_to_string(path)?;

		Ok(Configuration::try_from(text.as_str())?)
	}

	/// Like [`Configuration::from_file`] but honours the `DATABASE_URL` environment variable.
	pub fn load(path: impl AsRef<Path>) -> Result<Configuration, ConfigurationError> {
		let configuration = Self::from_file(path)?;
		let database_url = std::env::var(DATABASE_URL_VARIABLE).ok();

		Ok(configuration.with_database_url_override(database_url))
	}

	fn with_database_url_override(self, database_url: Option<String>) -> Self {
		match database_url.filter(|url| !url.trim().is_empty()) {
			Some(database_url) => Self { database_url, ..self },
			None => self,
		}
	}
}

impl TryFrom<&str> for Configuration {
	type Error = toml::de::Error;

	fn try_from(text: &str) -> Result<Self, Self::Error> {
		toml::from_str(text)
	}
}

#[derive(Error, Debug)]
pub enum ConfigurationError {
	#[error("Failed to deserialize with error: {0}")]
	DeserializationError(#[from] toml::de::Error),
	#[error("IO operation failed: {0}")]
	IoError(#[from] std::io::Error),
}

// See https://serde.rs/custom-date-format.html
mod socket_addr_deserializer {
	use serde::{self, Deserialize, Deserializer};
	use std::net::SocketAddr;
	use std::str::FromStr;

	pub fn deserialize<'deserializer, D>(deserializer: D) -> Result<SocketAddr, D::Error>
	where
		D: Deserializer<'deserializer>,
	{
		let string = String::deserialize(deserializer)?;
		SocketAddr::from_str(string.as_str()).map_err(serde::de::Error::custom)
	}
}
