use crate::chat::repository::ChatRepository;
use crate::database::error::{DatabaseError, IntoDatabaseResult};
use crate::database::{Connection, Database, Repository};
use crate::room::repository::RoomRepository;
use crate::user::repository::UserRepository;
use anyhow::anyhow;
use async_trait::async_trait;
use sqlx::pool::PoolConnection;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Sqlite, SqliteConnection, SqlitePool};
use std::any::Any;
use std::ops::DerefMut;

mod chat;
mod room;
mod user;

#[derive(Clone)]
pub struct SqliteDatabase {
	pool: SqlitePool,
}

impl SqliteDatabase {
	/// Nothing is opened until the first request asks for a connection,
	/// so the server comes up even while the database is unreachable.
	pub fn connect_lazy(database_url: &str, max_connections: u32) -> Result<Self, DatabaseError> {
		let pool = SqlitePoolOptions::new()
			.max_connections(max_connections)
			.connect_lazy(database_url)
			.connection_error("Invalid database URL")?;

		Ok(Self { pool })
	}

	#[cfg(test)]
	pub async fn migrate(&self) -> Result<(), DatabaseError> {
		sqlx::migrate!().run(&self.pool).await.map_err(Into::into)
	}
}

#[async_trait]
impl Database for SqliteDatabase {
	async fn connection(&self) -> Result<Box<dyn Connection>, DatabaseError> {
		self.pool
			.acquire()
			.await
			.map(|connection| Box::new(connection) as Box<dyn Connection>)
			.map_err(Into::into)
	}
}

impl Connection for PoolConnection<Sqlite> {}

#[derive(Default, Clone, Copy)]
pub struct SqliteRepository;

impl Repository for SqliteRepository {
	fn user(&self) -> &dyn UserRepository {
		self
	}

	fn room(&self) -> &dyn RoomRepository {
		self
	}

	fn chat(&self) -> &dyn ChatRepository {
		self
	}
}

fn sqlite_connection(connection: &mut dyn Connection) -> Result<&mut SqliteConnection, DatabaseError> {
	let type_name = connection.type_name();

	let connection: &mut dyn Any = connection;

	connection
		.downcast_mut::<PoolConnection<Sqlite>>()
		.map(DerefMut::deref_mut)
		.ok_or_else(|| DatabaseError::DatabaseMismatch(anyhow!("Expected SQLite connection, got {type_name}")))
}
