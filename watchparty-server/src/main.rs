use crate::commandline::Commandline;
use crate::error::WatchpartyError;
use clap::Parser;

mod chat;
mod commandline;
mod configuration;
mod context;
mod database;
mod error;
mod room;
mod server;
mod types;
mod user;

#[tokio::main]
async fn main() -> Result<(), WatchpartyError> {
	let commandline = Commandline::parse();
	commandline.run().await
}
