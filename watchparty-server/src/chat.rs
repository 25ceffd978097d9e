pub mod model;
pub mod repository;

/// Maximum number of messages returned when reading a room's chat.
pub const RECENT_MESSAGE_LIMIT: u32 = 50;
