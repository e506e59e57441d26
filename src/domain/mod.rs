pub mod models;

pub use models::{GameId, GameRecord, Player, PlayerId, RecordError, SessionId};
