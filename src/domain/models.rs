use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::notation::{self, NotationError};

pub type PlayerId = i64;
pub type SessionId = i64;
pub type GameId = i64;

/// Frames 1-9 can hold at most this many marked (strike or spare) frames.
const MAX_MARKED_FRAMES: u16 = 9;

/// A roster member. Deactivated players keep their game history but stop
/// counting toward team aggregates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub is_active: bool,
    pub deactivated_at: Option<DateTime<Utc>>,
}

/// One bowled game as submitted. Frames 1-9 arrive pre-aggregated as counts;
/// the tenth frame keeps its literal notation and is re-derived on demand.
/// Immutable once created, except for deletion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub id: GameId,
    /// `None` once the player has been removed from the roster. The game
    /// still counts for history it already appears in, but not for current
    /// team averages.
    pub player_id: Option<PlayerId>,
    /// Games submitted together as one team outing share a session.
    pub session_id: SessionId,
    pub date_played: DateTime<Utc>,
    pub submitted_at: Option<DateTime<Utc>>,
    /// Score of record for the whole game.
    pub total_score: i32,
    /// Strikes bowled in frames 1-9.
    pub strike_count: u8,
    /// Spares converted in frames 1-9.
    pub spare_count: u8,
    pub tenth_frame_notation: String,
}

/// Rejections raised before a [`GameRecord`] is allowed to exist.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecordError {
    #[error("frames 1-9 hold at most nine marks, got {strikes} strikes and {spares} spares")]
    TooManyMarkedFrames { strikes: u8, spares: u8 },
    #[error("a game score cannot be negative, got {0}")]
    NegativeScore(i32),
    #[error("tenth frame notation is not a complete legal frame: {0}")]
    Notation(#[from] NotationError),
}

impl GameRecord {
    /// Checked constructor: the tenth-frame notation must parse as a complete
    /// legal frame and the frame counts must fit into nine frames. Validation
    /// happens here, strictly before a record enters any aggregate.
    pub fn new(
        id: GameId,
        player_id: Option<PlayerId>,
        session_id: SessionId,
        date_played: DateTime<Utc>,
        submitted_at: Option<DateTime<Utc>>,
        total_score: i32,
        strike_count: u8,
        spare_count: u8,
        tenth_frame_notation: &str,
    ) -> Result<Self, RecordError> {
        if u16::from(strike_count) + u16::from(spare_count) > MAX_MARKED_FRAMES {
            return Err(RecordError::TooManyMarkedFrames {
                strikes: strike_count,
                spares: spare_count,
            });
        }
        if total_score < 0 {
            return Err(RecordError::NegativeScore(total_score));
        }
        notation::parse_complete_notation(tenth_frame_notation)?;

        Ok(Self {
            id,
            player_id,
            session_id,
            date_played,
            submitted_at,
            total_score,
            strike_count,
            spare_count,
            tenth_frame_notation: tenth_frame_notation.to_string(),
        })
    }

    /// Ordering key for "recent form": submission time when known, otherwise
    /// the date the game was bowled.
    pub fn sort_key(&self) -> DateTime<Utc> {
        self.submitted_at.unwrap_or(self.date_played)
    }
}
