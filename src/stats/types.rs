use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::StatsSettings;
use crate::domain::SessionId;

/// How trustworthy the typical range is, based on sample size. The
/// thresholds are the same ones that gate the percentile window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SampleConfidence {
    #[default]
    Low,
    Medium,
    High,
}

impl SampleConfidence {
    pub fn from_games_played(games: usize, settings: &StatsSettings) -> Self {
        if games < settings.min_percentile_games {
            SampleConfidence::Low
        } else if games < settings.typical_window_games {
            SampleConfidence::Medium
        } else {
            SampleConfidence::High
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            SampleConfidence::Low => "low",
            SampleConfidence::Medium => "medium",
            SampleConfidence::High => "high",
        }
    }
}

/// Aggregate over one player's games. Derived, never persisted; recomputed
/// whenever the underlying game set changes. All numbers are rounded to one
/// decimal place. Zero games yields the all-zero default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PlayerStats {
    pub games_played: u32,
    pub average_score: f64,
    pub strike_percentage: f64,
    pub spare_percentage: f64,
    /// All-time worst game. Outlier-sensitive on purpose: a personal record.
    pub floor: f64,
    /// All-time best game.
    pub ceiling: f64,
    /// Lower edge of the percentile-based usual performance band.
    pub typical_low: f64,
    /// Upper edge of the band.
    pub typical_high: f64,
    pub consistency_range: f64,
    /// Mean over the most recent games.
    pub recent_average: f64,
    pub average_tenth_frame: f64,
    pub high_games: u32,
    pub high_game_percentage: f64,
    pub confidence: SampleConfidence,
}

/// Team-wide aggregate over every game attributable to a currently active
/// player. Same shape as [`PlayerStats`] plus the roster size it covers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TeamStats {
    pub active_players: u32,
    pub games_played: u32,
    pub average_score: f64,
    pub strike_percentage: f64,
    pub spare_percentage: f64,
    pub floor: f64,
    pub ceiling: f64,
    pub typical_low: f64,
    pub typical_high: f64,
    pub consistency_range: f64,
    pub recent_average: f64,
    pub average_tenth_frame: f64,
    pub high_games: u32,
    pub high_game_percentage: f64,
    pub confidence: SampleConfidence,
}

impl TeamStats {
    pub(super) fn from_overall(overall: PlayerStats, active_players: u32) -> Self {
        Self {
            active_players,
            games_played: overall.games_played,
            average_score: overall.average_score,
            strike_percentage: overall.strike_percentage,
            spare_percentage: overall.spare_percentage,
            floor: overall.floor,
            ceiling: overall.ceiling,
            typical_low: overall.typical_low,
            typical_high: overall.typical_high,
            consistency_range: overall.consistency_range,
            recent_average: overall.recent_average,
            average_tenth_frame: overall.average_tenth_frame,
            high_games: overall.high_games,
            high_game_percentage: overall.high_game_percentage,
            confidence: overall.confidence,
        }
    }
}

/// One team outing: every game submitted under the same session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub session_id: SessionId,
    /// Earliest played date among the session's games.
    pub date: DateTime<Utc>,
    pub games_bowled: u32,
    /// Sum of every score of record bowled that outing.
    pub team_pinfall: i64,
    pub team_average: f64,
    pub best_game: i32,
}
