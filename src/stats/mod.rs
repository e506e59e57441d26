pub mod percentile;
pub mod player;
pub mod rounding;
pub mod sessions;
pub mod team;
pub mod types;

pub use player::{calculate_player_stats, rank_players};
pub use sessions::summarize_sessions;
pub use team::calculate_team_stats;
pub use types::{PlayerStats, SampleConfidence, SessionSummary, TeamStats};
