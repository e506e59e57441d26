pub mod config;
pub mod domain;
pub mod ledger;
pub mod metrics;
pub mod notation;
pub mod stats;

pub use config::{LedgerSettings, StatsSettings};
pub use domain::{GameRecord, Player, PlayerId, RecordError, SessionId};
pub use ledger::{
    Balance, Expense, LedgerError, ParticipantId, Settlement, SplitMethod, calculate_balances,
    plan_settlements,
};
pub use metrics::{GameMetrics, game_metrics};
pub use notation::{
    FrameShape, NotationError, TenthFrameResult, derive_tenth_frame, parse_complete_notation,
    validate_notation,
};
pub use stats::{
    PlayerStats, SampleConfidence, SessionSummary, TeamStats, calculate_player_stats,
    calculate_team_stats, rank_players, summarize_sessions,
};
