use std::collections::HashMap;

use super::rounding::round_tenths;
use super::types::SessionSummary;
use crate::domain::{GameRecord, SessionId};

/// Group game records into per-outing summaries. Every record lands in
/// exactly one summary, keyed by the session it was submitted under; the
/// result is ordered by outing date.
pub fn summarize_sessions(games: &[GameRecord]) -> Vec<SessionSummary> {
    let mut by_session: HashMap<SessionId, Vec<&GameRecord>> = HashMap::new();
    for game in games {
        by_session.entry(game.session_id).or_default().push(game);
    }

    let mut summaries: Vec<SessionSummary> = by_session
        .into_iter()
        .map(|(session_id, session_games)| summarize_one(session_id, &session_games))
        .collect();
    summaries.sort_by_key(|summary| (summary.date, summary.session_id));
    summaries
}

fn summarize_one(session_id: SessionId, games: &[&GameRecord]) -> SessionSummary {
    let games_bowled = games.len() as u32;
    let team_pinfall: i64 = games.iter().map(|g| i64::from(g.total_score)).sum();
    let team_average = if games.is_empty() {
        0.0
    } else {
        team_pinfall as f64 / games.len() as f64
    };
    let date = games
        .iter()
        .map(|g| g.date_played)
        .min()
        .unwrap_or_default();
    let best_game = games.iter().map(|g| g.total_score).max().unwrap_or(0);

    SessionSummary {
        session_id,
        date,
        games_bowled,
        team_pinfall,
        team_average: round_tenths(team_average),
        best_game,
    }
}
