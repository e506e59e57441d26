use std::collections::HashSet;

use log::info;

use super::player::calculate_player_stats;
use super::types::TeamStats;
use crate::config::StatsSettings;
use crate::domain::{GameRecord, Player, PlayerId};

/// Fold the whole roster's games into team-wide stats. Only games that still
/// resolve to a currently active player count: a record whose `player_id` was
/// cleared by a deactivation is history, not current roster performance.
pub fn calculate_team_stats(
    games: &[GameRecord],
    players: &[Player],
    settings: &StatsSettings,
) -> TeamStats {
    let active = active_roster(players);
    let team_games: Vec<GameRecord> = games
        .iter()
        .filter(|game| is_team_game(game, &active))
        .cloned()
        .collect();

    info!(
        "aggregating team stats: {} of {} game(s) across {} active player(s)",
        team_games.len(),
        games.len(),
        active.len()
    );

    let overall = calculate_player_stats(&team_games, settings);
    TeamStats::from_overall(overall, active.len() as u32)
}

fn active_roster(players: &[Player]) -> HashSet<PlayerId> {
    players
        .iter()
        .filter(|player| player.is_active)
        .map(|player| player.id)
        .collect()
}

fn is_team_game(game: &GameRecord, active: &HashSet<PlayerId>) -> bool {
    match game.player_id {
        Some(id) => active.contains(&id),
        None => false,
    }
}
