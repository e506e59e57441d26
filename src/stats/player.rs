use std::cmp::Ordering;

use log::debug;

use super::percentile::percentile;
use super::rounding::round_tenths;
use super::types::{PlayerStats, SampleConfidence};
use crate::config::StatsSettings;
use crate::domain::{GameRecord, PlayerId};
use crate::metrics::{GameMetrics, game_metrics};

/// Fold one player's games into their stats line. Accepts the games in any
/// order; an empty slice is the expected "no games yet" state and yields the
/// all-zero stats rather than an error.
pub fn calculate_player_stats(games: &[GameRecord], settings: &StatsSettings) -> PlayerStats {
    if games.is_empty() {
        return PlayerStats::default();
    }
    debug!("aggregating stats over {} game(s)", games.len());

    // 1. Order by submission time, oldest first, so "recent" means recent.
    let ordered = order_by_submission(games);
    let scores: Vec<f64> = ordered.iter().map(|g| f64::from(g.total_score)).collect();
    let metrics: Vec<GameMetrics> = ordered.iter().map(|g| game_metrics(g)).collect();

    // 2. Season-long aggregates.
    let games_played = scores.len();
    let average_score = mean(&scores);

    // 3. Personal records, all-time.
    let floor = scores.iter().copied().fold(f64::INFINITY, f64::min);
    let ceiling = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    // 4. Typical band over the recent window.
    let (typical_low, typical_high) = typical_range(&scores, settings);

    // 5. Recent form.
    let recent_average = mean(tail(&scores, settings.recent_window_games));

    // 6. Mark rates and tenth-frame pins, averaged per game.
    let strike_percentage = mean_by(&metrics, |m| m.strike_percentage);
    let spare_percentage = mean_by(&metrics, |m| m.spare_percentage);
    let average_tenth_frame = mean_by(&metrics, |m| f64::from(m.tenth_frame_pins));

    // 7. High games against the league threshold.
    let threshold = f64::from(settings.high_game_threshold);
    let high_games = scores.iter().filter(|&&score| score > threshold).count();
    let high_game_percentage = high_games as f64 / games_played as f64 * 100.0;

    PlayerStats {
        games_played: games_played as u32,
        average_score: round_tenths(average_score),
        strike_percentage: round_tenths(strike_percentage),
        spare_percentage: round_tenths(spare_percentage),
        floor: round_tenths(floor),
        ceiling: round_tenths(ceiling),
        typical_low: round_tenths(typical_low),
        typical_high: round_tenths(typical_high),
        consistency_range: round_tenths(typical_high - typical_low),
        recent_average: round_tenths(recent_average),
        average_tenth_frame: round_tenths(average_tenth_frame),
        high_games: high_games as u32,
        high_game_percentage: round_tenths(high_game_percentage),
        confidence: SampleConfidence::from_games_played(games_played, settings),
    }
}

/// Roster leaderboard: descending average, ties broken by games played and
/// then by id so the order is stable across calls.
pub fn rank_players(mut entries: Vec<(PlayerId, PlayerStats)>) -> Vec<(PlayerId, PlayerStats)> {
    entries.sort_by(|(a_id, a), (b_id, b)| {
        b.average_score
            .partial_cmp(&a.average_score)
            .unwrap_or(Ordering::Equal)
            .then(b.games_played.cmp(&a.games_played))
            .then(a_id.cmp(b_id))
    });
    entries
}

fn order_by_submission(games: &[GameRecord]) -> Vec<&GameRecord> {
    let mut ordered: Vec<&GameRecord> = games.iter().collect();
    ordered.sort_by_key(|g| g.sort_key());
    ordered
}

/// The usual performance band: percentiles over the last window when the
/// sample is big enough, plain window min/max otherwise.
fn typical_range(scores: &[f64], settings: &StatsSettings) -> (f64, f64) {
    let window = tail(scores, settings.typical_window_games);
    let mut sorted = window.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

    if sorted.len() >= settings.min_percentile_games {
        (
            percentile(&sorted, settings.typical_low_percentile),
            percentile(&sorted, settings.typical_high_percentile),
        )
    } else {
        (
            sorted.first().copied().unwrap_or(0.0),
            sorted.last().copied().unwrap_or(0.0),
        )
    }
}

fn tail(values: &[f64], count: usize) -> &[f64] {
    &values[values.len().saturating_sub(count)..]
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

fn mean_by(metrics: &[GameMetrics], value: impl Fn(&GameMetrics) -> f64) -> f64 {
    if metrics.is_empty() {
        return 0.0;
    }
    metrics.iter().map(value).sum::<f64>() / metrics.len() as f64
}
