/// Policy numbers for the statistics aggregators.
///
/// The windows and thresholds here are league policy, not math, so they are
/// passed into the pure calculation functions rather than baked in.
pub struct StatsSettings {
    /// Games considered for the "typical range" band.
    pub typical_window_games: usize,
    /// Minimum games in the window before percentiles replace min/max.
    pub min_percentile_games: usize,
    /// Games considered for the recent-form average.
    pub recent_window_games: usize,
    /// Lower bound of the typical band.
    pub typical_low_percentile: f64,
    /// Upper bound of the typical band.
    pub typical_high_percentile: f64,
    /// A game strictly above this score counts as a high game.
    pub high_game_threshold: i32,
}

impl Default for StatsSettings {
    fn default() -> Self {
        Self {
            typical_window_games: 30,
            min_percentile_games: 10,
            recent_window_games: 10,
            typical_low_percentile: 0.20,
            typical_high_percentile: 0.80,
            high_game_threshold: 200,
        }
    }
}

/// Policy numbers for the expense ledger.
pub struct LedgerSettings {
    /// Balances within this distance of zero are considered settled.
    /// Guards against floating-point noise after division.
    pub settled_epsilon: f64,
}

impl Default for LedgerSettings {
    fn default() -> Self {
        Self {
            settled_epsilon: 0.01,
        }
    }
}
