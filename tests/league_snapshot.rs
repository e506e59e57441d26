use anyhow::Result;
use serde::Deserialize;

use tenpin_league::{
    Expense, GameRecord, LedgerSettings, Player, Settlement, SplitMethod, StatsSettings,
    calculate_balances, calculate_player_stats, calculate_team_stats, plan_settlements,
    rank_players, summarize_sessions,
};

/// A small season snapshot the way the persistence layer would hand it over:
/// three roster members (one deactivated), two outings, two shared expenses.
const SEASON: &str = r#"{
  "players": [
    { "id": 1, "name": "Alice", "is_active": true, "deactivated_at": null },
    { "id": 2, "name": "Bob", "is_active": true, "deactivated_at": null },
    { "id": 3, "name": "Carol", "is_active": false, "deactivated_at": "2026-02-01T00:00:00Z" }
  ],
  "games": [
    { "id": 1, "player_id": 1, "session_id": 100, "date_played": "2026-03-06T20:00:00Z",
      "submitted_at": "2026-03-06T22:00:00Z", "total_score": 187,
      "strike_count": 4, "spare_count": 3, "tenth_frame_notation": "X9/" },
    { "id": 2, "player_id": 2, "session_id": 100, "date_played": "2026-03-06T20:00:00Z",
      "submitted_at": "2026-03-06T22:01:00Z", "total_score": 142,
      "strike_count": 1, "spare_count": 4, "tenth_frame_notation": "9/7" },
    { "id": 3, "player_id": 1, "session_id": 101, "date_played": "2026-03-13T20:00:00Z",
      "submitted_at": "2026-03-13T22:00:00Z", "total_score": 203,
      "strike_count": 6, "spare_count": 2, "tenth_frame_notation": "XX4" },
    { "id": 4, "player_id": 2, "session_id": 101, "date_played": "2026-03-13T20:00:00Z",
      "submitted_at": "2026-03-13T22:01:00Z", "total_score": 158,
      "strike_count": 2, "spare_count": 3, "tenth_frame_notation": "72" },
    { "id": 5, "player_id": 3, "session_id": 101, "date_played": "2026-03-13T20:00:00Z",
      "submitted_at": "2026-03-13T22:02:00Z", "total_score": 176,
      "strike_count": 3, "spare_count": 3, "tenth_frame_notation": "--" },
    { "id": 6, "player_id": null, "session_id": 100, "date_played": "2026-03-06T20:00:00Z",
      "submitted_at": "2026-03-06T22:02:00Z", "total_score": 190,
      "strike_count": 5, "spare_count": 2, "tenth_frame_notation": "9/X" }
  ],
  "expenses": [
    { "id": 1, "description": "lane fees", "amount": 45.0, "payer_id": 1,
      "participant_ids": [1, 2, 3], "split": "Equal",
      "incurred_at": "2026-03-06T21:00:00Z" },
    { "id": 2, "description": "snacks", "amount": 30.0, "payer_id": 2,
      "participant_ids": [1, 2],
      "split": { "WeightedByCount": { "1": 2, "2": 1 } },
      "incurred_at": "2026-03-13T21:00:00Z" }
  ]
}"#;

#[derive(Debug, Deserialize)]
struct Season {
    players: Vec<Player>,
    games: Vec<GameRecord>,
    expenses: Vec<Expense>,
}

fn load_season() -> Result<Season> {
    Ok(serde_json::from_str(SEASON)?)
}

fn games_of(season: &Season, player_id: i64) -> Vec<GameRecord> {
    season
        .games
        .iter()
        .filter(|g| g.player_id == Some(player_id))
        .cloned()
        .collect()
}

#[test]
fn test_player_stats_from_the_snapshot() -> Result<()> {
    let season = load_season()?;
    let settings = StatsSettings::default();

    let alice = calculate_player_stats(&games_of(&season, 1), &settings);
    assert_eq!(alice.games_played, 2);
    assert_eq!(alice.average_score, 195.0);
    assert_eq!(alice.floor, 187.0);
    assert_eq!(alice.ceiling, 203.0);
    assert_eq!(alice.consistency_range, 16.0);
    assert_eq!(alice.strike_percentage, 60.0);
    assert_eq!(alice.spare_percentage, 58.3);
    assert_eq!(alice.average_tenth_frame, 22.0);
    assert_eq!(alice.high_games, 1);
    assert_eq!(alice.high_game_percentage, 50.0);

    let bob = calculate_player_stats(&games_of(&season, 2), &settings);
    assert_eq!(bob.average_score, 150.0);
    assert_eq!(bob.strike_percentage, 15.0);
    assert_eq!(bob.average_tenth_frame, 13.0);

    let ranked = rank_players(vec![(1, alice), (2, bob)]);
    let ids: Vec<i64> = ranked.iter().map(|(id, _)| *id).collect();
    assert_eq!(ids, vec![1, 2]);
    Ok(())
}

#[test]
fn test_team_stats_cover_the_active_roster_only() -> Result<()> {
    let season = load_season()?;
    let stats = calculate_team_stats(&season.games, &season.players, &StatsSettings::default());

    // Carol is deactivated and game 6 lost its player: both stay out.
    assert_eq!(stats.active_players, 2);
    assert_eq!(stats.games_played, 4);
    assert_eq!(stats.average_score, 172.5);
    assert_eq!(stats.floor, 142.0);
    assert_eq!(stats.ceiling, 203.0);
    assert_eq!(stats.strike_percentage, 37.5);
    assert_eq!(stats.spare_percentage, 52.4);
    assert_eq!(stats.average_tenth_frame, 17.5);
    assert_eq!(stats.high_games, 1);
    assert_eq!(stats.high_game_percentage, 25.0);
    Ok(())
}

#[test]
fn test_sessions_partition_both_outings() -> Result<()> {
    let season = load_season()?;
    let sessions = summarize_sessions(&season.games);

    assert_eq!(sessions.len(), 2);
    assert_eq!(sessions[0].session_id, 100);
    assert_eq!(sessions[0].games_bowled, 3);
    assert_eq!(sessions[0].team_pinfall, 519);
    assert_eq!(sessions[0].team_average, 173.0);
    assert_eq!(sessions[0].best_game, 190);
    assert_eq!(sessions[1].session_id, 101);
    assert_eq!(sessions[1].team_pinfall, 537);
    Ok(())
}

#[test]
fn test_ledger_reconciles_end_to_end() -> Result<()> {
    let season = load_season()?;
    for expense in &season.expenses {
        expense.validate()?;
    }

    let participants: Vec<i64> = season.players.iter().map(|p| p.id).collect();
    let balances = calculate_balances(&season.expenses, &participants);

    // Lane fees: Alice fronted 45, everyone owes 15. Snacks: Bob fronted 30,
    // split 2:1 toward Alice.
    let amounts: Vec<f64> = balances.iter().map(|b| b.amount).collect();
    assert_eq!(amounts, vec![10.0, 5.0, -15.0]);

    let transfers = plan_settlements(&balances, &LedgerSettings::default());
    assert_eq!(
        transfers,
        vec![
            Settlement {
                from: 3,
                to: 1,
                amount: 10.0
            },
            Settlement {
                from: 3,
                to: 2,
                amount: 5.0
            },
        ]
    );
    Ok(())
}

#[test]
fn test_weighted_split_round_trips_through_json() -> Result<()> {
    let season = load_season()?;
    match &season.expenses[1].split {
        SplitMethod::WeightedByCount(counts) => {
            assert_eq!(counts.get(&1), Some(&2));
            assert_eq!(counts.get(&2), Some(&1));
        }
        other => panic!("expected a weighted split, got {other:?}"),
    }
    Ok(())
}
