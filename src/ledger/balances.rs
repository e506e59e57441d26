use std::collections::HashMap;

use log::debug;

use super::types::{Balance, Expense, ParticipantId, SplitMethod};

/// Reduce the full expense history to one net balance per participant.
///
/// Balances are always recomputed from scratch over every expense, never
/// nudged incrementally, so edits and deletions can never leave drift behind.
/// The result keeps the order of the `participants` universe (with unknown
/// payers or participants appended as they appear), which is what makes
/// downstream tie-breaks stable.
pub fn calculate_balances(expenses: &[Expense], participants: &[ParticipantId]) -> Vec<Balance> {
    debug!(
        "recomputing balances over {} expense(s) for {} participant(s)",
        expenses.len(),
        participants.len()
    );

    let mut order: Vec<ParticipantId> = participants.to_vec();
    let mut totals: HashMap<ParticipantId, f64> =
        participants.iter().map(|&id| (id, 0.0)).collect();

    for expense in expenses {
        apply_expense(expense, &mut order, &mut totals);
    }

    order
        .into_iter()
        .map(|id| Balance {
            participant_id: id,
            amount: totals.get(&id).copied().unwrap_or(0.0),
        })
        .collect()
}

fn apply_expense(
    expense: &Expense,
    order: &mut Vec<ParticipantId>,
    totals: &mut HashMap<ParticipantId, f64>,
) {
    // The payer fronted the whole amount.
    credit(expense.payer_id, expense.amount, order, totals);

    match &expense.split {
        SplitMethod::Equal => {
            let share = expense.amount / expense.participant_ids.len() as f64;
            for &id in &expense.participant_ids {
                credit(id, -share, order, totals);
            }
        }
        SplitMethod::WeightedByCount(counts) => {
            let total_count: u32 = expense
                .participant_ids
                .iter()
                .map(|id| counts.get(id).copied().unwrap_or(0))
                .sum();
            if total_count == 0 {
                // Nobody carries weight; fall back to an equal split rather
                // than divide by zero.
                let share = expense.amount / expense.participant_ids.len() as f64;
                for &id in &expense.participant_ids {
                    credit(id, -share, order, totals);
                }
                return;
            }
            for &id in &expense.participant_ids {
                let count = counts.get(&id).copied().unwrap_or(0);
                let share = expense.amount * f64::from(count) / f64::from(total_count);
                credit(id, -share, order, totals);
            }
        }
        SplitMethod::FixedAmounts(amounts) => {
            for &id in &expense.participant_ids {
                let share = amounts.get(&id).copied().unwrap_or(0.0);
                credit(id, -share, order, totals);
            }
        }
    }
}

fn credit(
    id: ParticipantId,
    amount: f64,
    order: &mut Vec<ParticipantId>,
    totals: &mut HashMap<ParticipantId, f64>,
) {
    if !totals.contains_key(&id) {
        order.push(id);
    }
    *totals.entry(id).or_insert(0.0) += amount;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn expense(
        id: i64,
        amount: f64,
        payer: ParticipantId,
        participants: Vec<ParticipantId>,
        split: SplitMethod,
    ) -> Expense {
        Expense {
            id,
            description: format!("expense {id}"),
            amount,
            payer_id: payer,
            participant_ids: participants,
            split,
            incurred_at: Utc.with_ymd_and_hms(2026, 3, 6, 21, 0, 0).unwrap(),
        }
    }

    fn amount_of(balances: &[Balance], id: ParticipantId) -> f64 {
        balances
            .iter()
            .find(|b| b.participant_id == id)
            .map(|b| b.amount)
            .unwrap_or(f64::NAN)
    }

    #[test]
    fn test_equal_split_credits_the_payer() {
        let expenses = vec![expense(1, 30.0, 1, vec![1, 2, 3], SplitMethod::Equal)];
        let balances = calculate_balances(&expenses, &[1, 2, 3]);

        assert_eq!(amount_of(&balances, 1), 20.0);
        assert_eq!(amount_of(&balances, 2), -10.0);
        assert_eq!(amount_of(&balances, 3), -10.0);
        // Universe order is preserved.
        let ids: Vec<i64> = balances.iter().map(|b| b.participant_id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_weighted_split_follows_the_counts() {
        let counts = HashMap::from([(1, 2), (2, 1)]);
        let expenses = vec![expense(
            1,
            30.0,
            2,
            vec![1, 2],
            SplitMethod::WeightedByCount(counts),
        )];
        let balances = calculate_balances(&expenses, &[1, 2]);

        assert_eq!(amount_of(&balances, 1), -20.0);
        assert_eq!(amount_of(&balances, 2), 20.0);
    }

    #[test]
    fn test_zero_total_weight_falls_back_to_equal() {
        let counts = HashMap::from([(1, 0), (2, 0)]);
        let expenses = vec![expense(
            1,
            30.0,
            1,
            vec![1, 2],
            SplitMethod::WeightedByCount(counts),
        )];
        let balances = calculate_balances(&expenses, &[1, 2]);

        assert_eq!(amount_of(&balances, 1), 15.0);
        assert_eq!(amount_of(&balances, 2), -15.0);
    }

    #[test]
    fn test_fixed_amounts_are_taken_as_is() {
        let amounts = HashMap::from([(1, 12.0), (2, 10.0)]);
        let expenses = vec![expense(
            1,
            30.0,
            1,
            vec![1, 2],
            SplitMethod::FixedAmounts(amounts),
        )];
        let balances = calculate_balances(&expenses, &[1, 2]);

        // The fixed figures need not sum to the amount; they are trusted.
        assert_eq!(amount_of(&balances, 1), 18.0);
        assert_eq!(amount_of(&balances, 2), -10.0);
    }

    #[test]
    fn test_balances_sum_to_zero_for_self_consistent_splits() {
        let expenses = vec![
            expense(1, 45.0, 1, vec![1, 2, 3], SplitMethod::Equal),
            expense(
                2,
                30.0,
                2,
                vec![1, 2, 3],
                SplitMethod::WeightedByCount(HashMap::from([(1, 3), (2, 2), (3, 1)])),
            ),
        ];
        let balances = calculate_balances(&expenses, &[1, 2, 3]);
        let sum: f64 = balances.iter().map(|b| b.amount).sum();
        assert!(sum.abs() < 1e-9);
    }

    #[test]
    fn test_recomputation_matches_a_fresh_ledger() {
        // Dropping an expense and recomputing equals never having had it.
        let history = vec![
            expense(1, 45.0, 1, vec![1, 2], SplitMethod::Equal),
            expense(2, 20.0, 2, vec![1, 2], SplitMethod::Equal),
        ];
        let after_delete = calculate_balances(&history[..1], &[1, 2]);
        let fresh = calculate_balances(&[history[0].clone()], &[1, 2]);
        assert_eq!(after_delete, fresh);
    }

    #[test]
    fn test_unknown_payer_is_appended_to_the_universe() {
        let expenses = vec![expense(1, 10.0, 9, vec![1], SplitMethod::Equal)];
        let balances = calculate_balances(&expenses, &[1]);
        let ids: Vec<i64> = balances.iter().map(|b| b.participant_id).collect();
        assert_eq!(ids, vec![1, 9]);
        assert_eq!(amount_of(&balances, 9), 10.0);
    }
}
