use std::cmp::Ordering;

use log::debug;

use super::types::{Balance, ParticipantId, Settlement};
use crate::config::LedgerSettings;

/// Reduce net balances to a short list of payer-to-payee transfers.
///
/// This is a greedy reduction, not a minimum-transaction-count solver: both
/// sides are sorted descending by amount once (the sort is stable, so equal
/// amounts keep their ledger order) and matched front to front. It finishes
/// in at most `creditors + debtors - 1` transfers and fully reconciles the
/// ledger, because balances sum to roughly zero by construction.
pub fn plan_settlements(balances: &[Balance], settings: &LedgerSettings) -> Vec<Settlement> {
    let epsilon = settings.settled_epsilon;

    // Anything within epsilon of zero is float noise, already settled.
    let mut creditors = side(balances, |amount| amount > epsilon);
    let mut debtors = side(balances, |amount| amount < -epsilon);
    sort_descending(&mut creditors);
    sort_descending(&mut debtors);

    let mut transfers = Vec::new();
    let mut creditor = 0;
    let mut debtor = 0;

    while creditor < creditors.len() && debtor < debtors.len() {
        let amount = creditors[creditor].1.min(debtors[debtor].1);
        transfers.push(Settlement {
            from: debtors[debtor].0,
            to: creditors[creditor].0,
            amount,
        });

        creditors[creditor].1 -= amount;
        debtors[debtor].1 -= amount;
        if creditors[creditor].1 < epsilon {
            creditor += 1;
        }
        if debtors[debtor].1 < epsilon {
            debtor += 1;
        }
    }

    debug!(
        "settled {} creditor(s) and {} debtor(s) in {} transfer(s)",
        creditors.len(),
        debtors.len(),
        transfers.len()
    );
    transfers
}

/// One side of the ledger as (participant, magnitude) pairs.
fn side(balances: &[Balance], keep: impl Fn(f64) -> bool) -> Vec<(ParticipantId, f64)> {
    balances
        .iter()
        .filter(|balance| keep(balance.amount))
        .map(|balance| (balance.participant_id, balance.amount.abs()))
        .collect()
}

fn sort_descending(entries: &mut [(ParticipantId, f64)]) {
    entries.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
}
