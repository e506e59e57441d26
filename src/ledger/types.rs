use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Ledger participants are roster members; the id space is shared with
/// [`crate::domain::PlayerId`].
pub type ParticipantId = i64;
pub type ExpenseId = i64;

/// How a shared expense is divided among its participants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SplitMethod {
    /// Everyone owes the same share.
    Equal,
    /// Shares proportional to a per-participant count (games bowled, nights
    /// attended, and so on).
    WeightedByCount(HashMap<ParticipantId, u32>),
    /// Explicit per-participant amounts, taken as-is. They need not sum to
    /// the expense amount; the figures are the caller's to get right.
    FixedAmounts(HashMap<ParticipantId, f64>),
}

/// One shared expense. Immutable once created; edits replace the whole
/// record, and balances are always recomputed from the full history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    pub description: String,
    pub amount: f64,
    pub payer_id: ParticipantId,
    pub participant_ids: Vec<ParticipantId>,
    pub split: SplitMethod,
    pub incurred_at: DateTime<Utc>,
}

/// Rejections raised before an expense enters the ledger.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LedgerError {
    #[error("expense amount must be positive, got {0}")]
    NonPositiveAmount(f64),
    #[error("an expense needs at least one participant")]
    NoParticipants,
    #[error("participant {0} has no weight under this split method")]
    MissingWeight(ParticipantId),
}

impl Expense {
    /// Validates the expense against its split method. Called before an
    /// expense is accepted, the same way a game record is validated before
    /// it reaches the aggregates.
    pub fn validate(&self) -> Result<(), LedgerError> {
        if self.amount <= 0.0 {
            return Err(LedgerError::NonPositiveAmount(self.amount));
        }
        if self.participant_ids.is_empty() {
            return Err(LedgerError::NoParticipants);
        }
        match &self.split {
            SplitMethod::Equal => Ok(()),
            SplitMethod::WeightedByCount(counts) => self.check_weights(counts.keys()),
            SplitMethod::FixedAmounts(amounts) => self.check_weights(amounts.keys()),
        }
    }

    fn check_weights<'a>(
        &self,
        weighted: impl Iterator<Item = &'a ParticipantId>,
    ) -> Result<(), LedgerError> {
        let weighted: Vec<ParticipantId> = weighted.copied().collect();
        for id in &self.participant_ids {
            if !weighted.contains(id) {
                return Err(LedgerError::MissingWeight(*id));
            }
        }
        Ok(())
    }
}

/// Net position of one participant: positive is owed, negative owes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    pub participant_id: ParticipantId,
    pub amount: f64,
}

/// A concrete payer-to-payee transfer; a list of these reconciles the ledger
/// to (approximately) zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settlement {
    pub from: ParticipantId,
    pub to: ParticipantId,
    pub amount: f64,
}
