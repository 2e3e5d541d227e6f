//! Wallet mutation (ledger entry) models.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Direction of a wallet mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MutationKind {
    /// Funds entering the wallet (top-up, refund, bonus).
    Credit,
    /// Funds leaving the wallet (purchase, fee, adjustment).
    Debit,
}

impl MutationKind {
    /// Returns the wire-format name used by the platform API.
    pub fn as_str(&self) -> &'static str {
        match self {
            MutationKind::Credit => "credit",
            MutationKind::Debit => "debit",
        }
    }
}

/// Weak reference to the transaction that caused a mutation.
///
/// Lookup-only; the dashboard never owns or mutates transactions.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TransactionRef {
    /// Platform-wide transaction code (e.g. `"TRX-20250114-00071"`).
    pub transaction_code: String,
}

/// A single entry in the wallet mutation history.
///
/// Entries are created exclusively server-side and observed read-only.
/// `id` increases in server emission order but is not guaranteed
/// contiguous.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MutationRecord {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: MutationKind,
    /// Magnitude of the change, always positive.
    pub amount: i64,
    /// Wallet balance immediately after this mutation was applied.
    pub balance_after: i64,
    /// Human-readable cause (e.g. `"Top Up via BCA VA"`).
    pub description: String,
    pub created_at: DateTime<Utc>,
    /// Present when the mutation was caused by a transaction.
    #[serde(default)]
    pub transaction: Option<TransactionRef>,
}

impl MutationRecord {
    /// Signed delta this mutation applies to the balance.
    pub fn signed_amount(&self) -> i64 {
        match self.kind {
            MutationKind::Credit => self.amount,
            MutationKind::Debit => -self.amount,
        }
    }
}
