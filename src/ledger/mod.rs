//! Ledger reconciliation over a fetched mutation window.
//!
//! Aggregates credit/debit totals and verifies that the server-reported
//! `balance_after` chain is internally consistent. Validation is
//! advisory: violations are collected and returned, never raised, so a
//! questionable history still renders.

pub mod filter;

use crate::models::mutation::{MutationKind, MutationRecord};

/// Aggregate totals over a set of mutations.
///
/// Covers exactly the records passed in. With a windowed history fetch
/// that is the loaded window, not necessarily the full account history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LedgerSummary {
    pub total_credit: i64,
    pub total_debit: i64,
    /// `total_credit - total_debit`.
    pub net: i64,
    pub credit_count: usize,
    pub debit_count: usize,
}

/// A break in the `balance_after` chain between two adjacent mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainViolation {
    /// Index (into the ascending sequence) of the entry that mismatched.
    pub index: usize,
    /// Balance the previous entry implies this entry should report.
    pub expected: i64,
    /// Balance the entry actually reported.
    pub actual: i64,
}

/// Sums credits and debits over `mutations` using exact integer arithmetic.
///
/// Input order does not affect the result. An empty slice yields the
/// all-zero summary.
pub fn summarize(mutations: &[MutationRecord]) -> LedgerSummary {
    let mut summary = LedgerSummary::default();
    for mutation in mutations {
        match mutation.kind {
            MutationKind::Credit => {
                summary.total_credit += mutation.amount;
                summary.credit_count += 1;
            }
            MutationKind::Debit => {
                summary.total_debit += mutation.amount;
                summary.debit_count += 1;
            }
        }
    }
    summary.net = summary.total_credit - summary.total_debit;
    summary
}

/// Returns a copy of `mutations` sorted ascending by `created_at`.
///
/// The API serves history newest-first; chain validation needs
/// oldest-first. Ties sort by `id`, which follows server emission order.
pub fn chronological(mutations: &[MutationRecord]) -> Vec<MutationRecord> {
    let mut sorted = mutations.to_vec();
    sorted.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
    sorted
}

/// Checks the `balance_after` chain of an ascending sequence.
///
/// For each consecutive pair the expected balance is the previous
/// entry's `balance_after` plus the current entry's signed amount; any
/// mismatch is reported against the current entry's index. The first
/// entry has no predecessor and is never flagged.
pub fn validate_chain(mutations: &[MutationRecord]) -> Vec<ChainViolation> {
    let mut violations = Vec::new();
    for (index, pair) in mutations.windows(2).enumerate() {
        let expected = pair[0].balance_after + pair[1].signed_amount();
        let actual = pair[1].balance_after;
        if expected != actual {
            violations.push(ChainViolation {
                index: index + 1,
                expected,
                actual,
            });
        }
    }
    violations
}
