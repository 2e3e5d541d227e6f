//! Client-side filtering and pagination of the fetched mutation window.
//!
//! All operations are pure recomputation over the immutable window: the
//! same inputs always produce the same page, with no hidden time or
//! randomness.

use crate::models::mutation::{MutationKind, MutationRecord};

/// Default rows per page.
pub const DEFAULT_PAGE_SIZE: usize = 25;

/// Which mutation kinds to show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TypeFilter {
    #[default]
    All,
    Credit,
    Debit,
}

impl TypeFilter {
    /// Next filter in the cycle order used by the dashboard.
    pub fn next(self) -> Self {
        match self {
            Self::All => Self::Credit,
            Self::Credit => Self::Debit,
            Self::Debit => Self::All,
        }
    }

    /// Whether a mutation of `kind` passes this filter.
    pub fn matches(self, kind: MutationKind) -> bool {
        match self {
            Self::All => true,
            Self::Credit => kind == MutationKind::Credit,
            Self::Debit => kind == MutationKind::Debit,
        }
    }

    /// Short label for status display.
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "ALL",
            Self::Credit => "CREDIT",
            Self::Debit => "DEBIT",
        }
    }
}

/// Query state driving the visible subset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerQuery {
    pub filter: TypeFilter,
    /// 1-based page number; out-of-range values clamp in [`apply`].
    pub page: usize,
    pub page_size: usize,
    /// Case-insensitive substring matched against the description and
    /// the transaction code.
    pub search: String,
}

impl Default for LedgerQuery {
    fn default() -> Self {
        Self {
            filter: TypeFilter::All,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            search: String::new(),
        }
    }
}

/// One displayable page plus pagination metadata.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LedgerPage {
    pub items: Vec<MutationRecord>,
    /// Records matching the filters, across all pages.
    pub total_matched: usize,
    /// At least 1, even with no matches.
    pub total_pages: usize,
    /// Page actually shown, after clamping.
    pub current_page: usize,
}

/// Applies filter, search, and pagination to the fetched window.
///
/// The type filter and search term are AND-combined. `total_pages` is
/// at least 1 even with zero matches, and a `page` beyond the end
/// clamps to the last page instead of rendering an empty one; the
/// clamped value is reported back via `current_page`. Clamping is
/// defined behavior, not a fault.
pub fn apply(all: &[MutationRecord], query: &LedgerQuery) -> LedgerPage {
    // A zero page size is outside the documented domain; treat it as 1
    // rather than dividing by zero.
    let page_size = query.page_size.max(1);
    let needle = query.search.to_lowercase();

    let matched: Vec<&MutationRecord> = all
        .iter()
        .filter(|m| query.filter.matches(m.kind))
        .filter(|m| matches_search(m, &needle))
        .collect();

    let total_matched = matched.len();
    let total_pages = total_matched.div_ceil(page_size).max(1);
    let current_page = query.page.clamp(1, total_pages);
    let start = (current_page - 1) * page_size;
    let items = matched
        .into_iter()
        .skip(start)
        .take(page_size)
        .cloned()
        .collect();

    LedgerPage {
        items,
        total_matched,
        total_pages,
        current_page,
    }
}

/// Case-insensitive substring match against description and transaction
/// code. An empty needle matches everything.
fn matches_search(mutation: &MutationRecord, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    if mutation.description.to_lowercase().contains(needle) {
        return true;
    }
    mutation
        .transaction
        .as_ref()
        .is_some_and(|t| t.transaction_code.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::mutation::TransactionRef;
    use chrono::DateTime;

    fn mutation(id: i64, kind: MutationKind, description: &str) -> MutationRecord {
        MutationRecord {
            id,
            kind,
            amount: 1_000,
            balance_after: 1_000 * id,
            description: description.to_string(),
            created_at: DateTime::from_timestamp(1_736_900_000 + id * 60, 0).unwrap(),
            transaction: None,
        }
    }

    fn window() -> Vec<MutationRecord> {
        vec![
            mutation(1, MutationKind::Credit, "Top Up via Bank"),
            mutation(2, MutationKind::Debit, "Purchase ML Diamonds"),
            mutation(3, MutationKind::Debit, "Purchase FF Diamonds"),
            mutation(4, MutationKind::Credit, "Refund order"),
            mutation(5, MutationKind::Debit, "Purchase PLN Token"),
        ]
    }

    #[test]
    fn all_filter_passes_everything() {
        let page = apply(&window(), &LedgerQuery::default());
        assert_eq!(page.total_matched, 5);
        assert_eq!(page.items.len(), 5);
        assert_eq!(page.current_page, 1);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn type_filter_narrows_by_kind() {
        let query = LedgerQuery {
            filter: TypeFilter::Credit,
            ..Default::default()
        };
        let page = apply(&window(), &query);
        assert_eq!(page.total_matched, 2);
        assert!(page.items.iter().all(|m| m.kind == MutationKind::Credit));
    }

    #[test]
    fn search_is_case_insensitive() {
        let query = LedgerQuery {
            search: "top".to_string(),
            ..Default::default()
        };
        let page = apply(&window(), &query);
        assert_eq!(page.total_matched, 1);
        assert_eq!(page.items[0].description, "Top Up via Bank");
    }

    #[test]
    fn search_matches_transaction_code() {
        let mut records = window();
        records[2].transaction = Some(TransactionRef {
            transaction_code: "TRX-20250114-00071".to_string(),
        });

        let query = LedgerQuery {
            search: "trx-20250114".to_string(),
            ..Default::default()
        };
        let page = apply(&records, &query);
        assert_eq!(page.total_matched, 1);
        assert_eq!(page.items[0].id, 3);
    }

    #[test]
    fn filters_are_and_combined() {
        // "diamonds" appears in two debits; restricting to credits
        // leaves nothing.
        let query = LedgerQuery {
            filter: TypeFilter::Credit,
            search: "diamonds".to_string(),
            ..Default::default()
        };
        let page = apply(&window(), &query);
        assert_eq!(page.total_matched, 0);
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.current_page, 1);
    }

    #[test]
    fn out_of_range_page_clamps_to_last() {
        let query = LedgerQuery {
            page: 99,
            page_size: 10,
            ..Default::default()
        };
        let page = apply(&window(), &query);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.current_page, 1);
        assert_eq!(page.items.len(), 5);
    }

    #[test]
    fn page_zero_clamps_to_first() {
        let query = LedgerQuery {
            page: 0,
            ..Default::default()
        };
        let page = apply(&window(), &query);
        assert_eq!(page.current_page, 1);
    }

    #[test]
    fn pages_slice_in_order() {
        let query = LedgerQuery {
            page: 2,
            page_size: 2,
            ..Default::default()
        };
        let page = apply(&window(), &query);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.current_page, 2);
        let ids: Vec<i64> = page.items.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![3, 4]);
    }

    #[test]
    fn apply_is_deterministic() {
        let records = window();
        let query = LedgerQuery {
            filter: TypeFilter::Debit,
            search: "purchase".to_string(),
            page: 1,
            page_size: 2,
        };
        assert_eq!(apply(&records, &query), apply(&records, &query));
    }

    #[test]
    fn filter_cycle_wraps() {
        assert_eq!(TypeFilter::All.next(), TypeFilter::Credit);
        assert_eq!(TypeFilter::Credit.next(), TypeFilter::Debit);
        assert_eq!(TypeFilter::Debit.next(), TypeFilter::All);
    }
}
