//! Application state for the TUI.

use tracing::warn;

use crate::ledger::filter::{self, LedgerPage, LedgerQuery};
use crate::ledger::{self, ChainViolation, LedgerSummary};
use crate::models::balance::BalanceSnapshot;
use crate::models::mutation::MutationRecord;

/// Rows shown per table page.
pub const PAGE_SIZE: usize = 15;

/// Fetch lifecycle of the wallet snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStatus {
    Idle,
    Loading,
    Loaded,
    Failed,
}

impl FetchStatus {
    /// Short label for the status bar.
    pub fn label(self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Loading => "Loading",
            Self::Loaded => "Live",
            Self::Failed => "Failed",
        }
    }
}

/// Current input mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    Search,
}

/// Central application state container.
///
/// The wallet snapshot is immutable once committed; every keystroke
/// that changes the query re-derives the visible page from scratch via
/// the pure ledger functions.
pub struct App {
    // -- Wallet snapshot --
    /// Balance fetched together with the mutation window; `None` until
    /// the first successful load.
    pub balance: Option<BalanceSnapshot>,
    /// Mutation window as served (newest first, for display).
    pub mutations: Vec<MutationRecord>,

    // -- Derived ledger view --
    /// Aggregates over the whole loaded window (not just the visible page).
    pub summary: LedgerSummary,
    /// The visible page after filter/search/pagination.
    pub page: LedgerPage,
    /// Balance-chain breaks found in the loaded window.
    pub violations: Vec<ChainViolation>,

    // -- Query state --
    pub query: LedgerQuery,
    /// Search text being edited while in [`Mode::Search`].
    pub search_input: String,
    /// Cursor position in the search input, in characters.
    pub search_cursor: usize,

    // -- UI state --
    pub mode: Mode,
    pub fetch_status: FetchStatus,
    /// Error from the last failed fetch, shown in the status bar.
    pub error_message: Option<String>,
    /// Flag to signal the application should quit.
    pub should_quit: bool,
}

impl App {
    /// Creates a new App instance with default state.
    pub fn new() -> Self {
        let mut app = Self {
            balance: None,
            mutations: Vec::new(),

            summary: LedgerSummary::default(),
            page: LedgerPage::default(),
            violations: Vec::new(),

            query: LedgerQuery {
                page_size: PAGE_SIZE,
                ..Default::default()
            },
            search_input: String::new(),
            search_cursor: 0,

            mode: Mode::Normal,
            fetch_status: FetchStatus::Idle,
            error_message: None,
            should_quit: false,
        };
        // Derive the empty view so pagination metadata starts at 1/1.
        app.refresh_view();
        app
    }

    /// Commits a freshly fetched snapshot.
    ///
    /// Balance and mutations always arrive as a pair; a failed fetch
    /// never tears the previously displayed state. Chain validation
    /// runs once per commit, over the window re-sorted oldest-first.
    pub fn apply_snapshot(&mut self, balance: BalanceSnapshot, mutations: Vec<MutationRecord>) {
        self.balance = Some(balance);
        self.mutations = mutations;
        self.fetch_status = FetchStatus::Loaded;
        self.error_message = None;
        self.query.page = 1;

        self.violations = ledger::validate_chain(&ledger::chronological(&self.mutations));
        for violation in &self.violations {
            warn!(
                index = violation.index,
                expected = violation.expected,
                actual = violation.actual,
                "balance chain break in mutation history"
            );
        }

        self.refresh_view();
    }

    /// Records a failed fetch; the previous snapshot stays on screen.
    pub fn fetch_failed(&mut self, message: String) {
        self.fetch_status = FetchStatus::Failed;
        self.error_message = Some(message);
    }

    /// Recomputes the derived view from the immutable snapshot.
    pub fn refresh_view(&mut self) {
        self.summary = ledger::summarize(&self.mutations);
        self.page = filter::apply(&self.mutations, &self.query);
        // apply() may have clamped; keep the query in range so paging
        // keys move relative to what is displayed.
        self.query.page = self.page.current_page;
    }

    /// Cycles the type filter and jumps back to the first page.
    pub fn cycle_filter(&mut self) {
        self.query.filter = self.query.filter.next();
        self.query.page = 1;
        self.refresh_view();
    }

    pub fn next_page(&mut self) {
        if self.query.page < self.page.total_pages {
            self.query.page += 1;
            self.refresh_view();
        }
    }

    pub fn previous_page(&mut self) {
        if self.query.page > 1 {
            self.query.page -= 1;
            self.refresh_view();
        }
    }

    /// Enters search mode, editing a copy of the applied search term.
    pub fn begin_search(&mut self) {
        self.mode = Mode::Search;
        self.search_input = self.query.search.clone();
        self.search_cursor = self.search_input.chars().count();
    }

    /// Applies the edited search term and returns to normal mode.
    pub fn commit_search(&mut self) {
        self.query.search = self.search_input.clone();
        self.query.page = 1;
        self.mode = Mode::Normal;
        self.refresh_view();
    }

    /// Leaves search mode without touching the applied search term.
    pub fn cancel_search(&mut self) {
        self.mode = Mode::Normal;
        self.search_input.clear();
        self.search_cursor = 0;
    }

    /// Clears an applied search term (normal-mode Esc).
    pub fn clear_search(&mut self) {
        if !self.query.search.is_empty() {
            self.query.search.clear();
            self.query.page = 1;
            self.refresh_view();
        }
    }

    pub fn insert_search_char(&mut self, c: char) {
        let idx = byte_index(&self.search_input, self.search_cursor);
        self.search_input.insert(idx, c);
        self.search_cursor += 1;
    }

    pub fn delete_search_char(&mut self) {
        if self.search_cursor > 0 {
            self.search_cursor -= 1;
            let idx = byte_index(&self.search_input, self.search_cursor);
            self.search_input.remove(idx);
        }
    }

    pub fn move_search_cursor_left(&mut self) {
        self.search_cursor = self.search_cursor.saturating_sub(1);
    }

    pub fn move_search_cursor_right(&mut self) {
        let len = self.search_input.chars().count();
        if self.search_cursor < len {
            self.search_cursor += 1;
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Byte offset of the `char_idx`-th character (input length if past the end).
fn byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}
