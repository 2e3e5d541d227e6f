//! Terminal user interface for the wallet ledger dashboard.
//!
//! Provides a Ratatui-based single-screen dashboard showing the balance
//! snapshot, ledger aggregates, and the filterable, searchable,
//! paginated mutation table.

pub mod app;
pub mod components;
pub mod event;
pub mod terminal;
pub mod ui;

pub use app::App;
pub use event::{Action, Event, Message, spawn_event_reader, spawn_tick_timer, update};
pub use terminal::{Tui, restore_terminal, setup_terminal};
pub use ui::render;
