//! Main UI rendering coordinator.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use super::app::App;
use super::components::{help_bar, mutations, status_bar, summary};

/// Renders the entire application UI.
pub fn render(frame: &mut Frame, app: &App) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Status bar
            Constraint::Length(6), // Balance + ledger summary
            Constraint::Min(8),    // Mutation table
            Constraint::Length(1), // Keybindings help
        ])
        .split(frame.area());

    status_bar::render(frame, layout[0], app);
    summary::render(frame, layout[1], app);
    mutations::render(frame, layout[2], app);
    help_bar::render(frame, layout[3], app);
}
