//! Keybindings help line.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::tui::app::{App, Mode};

/// Renders the context-sensitive keybindings line.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let bindings: &[(&str, &str)] = match app.mode {
        Mode::Normal => &[
            ("q", "quit"),
            ("r", "refresh"),
            ("f", "filter"),
            ("←/→", "page"),
            ("/", "search"),
            ("esc", "clear search"),
        ],
        Mode::Search => &[("enter", "apply"), ("esc", "cancel")],
    };

    let mut spans = Vec::with_capacity(bindings.len() * 2);
    for (key, label) in bindings {
        spans.push(Span::styled(
            format!(" {key} "),
            Style::default().fg(Color::Cyan),
        ));
        spans.push(Span::styled(
            format!("{label} "),
            Style::default().fg(Color::DarkGray),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
