//! Status bar component.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::tui::app::{App, FetchStatus};

use super::rupiah;

/// Renders the status bar.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let status_color = match app.fetch_status {
        FetchStatus::Loaded => Color::Green,
        FetchStatus::Loading => Color::Yellow,
        FetchStatus::Failed => Color::Red,
        FetchStatus::Idle => Color::DarkGray,
    };

    // Show the spendable balance once a snapshot is loaded
    let balance_span = if let Some(balance) = &app.balance {
        Span::styled(
            format!(" {} ", rupiah(balance.available_balance)),
            Style::default().fg(Color::Cyan),
        )
    } else {
        Span::raw("")
    };

    let filter_span = Span::styled(
        format!(" {} ", app.query.filter.label()),
        Style::default().fg(Color::White),
    );

    let search_span = if app.query.search.is_empty() {
        Span::raw("")
    } else {
        Span::styled(
            format!(" \"{}\" ", app.query.search),
            Style::default().fg(Color::Magenta),
        )
    };

    let error_span = if let Some(ref error) = app.error_message {
        Span::styled(
            format!(" {error} "),
            Style::default().fg(Color::Red),
        )
    } else {
        Span::raw("")
    };

    let page_info = format!(" page {}/{} ", app.page.current_page, app.page.total_pages);

    let spans = vec![
        Span::styled(
            format!(" {} ", app.fetch_status.label()),
            Style::default().fg(status_color),
        ),
        Span::raw("│"),
        balance_span,
        Span::raw("│"),
        filter_span,
        search_span,
        Span::raw("│"),
        error_span,
        Span::raw(format!(
            "{:>width$}",
            page_info,
            width = area.width.saturating_sub(40) as usize
        )),
    ];

    let para = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(para, area);
}
