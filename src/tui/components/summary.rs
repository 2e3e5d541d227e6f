//! Balance snapshot and ledger summary panel.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::tui::app::App;

use super::{rupiah, signed_rupiah};

/// Renders the balance panel (left) and ledger aggregates (right).
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_balance(frame, halves[0], app);
    render_ledger_totals(frame, halves[1], app);
}

fn render_balance(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Wallet ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines: Vec<Line> = match &app.balance {
        Some(snapshot) => vec![
            Line::from(vec![
                Span::raw("Balance    "),
                Span::styled(
                    rupiah(snapshot.balance),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::raw("Available  "),
                Span::styled(rupiah(snapshot.available_balance), Style::default().fg(Color::Cyan)),
            ]),
            Line::from(vec![
                Span::raw("Bonus      "),
                Span::styled(rupiah(snapshot.bonus_balance), Style::default().fg(Color::Green)),
            ]),
            Line::from(vec![
                Span::raw("On hold    "),
                Span::styled(rupiah(snapshot.hold_amount), Style::default().fg(Color::Yellow)),
            ]),
        ],
        None => vec![Line::from(Span::styled(
            "no snapshot loaded",
            Style::default().fg(Color::DarkGray),
        ))],
    };

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_ledger_totals(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Ledger (loaded window) ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let summary = &app.summary;
    let net_color = if summary.net >= 0 {
        Color::Green
    } else {
        Color::Red
    };

    let lines = vec![
        Line::from(vec![
            Span::raw("Credits  "),
            Span::styled(
                format!("{:>3}x  {}", summary.credit_count, rupiah(summary.total_credit)),
                Style::default().fg(Color::Green),
            ),
        ]),
        Line::from(vec![
            Span::raw("Debits   "),
            Span::styled(
                format!("{:>3}x  {}", summary.debit_count, rupiah(summary.total_debit)),
                Style::default().fg(Color::Red),
            ),
        ]),
        Line::from(vec![
            Span::raw("Net      "),
            Span::styled(signed_rupiah(summary.net), Style::default().fg(net_color)),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
