//! Mutation history table.

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};

use crate::models::mutation::{MutationKind, MutationRecord};
use crate::tui::app::{App, Mode};

use super::rupiah;

/// Renders the mutation table with its chain-violation warning line.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let title = table_title(app);
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut table_area = inner;

    // Violation warning eats the first inner row when present.
    if !app.violations.is_empty() {
        let warning = Line::from(Span::styled(
            format!(
                " ⚠ {} balance chain break(s) in loaded history",
                app.violations.len()
            ),
            Style::default().fg(Color::Yellow),
        ));
        let warning_area = Rect { height: 1, ..inner };
        frame.render_widget(Paragraph::new(warning), warning_area);
        table_area = Rect {
            y: inner.y + 1,
            height: inner.height.saturating_sub(1),
            ..inner
        };
    }

    if app.page.items.is_empty() {
        let empty = Line::from(Span::styled(
            " no mutations match the current view",
            Style::default().fg(Color::DarkGray),
        ));
        frame.render_widget(Paragraph::new(empty), table_area);
        return;
    }

    let header = Row::new(vec![
        Cell::from("When"),
        Cell::from(""),
        Cell::from("Amount"),
        Cell::from("Balance after"),
        Cell::from("Transaction"),
        Cell::from("Description"),
    ])
    .style(Style::default().add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = app.page.items.iter().map(mutation_row).collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(16),
            Constraint::Length(1),
            Constraint::Length(14),
            Constraint::Length(14),
            Constraint::Length(20),
            Constraint::Min(20),
        ],
    )
    .header(header)
    .column_spacing(1);

    frame.render_widget(table, table_area);
}

/// Table title doubles as the search prompt while editing.
fn table_title(app: &App) -> String {
    if app.mode == Mode::Search {
        // Cursor shown as a trailing underscore; simple but unambiguous.
        format!(" Mutations — search: {}_ ", app.search_input)
    } else {
        format!(
            " Mutations ({} matched) ",
            app.page.total_matched
        )
    }
}

fn mutation_row(mutation: &MutationRecord) -> Row<'_> {
    let (arrow, color) = match mutation.kind {
        MutationKind::Credit => ("▲", Color::Green),
        MutationKind::Debit => ("▼", Color::Red),
    };

    let transaction_code = mutation
        .transaction
        .as_ref()
        .map(|t| t.transaction_code.as_str())
        .unwrap_or("—");

    Row::new(vec![
        Cell::from(mutation.created_at.format("%d %b %H:%M:%S").to_string()),
        Cell::from(Span::styled(arrow, Style::default().fg(color))),
        Cell::from(Span::styled(
            rupiah(mutation.amount),
            Style::default().fg(color),
        )),
        Cell::from(rupiah(mutation.balance_after)),
        Cell::from(transaction_code.to_string()),
        Cell::from(mutation.description.clone()),
    ])
}
