//! Item listing view
//!
//! Shows every item, newest first, with its category and signed amount.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::models::{Category, CategoryType};
use crate::tui::app::App;

/// Render the item table
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title(" Items ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let items = app.items();
    if items.is_empty() {
        let text = Paragraph::new("No items yet. Press 'a' to add one.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let categories = app.categories();
    let symbol = app.settings.currency_symbol.as_str();
    let date_format = app.settings.display_date_format();

    let widths = [
        Constraint::Length(12), // Date
        Constraint::Min(20),    // Title
        Constraint::Length(16), // Category
        Constraint::Length(8),  // Type
        Constraint::Length(14), // Amount
    ];

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let header = Row::new(vec![
        Cell::from("Date").style(bold),
        Cell::from("Title").style(bold),
        Cell::from("Category").style(bold),
        Cell::from("Type").style(bold),
        Cell::from("Amount").style(bold),
    ])
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    let rows: Vec<Row> = items
        .iter()
        .map(|item| {
            let category = find_category(&categories, item.cid);
            let (category_name, kind_label, amount, color) = match category {
                Some(c) => (
                    c.name.clone(),
                    c.kind.label(),
                    item.signed_amount(c.kind),
                    kind_color(c.kind),
                ),
                None => ("Unknown".to_string(), "-", item.amount, Color::DarkGray),
            };

            Row::new(vec![
                Cell::from(item.date.format(date_format).to_string()),
                Cell::from(truncate(&item.title, 40)),
                Cell::from(truncate(&category_name, 16)),
                Cell::from(kind_label),
                Cell::from(amount.format_with_symbol(symbol)).style(Style::default().fg(color)),
            ])
        })
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(app.selected_index));
    frame.render_stateful_widget(table, area, &mut state);
}

fn find_category(categories: &[Category], id: crate::models::CategoryId) -> Option<&Category> {
    categories.iter().find(|c| c.id == id)
}

fn kind_color(kind: CategoryType) -> Color {
    match kind {
        CategoryType::Income => Color::Green,
        CategoryType::Outcome => Color::Red,
    }
}

/// Truncate to `max_len` characters, marking the cut with an ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Coffee", 10), "Coffee");
        assert_eq!(truncate("Weekend in Lisbon", 8), "Weekend…");
        assert_eq!(truncate("café crème", 5), "café…");
    }
}
