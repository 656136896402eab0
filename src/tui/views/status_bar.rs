//! Status bar and header
//!
//! The header shows the current route with income, outcome and balance
//! totals; the status bar shows the last message and key hints.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::Totals;
use crate::tui::app::App;
use crate::tui::route::Route;

/// Render the header with totals
pub fn render_header(frame: &mut Frame, app: &mut App, area: Rect) {
    let totals = Totals::of(&app.items(), &app.categories());
    let symbol = app.settings.currency_symbol.as_str();
    let balance = totals.balance();
    let balance_color = if balance.is_negative() {
        Color::Red
    } else {
        Color::Green
    };

    let line = Line::from(vec![
        Span::styled("Income ", Style::default().fg(Color::White)),
        Span::styled(
            totals.income.format_with_symbol(symbol),
            Style::default().fg(Color::Green),
        ),
        Span::raw("  │  "),
        Span::styled("Outcome ", Style::default().fg(Color::White)),
        Span::styled(
            totals.outcome.format_with_symbol(symbol),
            Style::default().fg(Color::Red),
        ),
        Span::raw("  │  "),
        Span::styled("Balance ", Style::default().fg(Color::White)),
        Span::styled(
            balance.format_with_symbol(symbol),
            Style::default()
                .fg(balance_color)
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    let block = Block::default()
        .title(format!(" Pocketbook  {} ", app.route))
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Render the status bar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let mut spans = vec![];

    if let Some(ref message) = app.status_message {
        let color = if message.starts_with("Error") {
            Color::Red
        } else {
            Color::Yellow
        };
        spans.push(Span::styled(
            format!(" {}", message),
            Style::default().fg(color),
        ));
    }

    let hints = match app.route {
        Route::Listing => " a:Add  e:Edit  d:Delete  ?:Help  q:Quit ",
        Route::Create | Route::Edit(_) => " Tab:Next  Enter:Select/Save  Esc:Cancel ",
    };

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize)
        .saturating_sub(left_len)
        .saturating_sub(hints.len());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
