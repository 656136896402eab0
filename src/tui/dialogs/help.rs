//! Help dialog
//!
//! Keyboard shortcuts for the current route

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::App;
use crate::tui::layout::centered_rect;
use crate::tui::route::Route;

/// Render the help dialog
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = centered_rect(60, 70, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    frame.render_widget(
        Paragraph::new(help_lines(app.route))
            .block(block)
            .wrap(Wrap { trim: false }),
        area,
    );
}

fn help_lines(route: Route) -> Vec<Line<'static>> {
    let mut lines = vec![
        section("Global"),
        key_line("q", "Quit"),
        key_line("Ctrl+c", "Quit from anywhere"),
        key_line("?", "Show/hide help"),
        Line::from(""),
    ];

    match route {
        Route::Listing => {
            lines.push(section("Items"));
            lines.push(key_line("j/k", "Move selection"));
            lines.push(key_line("g/G", "First/last item"));
            lines.push(key_line("a/n", "New item"));
            lines.push(key_line("e/Enter", "Edit item"));
            lines.push(key_line("d", "Delete item"));
        }
        Route::Create | Route::Edit(_) => {
            lines.push(section("Editor"));
            lines.push(key_line("Tab", "Next field"));
            lines.push(key_line("h/l", "Switch income/outcome"));
            lines.push(key_line("j/k", "Move in category list"));
            lines.push(key_line("Enter", "Pick category / save"));
            lines.push(key_line("Ctrl+s", "Save"));
            lines.push(key_line("Esc", "Discard and go back"));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press ? or Esc to close",
        Style::default().fg(Color::DarkGray),
    )));
    lines
}

fn section(title: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        title,
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    ))
}

fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>10}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}
