//! Create/edit item view
//!
//! Income/outcome tabs, the category list for the selected tab, the text
//! fields, and inline errors.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs},
    Frame,
};

use crate::models::CategoryType;
use crate::tui::app::App;
use crate::tui::editor::{EditorField, ItemEditor};

/// Render the editor into `area`
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let Some(editor) = app.editor.as_ref() else {
        return;
    };

    let title = match (editor.is_edit(), editor.edit_item()) {
        (false, _) => " New item ".to_string(),
        (true, Some(item)) => format!(" Edit '{}' ", item.title),
        (true, None) => " Edit item (not found) ".to_string(),
    };
    let block = Block::default()
        .title(title)
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // Tabs
            Constraint::Length(1), // Spacer
            Constraint::Min(3),    // Categories
            Constraint::Length(1), // Category error
            Constraint::Length(1), // Title
            Constraint::Length(1), // Amount
            Constraint::Length(1), // Date
            Constraint::Length(1), // Form error
            Constraint::Length(1), // Hints
        ])
        .split(inner);

    render_tabs(frame, editor, chunks[0]);
    render_categories(frame, editor, chunks[2]);

    if editor.category_error() {
        frame.render_widget(
            Paragraph::new("Please select a category").style(Style::default().fg(Color::Red)),
            chunks[3],
        );
    }

    frame.render_widget(&editor.form.title_input, chunks[4]);
    frame.render_widget(&editor.form.amount_input, chunks[5]);
    frame.render_widget(&editor.form.date_input, chunks[6]);

    if let Some(message) = editor.form_error() {
        frame.render_widget(
            Paragraph::new(message.to_string()).style(Style::default().fg(Color::Red)),
            chunks[7],
        );
    } else if editor.is_submitting() {
        frame.render_widget(
            Paragraph::new("Saving...").style(Style::default().fg(Color::Yellow)),
            chunks[7],
        );
    }

    let hints = Line::from(vec![
        Span::styled("[Tab]", Style::default().fg(Color::Cyan)),
        Span::raw(" Next field  "),
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Select/Save  "),
        Span::styled("[Ctrl+S]", Style::default().fg(Color::Green)),
        Span::raw(" Save  "),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[8]);
}

fn render_tabs(frame: &mut Frame, editor: &ItemEditor, area: Rect) {
    let focused = editor.form.focused_field == EditorField::Tabs;
    let highlight = if focused {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    };

    let tabs = Tabs::new(CategoryType::ALL.iter().map(|kind| kind.label()))
        .select(editor.selected_tab().index())
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(highlight)
        .divider("|");
    frame.render_widget(tabs, area);
}

fn render_categories(frame: &mut Frame, editor: &ItemEditor, area: Rect) {
    let focused = editor.form.focused_field == EditorField::Category;
    let border_color = if focused { Color::Cyan } else { Color::DarkGray };
    let block = Block::default()
        .title(" Category ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let categories = editor.filtered_categories();
    if categories.is_empty() {
        frame.render_widget(
            Paragraph::new(format!("No {} categories", editor.selected_tab().label().to_lowercase()))
                .block(block)
                .style(Style::default().fg(Color::DarkGray)),
            area,
        );
        return;
    }

    let selected = editor.selected_category_id();
    let items: Vec<ListItem> = categories
        .iter()
        .map(|category| {
            let is_selected = selected == Some(category.id);
            let marker = if is_selected { "● " } else { "  " };
            let style = if is_selected {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(format!("{}{}", marker, category.name)).style(style)
        })
        .collect();

    let list = List::new(items).block(block).highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    );

    let mut state = ListState::default();
    if focused {
        state.select(Some(editor.category_cursor));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

/// Handle a key while the editor is mounted
pub fn handle_key(app: &mut App, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => {
            app.cancel_editor();
            return;
        }
        KeyCode::Char('s') if ctrl => {
            app.submit_editor();
            return;
        }
        _ => {}
    }

    let Some(editor) = app.editor.as_mut() else {
        return;
    };

    let mut submit = false;
    match key.code {
        KeyCode::Tab => editor.form.next_field(),
        KeyCode::BackTab => editor.form.prev_field(),
        code => match editor.form.focused_field {
            EditorField::Tabs => match code {
                KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('1') => {
                    editor.select_tab_index(0)
                }
                KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('2') => {
                    editor.select_tab_index(1)
                }
                KeyCode::Enter | KeyCode::Down => editor.form.set_focus(EditorField::Category),
                _ => {}
            },
            EditorField::Category => match code {
                KeyCode::Up | KeyCode::Char('k') => editor.cursor_up(),
                KeyCode::Down | KeyCode::Char('j') => editor.cursor_down(),
                KeyCode::Left | KeyCode::Right | KeyCode::Char('h') | KeyCode::Char('l') => {
                    editor.toggle_tab()
                }
                KeyCode::Enter | KeyCode::Char(' ') => editor.select_highlighted(),
                _ => {}
            },
            EditorField::Title | EditorField::Amount | EditorField::Date => match code {
                KeyCode::Enter => submit = true,
                KeyCode::Backspace => editor.edit_input(|input| input.backspace()),
                KeyCode::Delete => editor.edit_input(|input| input.delete()),
                KeyCode::Left => editor.edit_input(|input| input.move_left()),
                KeyCode::Right => editor.edit_input(|input| input.move_right()),
                KeyCode::Home => editor.edit_input(|input| input.move_start()),
                KeyCode::End => editor.edit_input(|input| input.move_end()),
                KeyCode::Char(c) if !ctrl => editor.edit_input(|input| input.insert(c)),
                _ => {}
            },
        },
    }

    if submit {
        app.submit_editor();
    }
}
