//! Keep notes view.

use super::helpers::{format_date, highlight_style, list_detail_split, render_empty, truncate};
use crate::nav::Tab;
use crate::state::App;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};
use takeout_api::NoteEntry;

pub fn render(f: &mut Frame<'_>, app: &App, area: Rect) {
    if app.notes.items.is_empty() {
        render_empty(f, app, Tab::Notes, area);
        return;
    }

    let (list_area, detail_area) = list_detail_split(area);

    let items: Vec<ListItem> = app
        .notes
        .items
        .iter()
        .map(|note| {
            let pin = if note.is_pinned { "\u{1f4cc} " } else { "" };
            ListItem::new(format!(
                "{}  {}{}",
                format_date(note.timestamp()),
                pin,
                truncate(note.display_text(), 58)
            ))
        })
        .collect();

    let mut state = ListState::default();
    state.select(Some(app.notes.selected));

    let list = List::new(items)
        .block(Block::default().title("Keep Notes").borders(Borders::ALL))
        .style(Style::default().fg(app.theme.text))
        .highlight_style(highlight_style(&app.theme));
    f.render_stateful_widget(list, list_area, &mut state);

    if let Some(note) = app.notes.selected_item() {
        render_detail(f, app, note, detail_area);
    }
}

fn render_detail(f: &mut Frame<'_>, app: &App, note: &NoteEntry, area: Rect) {
    let mut lines = Vec::new();
    if let Some(title) = &note.title {
        if !title.is_empty() {
            lines.push(title.clone());
            lines.push(String::new());
        }
    }

    let mut flags = Vec::new();
    if note.is_pinned {
        flags.push("pinned");
    }
    if note.is_archived {
        flags.push("archived");
    }
    if note.is_trashed {
        flags.push("trashed");
    }
    if !flags.is_empty() {
        lines.push(format!("Flags: {}", flags.join(", ")));
    }
    lines.push(format!("Created: {}", format_date(note.created_at)));
    if let Some(edited) = note.edited_at {
        lines.push(format!("Edited: {}", format_date(edited)));
    }
    lines.push(String::new());

    if note.is_checklist() {
        for item in &note.list_content {
            let mark = if item.checked { "[x]" } else { "[ ]" };
            lines.push(format!("{} {}", mark, item.text));
        }
    } else if let Some(text) = &note.text_content {
        lines.push(text.clone());
    }

    let detail = Paragraph::new(lines.join("\n"))
        .block(Block::default().title("Note").borders(Borders::ALL))
        .style(Style::default().fg(app.theme.text))
        .wrap(Wrap { trim: false });
    f.render_widget(detail, area);
}
