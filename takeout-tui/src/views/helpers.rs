//! Common view rendering helpers.

use crate::coordinator::FetchPhase;
use crate::nav::Tab;
use crate::state::App;
use crate::theme::Theme;
use chrono::{DateTime, Utc};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn format_date(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M").to_string()
}

/// Truncate to a display width, appending an ellipsis when text was cut.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}\u{2026}", cut)
}

pub fn highlight_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.accent)
        .bg(theme.bg_highlight)
        .add_modifier(Modifier::BOLD)
}

/// List on the left, detail for the selected row on the right.
pub fn list_detail_split(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Centered placeholder for a page with nothing on it.
pub fn render_empty(f: &mut Frame<'_>, app: &App, tab: Tab, area: Rect) {
    let message = match app.coordinator.phase(tab) {
        FetchPhase::Loading | FetchPhase::Idle => "Loading\u{2026}".to_string(),
        FetchPhase::Error => format!("Failed to load {}", tab.title()),
        FetchPhase::Loaded => {
            if app.coordinator.search_query().is_empty() {
                format!("No {} entries", tab.title())
            } else {
                format!("No matches for \"{}\"", app.coordinator.search_query())
            }
        }
    };
    let placeholder = Paragraph::new(message)
        .alignment(Alignment::Center)
        .style(Style::default().fg(app.theme.text_muted))
        .block(Block::default().borders(Borders::ALL).title(tab.title()));
    f.render_widget(placeholder, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_text() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello", 5), "hello");
    }

    #[test]
    fn truncate_appends_ellipsis() {
        let out = truncate("a very long title indeed", 10);
        assert_eq!(out.chars().count(), 10);
        assert!(out.ends_with('\u{2026}'));
    }

    #[test]
    fn truncate_counts_chars_not_bytes() {
        let out = truncate("ééééééé", 5);
        assert_eq!(out.chars().count(), 5);
    }
}
