//! Pagination status line widget.

use crate::theme::Theme;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub struct Pager<'a> {
    pub page: u32,
    pub total_pages: u32,
    pub total_count: u64,
    pub sort_label: &'a str,
    pub loading: bool,
    pub theme: &'a Theme,
}

impl Pager<'_> {
    pub fn render(&self, f: &mut Frame<'_>, area: Rect) {
        let mut spans = vec![
            Span::styled(
                format!("Page {}/{}", self.page, self.total_pages.max(1)),
                Style::default().fg(self.theme.text),
            ),
            Span::styled(
                format!("  {} items", self.total_count),
                Style::default().fg(self.theme.text_dim),
            ),
            Span::styled(
                format!("  Sort: {}", self.sort_label),
                Style::default().fg(self.theme.text_dim),
            ),
        ];
        if self.loading {
            spans.push(Span::styled(
                "  Loading...",
                Style::default().fg(self.theme.warning),
            ));
        }

        let line = Paragraph::new(Line::from(spans))
            .block(Block::default().borders(Borders::ALL).title("Pages [h/l]"));
        f.render_widget(line, area);
    }
}
