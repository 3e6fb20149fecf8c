//! Search bar widget.

use crate::theme::Theme;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub struct SearchBar<'a> {
    /// Draft text while editing, committed query otherwise.
    pub text: &'a str,
    pub editing: bool,
    pub theme: &'a Theme,
}

impl SearchBar<'_> {
    pub fn render(&self, f: &mut Frame<'_>, area: Rect) {
        let (title, border, text_style) = if self.editing {
            (
                "Search (Enter apply, Esc cancel)",
                self.theme.border_focus,
                Style::default().fg(self.theme.text),
            )
        } else {
            (
                "Search [/]",
                self.theme.border,
                Style::default().fg(self.theme.text_dim),
            )
        };

        let display = if self.editing {
            format!("{}\u{2588}", self.text)
        } else if self.text.is_empty() {
            "(none)".to_string()
        } else {
            self.text.to_string()
        };

        let bar = Paragraph::new(display).style(text_style).block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        );
        f.render_widget(bar, area);
    }
}
