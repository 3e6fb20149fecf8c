//! Tab bar widget.

use crate::nav::{Tab, TabMap};
use crate::theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Tabs},
    Frame,
};

pub struct TabBar<'a> {
    pub active: Tab,
    /// Total item count per tab, shown next to each title.
    pub counts: TabMap<u64>,
    pub theme: &'a Theme,
}

impl TabBar<'_> {
    pub fn render(&self, f: &mut Frame<'_>, area: Rect) {
        let titles: Vec<Line> = Tab::all()
            .iter()
            .enumerate()
            .map(|(i, &tab)| {
                Line::from(format!(" {} {} ({}) ", i + 1, tab.title(), self.counts[tab]))
            })
            .collect();

        let tabs = Tabs::new(titles)
            .select(self.active.index())
            .block(Block::default().borders(Borders::ALL).title("Takeout Lens"))
            .style(Style::default().fg(self.theme.text_dim))
            .highlight_style(
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::BOLD),
            );
        f.render_widget(tabs, area);
    }
}
