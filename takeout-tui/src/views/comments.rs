//! YouTube comments view.

use super::helpers::{format_date, highlight_style, list_detail_split, render_empty, truncate};
use crate::nav::Tab;
use crate::state::App;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

pub fn render(f: &mut Frame<'_>, app: &App, area: Rect) {
    if app.comments.items.is_empty() {
        render_empty(f, app, Tab::Comments, area);
        return;
    }

    let (list_area, detail_area) = list_detail_split(area);

    let items: Vec<ListItem> = app
        .comments
        .items
        .iter()
        .map(|comment| {
            ListItem::new(format!(
                "{}  {}",
                format_date(comment.timestamp()),
                truncate(comment.display_text(), 60)
            ))
        })
        .collect();

    let mut state = ListState::default();
    state.select(Some(app.comments.selected));

    let list = List::new(items)
        .block(Block::default().title("Comments").borders(Borders::ALL))
        .style(Style::default().fg(app.theme.text))
        .highlight_style(highlight_style(&app.theme));
    f.render_stateful_widget(list, list_area, &mut state);

    if let Some(comment) = app.comments.selected_item() {
        let lines = vec![
            comment.display_text().to_string(),
            String::new(),
            format!("When: {}", format_date(comment.timestamp())),
            format!("Video: {}", comment.video_id),
            format!("Link: {}", comment.permalink()),
        ];
        let detail = Paragraph::new(lines.join("\n"))
            .block(Block::default().title("Comment").borders(Borders::ALL))
            .style(Style::default().fg(app.theme.text))
            .wrap(Wrap { trim: false });
        f.render_widget(detail, detail_area);
    }
}
