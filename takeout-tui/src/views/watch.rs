//! Watch history view, also hosting the shared video list renderer.

use super::helpers::{format_date, highlight_style, list_detail_split, render_empty, truncate};
use crate::nav::Tab;
use crate::state::{App, CollectionState};
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};
use takeout_api::VideoEntry;

pub fn render(f: &mut Frame<'_>, app: &App, area: Rect) {
    render_videos(f, app, Tab::WatchHistory, &app.watch, area);
}

/// Search history shows the same shape, so both video tabs render here.
pub(crate) fn render_videos(
    f: &mut Frame<'_>,
    app: &App,
    tab: Tab,
    videos: &CollectionState<VideoEntry>,
    area: Rect,
) {
    if videos.items.is_empty() {
        render_empty(f, app, tab, area);
        return;
    }

    let (list_area, detail_area) = list_detail_split(area);

    let items: Vec<ListItem> = videos
        .items
        .iter()
        .map(|video| {
            let marker = if video.is_ad() { " [ad]" } else { "" };
            ListItem::new(format!(
                "{}  {}{}",
                format_date(video.timestamp()),
                truncate(video.display_text(), 60),
                marker
            ))
        })
        .collect();

    let mut state = ListState::default();
    state.select(Some(videos.selected));

    let list = List::new(items)
        .block(Block::default().title(tab.title()).borders(Borders::ALL))
        .style(Style::default().fg(app.theme.text))
        .highlight_style(highlight_style(&app.theme));
    f.render_stateful_widget(list, list_area, &mut state);

    if let Some(video) = videos.selected_item() {
        render_detail(f, app, video, detail_area);
    }
}

fn render_detail(f: &mut Frame<'_>, app: &App, video: &VideoEntry, area: Rect) {
    let mut lines = vec![
        video.display_text().to_string(),
        String::new(),
        format!("When: {}", format_date(video.timestamp())),
    ];
    if let Some(url) = &video.title_url {
        lines.push(format!("Link: {}", url));
    }
    if !video.details.is_empty() {
        lines.push(format!("Details: {}", video.details.join(", ")));
    }

    let detail = Paragraph::new(lines.join("\n"))
        .block(Block::default().title("Details").borders(Borders::ALL))
        .style(Style::default().fg(app.theme.text))
        .wrap(Wrap { trim: false });
    f.render_widget(detail, area);
}
