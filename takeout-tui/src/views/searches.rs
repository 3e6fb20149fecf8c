//! Search history view.

use super::watch::render_videos;
use crate::nav::Tab;
use crate::state::App;
use ratatui::{layout::Rect, Frame};

pub fn render(f: &mut Frame<'_>, app: &App, area: Rect) {
    render_videos(f, app, Tab::SearchHistory, &app.searches, area);
}
