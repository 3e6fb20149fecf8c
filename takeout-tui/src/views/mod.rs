//! View rendering dispatch.

pub mod comments;
pub mod helpers;
pub mod notes;
pub mod searches;
pub mod watch;

use crate::nav::Tab;
use crate::state::{App, InputMode};
use crate::theme::notification_color;
use crate::widgets::{Pager, SearchBar, TabBar};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render_view(f: &mut Frame<'_>, app: &App) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Length(2),
        ])
        .split(f.size());

    let active = app.coordinator.active_tab();

    TabBar {
        active,
        counts: crate::nav::TabMap::new(|tab| app.coordinator.total_count(tab)),
        theme: &app.theme,
    }
    .render(f, layout[0]);

    let editing = app.input_mode == InputMode::Search;
    SearchBar {
        text: if editing {
            &app.search_input.buffer
        } else {
            app.coordinator.search_query()
        },
        editing,
        theme: &app.theme,
    }
    .render(f, layout[1]);

    match active {
        Tab::WatchHistory => watch::render(f, app, layout[2]),
        Tab::SearchHistory => searches::render(f, app, layout[2]),
        Tab::Comments => comments::render(f, app, layout[2]),
        Tab::Notes => notes::render(f, app, layout[2]),
    }

    Pager {
        page: app.coordinator.page(active),
        total_pages: app.coordinator.total_pages(active),
        total_count: app.coordinator.total_count(active),
        sort_label: app.coordinator.sort_mode().label(),
        loading: app.coordinator.is_loading(active),
        theme: &app.theme,
    }
    .render(f, layout[3]);

    render_footer(f, app, layout[4]);
}

fn render_footer(f: &mut Frame<'_>, app: &App, area: Rect) {
    let help = match app.input_mode {
        InputMode::Search => "type to filter • Enter apply • Esc cancel",
        InputMode::Normal => {
            "Tab/1-4 switch • h/l page • j/k move • / search • s sort • d theme • Ctrl-R refresh • q quit"
        }
    };
    let (text, style) = if let Some(note) = app.notifications.last() {
        (
            note.message.clone(),
            Style::default().fg(notification_color(note.level, &app.theme)),
        )
    } else {
        (help.to_string(), Style::default().fg(app.theme.text_dim))
    };
    let footer = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL))
        .style(style);
    f.render_widget(footer, area);
}
