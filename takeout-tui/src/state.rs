//! Application state and per-collection list state.

use crate::api_client::RestClient;
use crate::bulk::BulkStore;
use crate::config::TuiConfig;
use crate::coordinator::Coordinator;
use crate::events::PageItems;
use crate::nav::Tab;
use crate::notifications::{Notification, NotificationLevel};
use crate::theme::{Theme, ThemeMode};
use chrono::Utc;
use takeout_api::{CommentEntry, NoteEntry, VideoEntry};

/// Notifications older than this are dropped on tick.
const NOTIFICATION_TTL_SECONDS: i64 = 6;
const MAX_NOTIFICATIONS: usize = 4;

/// The currently visible page of one collection, plus the row highlight.
#[derive(Debug, Clone, Default)]
pub struct CollectionState<T> {
    pub items: Vec<T>,
    pub selected: usize,
}

impl<T> CollectionState<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            selected: 0,
        }
    }

    /// Replace the visible page. The highlight resets to the top; a shorter
    /// page can't leave it dangling past the end.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.selected = 0;
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.items.len() {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn selected_item(&self) -> Option<&T> {
        self.items.get(self.selected)
    }
}

/// Whether keystrokes act as commands or feed the search bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Search,
}

/// Draft text in the search bar. The committed query lives in the
/// coordinator; Esc throws the draft away without touching it.
#[derive(Debug, Clone, Default)]
pub struct SearchInput {
    pub buffer: String,
}

impl SearchInput {
    pub fn push(&mut self, c: char) {
        self.buffer.push(c);
    }

    pub fn backspace(&mut self) {
        self.buffer.pop();
    }
}

pub struct App {
    pub config: TuiConfig,
    pub theme_mode: ThemeMode,
    pub theme: Theme,
    pub api: RestClient,
    pub coordinator: Coordinator,

    pub watch: CollectionState<VideoEntry>,
    pub searches: CollectionState<VideoEntry>,
    pub comments: CollectionState<CommentEntry>,
    pub notes: CollectionState<NoteEntry>,

    pub input_mode: InputMode,
    pub search_input: SearchInput,
    pub notifications: Vec<Notification>,
    pub bulk: BulkStore,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: TuiConfig, api: RestClient) -> Self {
        let theme_mode = config.theme;
        let coordinator = Coordinator::new(config.per_page);
        Self {
            config,
            theme_mode,
            theme: Theme::for_mode(theme_mode),
            api,
            coordinator,
            watch: CollectionState::new(),
            searches: CollectionState::new(),
            comments: CollectionState::new(),
            notes: CollectionState::new(),
            input_mode: InputMode::Normal,
            search_input: SearchInput::default(),
            notifications: Vec::new(),
            bulk: BulkStore::default(),
            should_quit: false,
        }
    }

    pub fn toggle_theme(&mut self) {
        self.theme_mode = self.theme_mode.toggle();
        self.theme = Theme::for_mode(self.theme_mode);
    }

    /// Store a fetched page into the collection it belongs to. A mismatched
    /// shape means the service answered a video endpoint with notes or
    /// similar; the page is dropped and reported.
    pub fn apply_page(&mut self, tab: Tab, items: PageItems) {
        match (tab, items) {
            (Tab::WatchHistory, PageItems::Videos(page)) => self.watch.set_items(page.items),
            (Tab::SearchHistory, PageItems::Videos(page)) => self.searches.set_items(page.items),
            (Tab::Comments, PageItems::Comments(page)) => self.comments.set_items(page.items),
            (Tab::Notes, PageItems::Notes(page)) => self.notes.set_items(page.items),
            (tab, _) => {
                tracing::warn!(?tab, "mismatched page shape for tab");
                self.notify(
                    NotificationLevel::Error,
                    format!("Unexpected response shape for {}", tab.title()),
                );
            }
        }
    }

    /// Number of rows on the active tab's visible page.
    pub fn visible_len(&self, tab: Tab) -> usize {
        match tab {
            Tab::WatchHistory => self.watch.items.len(),
            Tab::SearchHistory => self.searches.items.len(),
            Tab::Comments => self.comments.items.len(),
            Tab::Notes => self.notes.items.len(),
        }
    }

    pub fn scroll_down(&mut self) {
        match self.coordinator.active_tab() {
            Tab::WatchHistory => self.watch.select_next(),
            Tab::SearchHistory => self.searches.select_next(),
            Tab::Comments => self.comments.select_next(),
            Tab::Notes => self.notes.select_next(),
        }
    }

    pub fn scroll_up(&mut self) {
        match self.coordinator.active_tab() {
            Tab::WatchHistory => self.watch.select_previous(),
            Tab::SearchHistory => self.searches.select_previous(),
            Tab::Comments => self.comments.select_previous(),
            Tab::Notes => self.notes.select_previous(),
        }
    }

    /// Open the search bar pre-filled with the committed query.
    pub fn open_search(&mut self) {
        self.search_input.buffer = self.coordinator.search_query().to_string();
        self.input_mode = InputMode::Search;
    }

    pub fn close_search(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn notify(&mut self, level: NotificationLevel, message: impl Into<String>) {
        self.notifications.push(Notification::new(level, message));
        if self.notifications.len() > MAX_NOTIFICATIONS {
            let excess = self.notifications.len() - MAX_NOTIFICATIONS;
            self.notifications.drain(..excess);
        }
    }

    /// Drop notifications past their time-to-live. Called on tick.
    pub fn prune_notifications(&mut self) {
        let now = Utc::now();
        self.notifications
            .retain(|n| n.age_seconds(now) < NOTIFICATION_TTL_SECONDS);
    }
}
