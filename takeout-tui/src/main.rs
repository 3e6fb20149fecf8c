//! Takeout Lens entry point.

use crossterm::{
    event::{self, Event as CrosstermEvent, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use takeout_api::Page;
use takeout_tui::api_client::RestClient;
use takeout_tui::bulk;
use takeout_tui::config::{TuiConfig, Variant};
use takeout_tui::coordinator::{Completion, FetchOutcome, FetchRequest, FetchToken};
use takeout_tui::error::TuiError;
use takeout_tui::events::{PageItems, TuiEvent};
use takeout_tui::keys::{map_key, Action};
use takeout_tui::nav::Tab;
use takeout_tui::notifications::NotificationLevel;
use takeout_tui::state::{App, InputMode};
use takeout_tui::views::render_view;
use tokio::sync::mpsc;

const TICK_MS: u64 = 500;

#[tokio::main]
async fn main() -> Result<(), TuiError> {
    let config = TuiConfig::load()?;
    let _log_guard = takeout_tui::logging::init(&config.log_dir)?;
    let api = RestClient::new(&config)?;
    let mut app = App::new(config, api);

    let mut terminal = setup_terminal()?;
    let _guard = TerminalGuard {};

    let (event_tx, mut event_rx) = mpsc::channel::<TuiEvent>(256);
    spawn_input_reader(event_tx.clone());

    for request in app.coordinator.initial_requests() {
        dispatch(&app, &event_tx, request);
    }

    let mut ticker = tokio::time::interval(Duration::from_millis(TICK_MS));

    loop {
        terminal.draw(|f| render_view(f, &app))?;

        tokio::select! {
            _ = ticker.tick() => {
                app.prune_notifications();
            }
            Some(event) = event_rx.recv() => {
                if handle_event(&mut app, &event_tx, event) {
                    break;
                }
            }
        }
    }

    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>, TuiError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen);
    }
}

fn spawn_input_reader(sender: mpsc::Sender<TuiEvent>) {
    std::thread::spawn(move || loop {
        if let Ok(true) = event::poll(Duration::from_millis(200)) {
            if let Ok(evt) = event::read() {
                match evt {
                    CrosstermEvent::Key(key) => {
                        let _ = sender.blocking_send(TuiEvent::Input(key));
                    }
                    CrosstermEvent::Resize(width, height) => {
                        let _ = sender.blocking_send(TuiEvent::Resize { width, height });
                    }
                    _ => {}
                }
            }
        }
    });
}

fn handle_event(app: &mut App, tx: &mpsc::Sender<TuiEvent>, event: TuiEvent) -> bool {
    match event {
        TuiEvent::Input(key) => {
            if app.input_mode == InputMode::Search {
                handle_search_input(app, tx, key.code, key.modifiers);
                return app.should_quit;
            }
            if let Some(action) = map_key(key) {
                return handle_action(app, tx, action);
            }
        }
        TuiEvent::Page { token, result } => handle_page(app, tx, token, result),
        TuiEvent::Resize { .. } => {}
    }
    false
}

fn handle_search_input(
    app: &mut App,
    tx: &mpsc::Sender<TuiEvent>,
    code: KeyCode,
    modifiers: KeyModifiers,
) {
    if modifiers.contains(KeyModifiers::CONTROL) {
        if code == KeyCode::Char('c') {
            app.should_quit = true;
        }
        return;
    }
    match code {
        KeyCode::Enter => {
            app.close_search();
            let draft = app.search_input.buffer.clone();
            if let Some(request) = app.coordinator.set_search_query(draft) {
                dispatch(app, tx, request);
            }
        }
        KeyCode::Esc => app.close_search(),
        KeyCode::Backspace => app.search_input.backspace(),
        KeyCode::Char(c) => app.search_input.push(c),
        _ => {}
    }
}

fn handle_action(app: &mut App, tx: &mpsc::Sender<TuiEvent>, action: Action) -> bool {
    match action {
        Action::Quit => return true,
        Action::NextTab => {
            let target = app.coordinator.active_tab().next();
            if let Some(request) = app.coordinator.set_active_tab(target) {
                dispatch(app, tx, request);
            }
        }
        Action::PrevTab => {
            let target = app.coordinator.active_tab().previous();
            if let Some(request) = app.coordinator.set_active_tab(target) {
                dispatch(app, tx, request);
            }
        }
        Action::SwitchTab(index) => {
            if let Some(target) = Tab::from_index(index) {
                if let Some(request) = app.coordinator.set_active_tab(target) {
                    dispatch(app, tx, request);
                }
            }
        }
        Action::NextPage => {
            if let Some(request) = app.coordinator.go_to_page(1) {
                dispatch(app, tx, request);
            }
        }
        Action::PrevPage => {
            if let Some(request) = app.coordinator.go_to_page(-1) {
                dispatch(app, tx, request);
            }
        }
        Action::ScrollDown => app.scroll_down(),
        Action::ScrollUp => app.scroll_up(),
        Action::CycleSort => {
            let next = app.coordinator.sort_mode().cycle();
            app.notify(NotificationLevel::Info, format!("Sort: {}", next.label()));
            if let Some(request) = app.coordinator.set_sort_mode(next) {
                dispatch(app, tx, request);
            }
        }
        Action::OpenSearch => app.open_search(),
        Action::ToggleTheme => app.toggle_theme(),
        Action::Refresh => {
            // In bulk mode a refresh re-pulls the collection from the
            // service rather than re-slicing the cached copy.
            let tab = app.coordinator.active_tab();
            app.bulk.loaded[tab] = false;
            let request = app.coordinator.force_refresh();
            dispatch(app, tx, request);
        }
        Action::Confirm | Action::Cancel => {}
    }
    app.should_quit
}

/// Route a fetch either to the service or, for an already-cached bulk
/// collection, straight back through the event channel as a local slice.
fn dispatch(app: &App, tx: &mpsc::Sender<TuiEvent>, request: FetchRequest) {
    let tab = request.token.tab;
    if app.config.variant == Variant::Bulk && app.bulk.loaded[tab] {
        let result = Ok(bulk_slice(app, tab));
        let _ = tx.try_send(TuiEvent::Page {
            token: request.token,
            result,
        });
        return;
    }
    spawn_fetch(app.api.clone(), tx.clone(), request);
}

fn spawn_fetch(api: RestClient, tx: mpsc::Sender<TuiEvent>, request: FetchRequest) {
    tokio::spawn(async move {
        let FetchRequest { token, query } = request;
        tracing::debug!(tab = ?token.tab, page = query.page, generation = token.generation, "fetching");
        let result = match token.tab {
            Tab::WatchHistory => api.watch_history(&query).await.map(PageItems::Videos),
            Tab::SearchHistory => api.search_history(&query).await.map(PageItems::Videos),
            Tab::Comments => api.comments(&query).await.map(PageItems::Comments),
            Tab::Notes => api.keep_notes(&query).await.map(PageItems::Notes),
        }
        .map_err(|err| err.to_string());

        if let Err(error) = &result {
            tracing::warn!(tab = ?token.tab, page = query.page, %error, "fetch failed");
        }
        let _ = tx.send(TuiEvent::Page { token, result }).await;
    });
}

fn handle_page(
    app: &mut App,
    tx: &mpsc::Sender<TuiEvent>,
    token: FetchToken,
    result: Result<PageItems, String>,
) {
    let tab = token.tab;
    match result {
        Ok(items) => {
            let items = if app.config.variant == Variant::Bulk {
                if !app.bulk.loaded[tab] {
                    store_bulk(app, tab, items);
                }
                bulk_slice(app, tab)
            } else {
                items
            };
            let outcome = FetchOutcome::Loaded {
                total_pages: items.total_pages(),
                total_count: items.total_count(),
            };
            match app.coordinator.complete(token, outcome) {
                Completion::Stale => {
                    tracing::debug!(tab = ?tab, generation = token.generation, "dropped stale page");
                }
                Completion::Applied => app.apply_page(tab, items),
                Completion::Refetch(request) => {
                    app.apply_page(tab, items);
                    dispatch(app, tx, request);
                }
            }
        }
        Err(message) => {
            if app.coordinator.complete(token, FetchOutcome::Failed) == Completion::Applied {
                app.notify(
                    NotificationLevel::Error,
                    format!("{}: {}", tab.title(), message),
                );
            }
        }
    }
}

/// Remember a bulk service's full collection for local re-slicing.
fn store_bulk(app: &mut App, tab: Tab, items: PageItems) {
    match (tab, items) {
        (Tab::WatchHistory, PageItems::Videos(page)) => app.bulk.watch = page.items,
        (Tab::SearchHistory, PageItems::Videos(page)) => app.bulk.searches = page.items,
        (Tab::Comments, PageItems::Comments(page)) => app.bulk.comments = page.items,
        (Tab::Notes, PageItems::Notes(page)) => app.bulk.notes = page.items,
        (tab, _) => {
            tracing::warn!(?tab, "mismatched bulk shape for tab");
            return;
        }
    }
    app.bulk.loaded[tab] = true;
}

/// Slice the cached collection with the current search and sort.
fn bulk_slice(app: &App, tab: Tab) -> PageItems {
    let search = app.coordinator.search_query();
    let sort = app.coordinator.sort_mode();
    match tab {
        Tab::WatchHistory => PageItems::Videos(to_page(bulk::select(&app.bulk.watch, search, sort))),
        Tab::SearchHistory => {
            PageItems::Videos(to_page(bulk::select(&app.bulk.searches, search, sort)))
        }
        Tab::Comments => PageItems::Comments(to_page(bulk::select(&app.bulk.comments, search, sort))),
        Tab::Notes => PageItems::Notes(to_page(bulk::select(&app.bulk.notes, search, sort))),
    }
}

fn to_page<T>(selection: bulk::Selection<T>) -> Page<T> {
    Page {
        items: selection.items,
        total_pages: 1,
        total_count: selection.total_count,
    }
}
