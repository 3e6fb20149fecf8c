//! Pagination, search, and sort coordination across the four collections.
//!
//! Each tab owns its own page number and totals; the search query and sort
//! mode are shared. The coordinator guarantees that exactly one in-flight
//! fetch reflects the latest (page, search, sort) triple for a tab: every
//! request carries a generation token, a new request bumps the generation,
//! and completions with an old generation are dropped on arrival. In-flight
//! requests are never aborted — superseded responses simply lose.

use crate::nav::{Tab, TabMap};
use takeout_api::{PageQuery, SortMode};

/// Fetch lifecycle of one tab. `Loaded` and `Error` both return to `Loading`
/// on the next input change; there is no cancelled state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchPhase {
    #[default]
    Idle,
    Loading,
    Loaded,
    Error,
}

/// Identifies which issued fetch a response belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchToken {
    pub tab: Tab,
    pub generation: u64,
}

/// A fetch the caller must issue against the service.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchRequest {
    pub token: FetchToken,
    pub query: PageQuery,
}

/// Result of a finished fetch, as far as the coordinator cares: totals on
/// success, nothing on failure. Items go to the collection state separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    Loaded { total_pages: u32, total_count: u64 },
    Failed,
}

/// What happened to a completed fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum Completion {
    /// Current response; apply its items.
    Applied,
    /// A newer request for the tab was issued since; drop the response.
    Stale,
    /// Applied, but the totals shrank below the current page. The page was
    /// clamped and this follow-up fetch must be issued.
    Refetch(FetchRequest),
}

/// The (page, search, sort) triple a tab's last successful load was for.
#[derive(Debug, Clone, PartialEq, Eq)]
struct FetchKey {
    page: u32,
    search: String,
    sort: SortMode,
}

#[derive(Debug, Clone)]
pub struct Coordinator {
    active: Tab,
    search: String,
    sort: SortMode,
    per_page: u32,
    pages: TabMap<u32>,
    total_pages: TabMap<u32>,
    total_counts: TabMap<u64>,
    phases: TabMap<FetchPhase>,
    generations: TabMap<u64>,
    loaded_keys: TabMap<Option<FetchKey>>,
}

impl Coordinator {
    pub fn new(per_page: u32) -> Self {
        Self {
            active: Tab::WatchHistory,
            search: String::new(),
            sort: SortMode::Newest,
            per_page,
            pages: TabMap::fill(1),
            total_pages: TabMap::fill(1),
            total_counts: TabMap::fill(0),
            phases: TabMap::fill(FetchPhase::Idle),
            generations: TabMap::fill(0),
            loaded_keys: TabMap::fill(None),
        }
    }

    pub fn active_tab(&self) -> Tab {
        self.active
    }

    pub fn search_query(&self) -> &str {
        &self.search
    }

    pub fn sort_mode(&self) -> SortMode {
        self.sort
    }

    pub fn page(&self, tab: Tab) -> u32 {
        self.pages[tab]
    }

    pub fn total_pages(&self, tab: Tab) -> u32 {
        self.total_pages[tab]
    }

    pub fn total_count(&self, tab: Tab) -> u64 {
        self.total_counts[tab]
    }

    pub fn phase(&self, tab: Tab) -> FetchPhase {
        self.phases[tab]
    }

    pub fn is_loading(&self, tab: Tab) -> bool {
        self.phases[tab] == FetchPhase::Loading
    }

    /// One request per tab, for the startup load. Issued concurrently by the
    /// caller; a failure on one collection does not block the others.
    pub fn initial_requests(&mut self) -> Vec<FetchRequest> {
        Tab::all().iter().map(|&tab| self.issue(tab)).collect()
    }

    /// Switch the displayed collection. Page numbers are preserved; a fetch
    /// goes out only when the tab's inputs changed since it was last loaded.
    pub fn set_active_tab(&mut self, tab: Tab) -> Option<FetchRequest> {
        self.active = tab;
        if self.loaded_keys[tab].as_ref() == Some(&self.key_for(tab)) {
            return None;
        }
        Some(self.issue(tab))
    }

    /// Update the shared query. Every tab restarts from page 1; only the
    /// active tab fetches now, the others on their next visit.
    pub fn set_search_query(&mut self, query: impl Into<String>) -> Option<FetchRequest> {
        let query = query.into();
        if query == self.search {
            return None;
        }
        self.search = query;
        self.pages = TabMap::fill(1);
        Some(self.issue(self.active))
    }

    /// Update the shared sort mode. Same reset policy as search.
    pub fn set_sort_mode(&mut self, sort: SortMode) -> Option<FetchRequest> {
        if sort == self.sort {
            return None;
        }
        self.sort = sort;
        self.pages = TabMap::fill(1);
        Some(self.issue(self.active))
    }

    /// Move the active tab by `delta` pages, clamped into
    /// `[1, max(1, total_pages)]`. Landing on the current page is a no-op.
    pub fn go_to_page(&mut self, delta: i64) -> Option<FetchRequest> {
        let tab = self.active;
        let bound = i64::from(self.total_pages[tab].max(1));
        let target = (i64::from(self.pages[tab]) + delta).clamp(1, bound) as u32;
        if target == self.pages[tab] {
            return None;
        }
        self.pages[tab] = target;
        Some(self.issue(tab))
    }

    /// Refetch the active tab regardless of memoization.
    pub fn force_refresh(&mut self) -> FetchRequest {
        let tab = self.active;
        self.issue(tab)
    }

    /// Apply a finished fetch. Responses issued under an older generation are
    /// reported [`Completion::Stale`] and must not touch collection state.
    pub fn complete(&mut self, token: FetchToken, outcome: FetchOutcome) -> Completion {
        let tab = token.tab;
        if token.generation != self.generations[tab] {
            return Completion::Stale;
        }
        match outcome {
            FetchOutcome::Loaded {
                total_pages,
                total_count,
            } => {
                self.total_pages[tab] = total_pages.max(1);
                self.total_counts[tab] = total_count;
                self.phases[tab] = FetchPhase::Loaded;
                if self.pages[tab] > self.total_pages[tab] {
                    // The query shrank under us; show what arrived, then
                    // fetch the last page that still exists.
                    self.pages[tab] = self.total_pages[tab];
                    return Completion::Refetch(self.issue(tab));
                }
                self.loaded_keys[tab] = Some(self.key_for(tab));
                Completion::Applied
            }
            FetchOutcome::Failed => {
                // Previously loaded items stay visible.
                self.phases[tab] = FetchPhase::Error;
                Completion::Applied
            }
        }
    }

    fn key_for(&self, tab: Tab) -> FetchKey {
        FetchKey {
            page: self.pages[tab],
            search: self.search.clone(),
            sort: self.sort,
        }
    }

    fn issue(&mut self, tab: Tab) -> FetchRequest {
        self.generations[tab] += 1;
        self.phases[tab] = FetchPhase::Loading;
        FetchRequest {
            token: FetchToken {
                tab,
                generation: self.generations[tab],
            },
            query: PageQuery {
                page: self.pages[tab],
                per_page: self.per_page,
                search: self.search.clone(),
                sort: self.sort.wire(),
            },
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================


// ============================================================================
// PROPERTY-BASED TESTS
// ============================================================================
