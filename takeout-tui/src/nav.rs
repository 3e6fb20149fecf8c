//! Tab navigation over the four export collections.

use std::ops::{Index, IndexMut};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    WatchHistory,
    SearchHistory,
    Comments,
    Notes,
}

impl Tab {
    pub fn title(&self) -> &'static str {
        match self {
            Tab::WatchHistory => "Watch History",
            Tab::SearchHistory => "Search History",
            Tab::Comments => "Comments",
            Tab::Notes => "Keep Notes",
        }
    }

    /// Path of the list endpoint serving this collection.
    pub fn endpoint(&self) -> &'static str {
        match self {
            Tab::WatchHistory => "/youtube_history",
            Tab::SearchHistory => "/youtube_search",
            Tab::Comments => "/youtube_comments",
            Tab::Notes => "/google_keep",
        }
    }

    pub fn all() -> &'static [Tab] {
        &[
            Tab::WatchHistory,
            Tab::SearchHistory,
            Tab::Comments,
            Tab::Notes,
        ]
    }

    pub fn index(&self) -> usize {
        Self::all().iter().position(|t| t == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<Tab> {
        Self::all().get(index).copied()
    }

    pub fn next(&self) -> Tab {
        let all = Self::all();
        all[(self.index() + 1) % all.len()]
    }

    pub fn previous(&self) -> Tab {
        let all = Self::all();
        let idx = self.index();
        all[if idx == 0 { all.len() - 1 } else { idx - 1 }]
    }
}

/// Total mapping with exactly one entry per tab, by construction. Indexing is
/// infallible, so per-tab state can never be missing or duplicated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabMap<T>([T; 4]);

impl<T> TabMap<T> {
    pub fn new(mut init: impl FnMut(Tab) -> T) -> Self {
        Self([
            init(Tab::WatchHistory),
            init(Tab::SearchHistory),
            init(Tab::Comments),
            init(Tab::Notes),
        ])
    }
}

impl<T: Clone> TabMap<T> {
    pub fn fill(value: T) -> Self {
        Self::new(|_| value.clone())
    }
}

impl<T: Default> Default for TabMap<T> {
    fn default() -> Self {
        Self::new(|_| T::default())
    }
}

impl<T> Index<Tab> for TabMap<T> {
    type Output = T;

    fn index(&self, tab: Tab) -> &T {
        &self.0[tab.index()]
    }
}

impl<T> IndexMut<Tab> for TabMap<T> {
    fn index_mut(&mut self, tab: Tab) -> &mut T {
        &mut self.0[tab.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_and_previous_cycle() {
        for &tab in Tab::all() {
            let mut current = tab;
            for _ in 0..Tab::all().len() {
                current = current.next();
            }
            assert_eq!(current, tab);

            for _ in 0..Tab::all().len() {
                current = current.previous();
            }
            assert_eq!(current, tab);
        }
    }

    #[test]
    fn index_round_trips() {
        for &tab in Tab::all() {
            assert_eq!(Tab::from_index(tab.index()), Some(tab));
        }
        assert_eq!(Tab::from_index(4), None);
    }

    #[test]
    fn tab_map_isolates_entries() {
        let mut pages = TabMap::fill(1u32);
        pages[Tab::Comments] = 7;
        assert_eq!(pages[Tab::Comments], 7);
        assert_eq!(pages[Tab::WatchHistory], 1);
        assert_eq!(pages[Tab::SearchHistory], 1);
        assert_eq!(pages[Tab::Notes], 1);
    }
}
