//! Local filtering, sorting, and truncation for bulk deployments.
//!
//! A bulk service hands over whole collections in one response. The viewer
//! keeps the full set in memory and recomputes the visible slice whenever the
//! search query or sort mode changes. Only the first [`VISIBLE_LIMIT`] matches
//! are shown; the match count before truncation is still reported so the
//! status line can say how much the filter found.

use crate::nav::TabMap;
use chrono::{DateTime, Utc};
use takeout_api::{CommentEntry, NoteEntry, SortMode, VideoEntry};

pub const VISIBLE_LIMIT: usize = 20;

/// What an entry exposes for local search and ordering.
pub trait BulkEntry {
    fn search_text(&self) -> String;
    fn timestamp(&self) -> DateTime<Utc>;
}

impl BulkEntry for VideoEntry {
    fn search_text(&self) -> String {
        self.display_text().to_string()
    }

    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp()
    }
}

impl BulkEntry for CommentEntry {
    fn search_text(&self) -> String {
        self.display_text().to_string()
    }

    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp()
    }
}

impl BulkEntry for NoteEntry {
    fn search_text(&self) -> String {
        self.display_text().to_string()
    }

    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Selection<T> {
    pub items: Vec<T>,
    /// Matches before truncation to [`VISIBLE_LIMIT`].
    pub total_count: u64,
}

/// Filter, order, and truncate one collection. Matching is a case-insensitive
/// substring test; ties under every sort keep their incoming order.
pub fn select<T>(items: &[T], search: &str, sort: SortMode) -> Selection<T>
where
    T: BulkEntry + Clone,
{
    let needle = search.trim().to_lowercase();
    let mut matches: Vec<T> = items
        .iter()
        .filter(|item| needle.is_empty() || item.search_text().to_lowercase().contains(&needle))
        .cloned()
        .collect();

    match sort {
        SortMode::Newest => matches.sort_by_key(|item| std::cmp::Reverse(item.timestamp())),
        SortMode::Oldest => matches.sort_by_key(|item| item.timestamp()),
        SortMode::Alphabetical => matches.sort_by_key(|item| item.search_text().to_lowercase()),
    }

    let total_count = matches.len() as u64;
    matches.truncate(VISIBLE_LIMIT);
    Selection {
        items: matches,
        total_count,
    }
}

/// Full collections fetched from a bulk service, one slot per tab. Watch and
/// search history both hold video entries.
#[derive(Debug, Clone, Default)]
pub struct BulkStore {
    pub watch: Vec<VideoEntry>,
    pub searches: Vec<VideoEntry>,
    pub comments: Vec<CommentEntry>,
    pub notes: Vec<NoteEntry>,
    pub loaded: TabMap<bool>,
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[derive(Debug, Clone, PartialEq)]
    struct Entry {
        text: &'static str,
        at: DateTime<Utc>,
    }

    impl BulkEntry for Entry {
        fn search_text(&self) -> String {
            self.text.to_string()
        }

        fn timestamp(&self) -> DateTime<Utc> {
            self.at
        }
    }

    fn entry(text: &'static str, hour: u32) -> Entry {
        Entry {
            text,
            at: Utc.with_ymd_and_hms(2024, 6, 1, hour, 0, 0).unwrap(),
        }
    }

    fn texts(selection: &Selection<Entry>) -> Vec<&str> {
        selection.items.iter().map(|e| e.text).collect()
    }

    #[test]
    fn empty_search_matches_everything() {
        let items = vec![entry("alpha", 1), entry("beta", 2)];
        let selection = select(&items, "", SortMode::Oldest);
        assert_eq!(selection.total_count, 2);
        assert_eq!(texts(&selection), vec!["alpha", "beta"]);
    }

    #[test]
    fn search_is_case_insensitive_both_ways() {
        let items = vec![entry("Rust Tutorial", 1), entry("cooking", 2)];
        let selection = select(&items, "RUST", SortMode::Newest);
        assert_eq!(texts(&selection), vec!["Rust Tutorial"]);
        let selection = select(&items, "tutorial", SortMode::Newest);
        assert_eq!(texts(&selection), vec!["Rust Tutorial"]);
    }

    #[test]
    fn filter_preserves_relative_order() {
        let items = vec![entry("Food show", 3), entry("Bar", 3), entry("Foobar", 3)];
        let selection = select(&items, "foo", SortMode::Newest);
        assert_eq!(texts(&selection), vec!["Food show", "Foobar"]);
    }

    #[test]
    fn search_trims_surrounding_whitespace() {
        let items = vec![entry("alpha", 1)];
        let selection = select(&items, "  alpha  ", SortMode::Newest);
        assert_eq!(selection.total_count, 1);
    }

    #[test]
    fn newest_puts_latest_first() {
        let items = vec![entry("old", 1), entry("new", 9), entry("mid", 5)];
        let selection = select(&items, "", SortMode::Newest);
        assert_eq!(texts(&selection), vec!["new", "mid", "old"]);
    }

    #[test]
    fn alphabetical_ignores_case() {
        let items = vec![entry("banana", 1), entry("Apple", 2), entry("cherry", 3)];
        let selection = select(&items, "", SortMode::Alphabetical);
        assert_eq!(texts(&selection), vec!["Apple", "banana", "cherry"]);
    }

    #[test]
    fn equal_timestamps_keep_incoming_order() {
        let items = vec![entry("first", 3), entry("second", 3), entry("third", 3)];
        let selection = select(&items, "", SortMode::Newest);
        assert_eq!(texts(&selection), vec!["first", "second", "third"]);
    }

    #[test]
    fn truncates_but_counts_all_matches() {
        let items: Vec<Entry> = (0..30).map(|i| entry("video", 1 + i % 20)).collect();
        let selection = select(&items, "vid", SortMode::Oldest);
        assert_eq!(selection.items.len(), VISIBLE_LIMIT);
        assert_eq!(selection.total_count, 30);
    }

    #[test]
    fn no_matches_yields_empty_selection() {
        let items = vec![entry("alpha", 1)];
        let selection = select(&items, "zzz", SortMode::Newest);
        assert!(selection.items.is_empty());
        assert_eq!(selection.total_count, 0);
    }
}
