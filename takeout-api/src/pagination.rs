//! Pagination envelope, list-query parameters, and sort order.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sort order as the user sees it.
///
/// The wire protocol only understands `newest`/`oldest`; alphabetical order
/// is applied locally by bulk deployments and maps to `newest` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    Newest,
    Oldest,
    Alphabetical,
}

impl SortMode {
    pub fn wire(&self) -> WireSort {
        match self {
            SortMode::Oldest => WireSort::Oldest,
            SortMode::Newest | SortMode::Alphabetical => WireSort::Newest,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortMode::Newest => "Newest First",
            SortMode::Oldest => "Oldest First",
            SortMode::Alphabetical => "Alphabetical",
        }
    }

    /// Next mode in the fixed cycle used by the sort key.
    pub fn cycle(&self) -> SortMode {
        match self {
            SortMode::Newest => SortMode::Oldest,
            SortMode::Oldest => SortMode::Alphabetical,
            SortMode::Alphabetical => SortMode::Newest,
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SortMode::Newest => "newest",
            SortMode::Oldest => "oldest",
            SortMode::Alphabetical => "alphabetical",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "newest" => Ok(SortMode::Newest),
            "oldest" => Ok(SortMode::Oldest),
            "alphabetical" => Ok(SortMode::Alphabetical),
            other => Err(format!("unknown sort mode: {}", other)),
        }
    }
}

/// Sort values the service accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WireSort {
    Newest,
    Oldest,
}

/// Query parameters for the paginated list endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageQuery {
    /// 1-based page number
    pub page: u32,
    pub per_page: u32,
    /// Free-text substring filter; sent even when empty
    pub search: String,
    pub sort: WireSort,
}

/// Pagination metadata attached to an enveloped response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    /// Total page count for the current query
    pub pages: u32,
    /// Total item count for the current query
    pub total: u64,
}

/// The enveloped response shape: one page of items plus totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub pagination: PageInfo,
}

/// Raw response body. Paged deployments answer with the envelope; bulk
/// deployments answer with a bare array. Decode both, normalize immediately
/// with [`PageBody::into_page`], and never let the ambiguity past this type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PageBody<T> {
    Paginated(Paginated<T>),
    Bare(Vec<T>),
}

/// Normalized page: what the client works with everywhere.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_pages: u32,
    pub total_count: u64,
}

impl<T> PageBody<T> {
    pub fn into_page(self) -> Page<T> {
        match self {
            PageBody::Paginated(body) => Page {
                total_pages: body.pagination.pages.max(1),
                total_count: body.pagination.total,
                items: body.data,
            },
            // A bare array is everything at once: a single page.
            PageBody::Bare(items) => Page {
                total_pages: 1,
                total_count: items.len() as u64,
                items,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_enveloped_body() {
        let json = r#"{"data": [1, 2, 3], "pagination": {"pages": 3, "total": 41}}"#;
        let body: PageBody<i64> = serde_json::from_str(json).unwrap();
        let page = body.into_page();
        assert_eq!(page.items, vec![1, 2, 3]);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.total_count, 41);
    }

    #[test]
    fn decodes_bare_array_as_single_page() {
        let body: PageBody<i64> = serde_json::from_str("[10, 20]").unwrap();
        let page = body.into_page();
        assert_eq!(page.items, vec![10, 20]);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.total_count, 2);
    }

    #[test]
    fn zero_reported_pages_normalizes_to_one() {
        let json = r#"{"data": [], "pagination": {"pages": 0, "total": 0}}"#;
        let body: PageBody<i64> = serde_json::from_str(json).unwrap();
        assert_eq!(body.into_page().total_pages, 1);
    }

    #[test]
    fn page_query_serializes_wire_names() {
        let query = PageQuery {
            page: 2,
            per_page: 20,
            search: "cats".to_string(),
            sort: SortMode::Alphabetical.wire(),
        };
        let value = serde_json::to_value(&query).unwrap();
        assert_eq!(value["page"], 2);
        assert_eq!(value["per_page"], 20);
        assert_eq!(value["search"], "cats");
        // Alphabetical is a local concern; the wire only sees newest/oldest.
        assert_eq!(value["sort"], "newest");
    }

    #[test]
    fn sort_mode_round_trips_through_strings() {
        for mode in [SortMode::Newest, SortMode::Oldest, SortMode::Alphabetical] {
            let parsed: SortMode = mode.to_string().parse().unwrap();
            assert_eq!(parsed, mode);
        }
        assert!("duration".parse::<SortMode>().is_err());
    }

    #[test]
    fn sort_cycle_visits_every_mode() {
        let start = SortMode::Newest;
        let mut mode = start;
        let mut seen = Vec::new();
        for _ in 0..3 {
            seen.push(mode);
            mode = mode.cycle();
        }
        assert_eq!(mode, start);
        assert_eq!(seen.len(), 3);
        assert!(seen.contains(&SortMode::Alphabetical));
    }
}
