//! Video activity wire types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One watch-history or search-history entry.
///
/// Field names follow the export service's camelCase JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoEntry {
    /// Id assigned by the service; unique within one collection only
    pub id: i64,
    /// Video title, or the typed query for search-history entries
    pub title: String,
    /// Link back to the video or the search results page
    #[serde(default)]
    pub title_url: Option<String>,
    pub time: DateTime<Utc>,
    /// Flags attached by the exporter ("From Google Ads", product categories)
    #[serde(default)]
    pub details: Vec<String>,
}

impl VideoEntry {
    /// The string searched and compared by local filtering.
    pub fn display_text(&self) -> &str {
        &self.title
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.time
    }

    /// Whether the exporter flagged this entry as ad-driven.
    pub fn is_ad(&self) -> bool {
        self.details.iter().any(|detail| detail.contains("Ads"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_camel_case_fields() {
        let json = r#"{
            "id": 3,
            "title": "How keyboards work",
            "titleUrl": "https://www.youtube.com/watch?v=abc123",
            "time": "2025-05-29T16:29:08Z",
            "details": ["From Google Ads"]
        }"#;
        let entry: VideoEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.id, 3);
        assert_eq!(entry.title_url.as_deref(), Some("https://www.youtube.com/watch?v=abc123"));
        assert!(entry.is_ad());
    }

    #[test]
    fn missing_optional_fields_default() {
        let json = r#"{"id": 0, "title": "cats", "time": "2024-01-01T00:00:00Z"}"#;
        let entry: VideoEntry = serde_json::from_str(json).unwrap();
        assert!(entry.title_url.is_none());
        assert!(entry.details.is_empty());
        assert!(!entry.is_ad());
    }
}
