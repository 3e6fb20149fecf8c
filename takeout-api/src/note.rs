//! Note entry wire types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One checklist row inside a note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub text: String,
    #[serde(rename = "isChecked")]
    pub checked: bool,
}

/// One note from the export. Title, free text, and checklist content are all
/// optional; a note carries at least one of them in practice, but the client
/// must not rely on that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteEntry {
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub text_content: Option<String>,
    #[serde(default)]
    pub list_content: Vec<ChecklistItem>,
    /// Color label assigned in the source app
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub is_pinned: bool,
    #[serde(default)]
    pub is_archived: bool,
    #[serde(default)]
    pub is_trashed: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub edited_at: Option<DateTime<Utc>>,
}

impl NoteEntry {
    /// The string searched and compared by local filtering: title when
    /// present, then free text, then the first checklist row.
    pub fn display_text(&self) -> &str {
        if let Some(title) = self.title.as_deref() {
            if !title.is_empty() {
                return title;
            }
        }
        if let Some(text) = self.text_content.as_deref() {
            if !text.is_empty() {
                return text;
            }
        }
        self.list_content
            .first()
            .map(|item| item.text.as_str())
            .unwrap_or("")
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn is_checklist(&self) -> bool {
        !self.list_content.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(json: &str) -> NoteEntry {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn decodes_checklist_note() {
        let entry = note(
            r#"{
                "id": 1,
                "title": "Groceries",
                "listContent": [
                    {"text": "milk", "isChecked": true},
                    {"text": "bread", "isChecked": false}
                ],
                "isPinned": true,
                "createdAt": "2024-11-01T10:00:00Z"
            }"#,
        );
        assert!(entry.is_checklist());
        assert!(entry.is_pinned);
        assert!(entry.list_content[0].checked);
        assert!(!entry.list_content[1].checked);
    }

    #[test]
    fn display_text_prefers_title() {
        let entry = note(
            r#"{"id": 1, "title": "Ideas", "textContent": "body", "createdAt": "2024-01-01T00:00:00Z"}"#,
        );
        assert_eq!(entry.display_text(), "Ideas");
    }

    #[test]
    fn display_text_falls_back_to_text_then_checklist() {
        let entry = note(
            r#"{"id": 1, "textContent": "just text", "createdAt": "2024-01-01T00:00:00Z"}"#,
        );
        assert_eq!(entry.display_text(), "just text");

        let entry = note(
            r#"{
                "id": 2,
                "listContent": [{"text": "first row", "isChecked": false}],
                "createdAt": "2024-01-01T00:00:00Z"
            }"#,
        );
        assert_eq!(entry.display_text(), "first row");

        let entry = note(r#"{"id": 3, "createdAt": "2024-01-01T00:00:00Z"}"#);
        assert_eq!(entry.display_text(), "");
    }
}
