//! Video comment wire types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One comment the account left on a video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentEntry {
    pub id: i64,
    /// Video the comment was left on
    pub video_id: String,
    /// Channel that owns the video
    pub channel_id: String,
    /// The platform's own comment identifier
    pub comment_id: String,
    pub text: String,
    pub time: DateTime<Utc>,
}

impl CommentEntry {
    pub fn display_text(&self) -> &str {
        &self.text
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.time
    }

    /// Deep link to the comment on the hosting platform.
    pub fn permalink(&self) -> String {
        format!(
            "https://www.youtube.com/watch?v={}&lc={}",
            self.video_id, self.comment_id
        )
    }
}
