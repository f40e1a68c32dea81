//! Comment row schema.

use crate::error::RowError;
use instinct_sanitize::sanitize_comment;
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

/// A comment row as stored. `id` is assigned by the store and may be
/// absent on freshly inserted rows; `created_at` is nullable.
#[derive(Clone, Debug, Deserialize)]
pub struct CommentRow {
    #[serde(default)]
    pub id: Option<String>,
    pub poll_id: String,
    pub wallet: String,
    pub text: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl CommentRow {
    /// Enforce the 1..=500 character bound on the comment body.
    fn check_text(&self) -> Result<(), RowError> {
        let len = self.text.chars().count();
        if (1..=500).contains(&len) {
            Ok(())
        } else {
            Err(RowError::CommentLength(len))
        }
    }

    /// The comment body, cleaned for display.
    pub fn sanitized_text(&self) -> String {
        sanitize_comment(&self.text)
    }
}

/// Parse an untrusted comment row; `None` (logged) on schema mismatch or
/// an out-of-bounds body.
pub fn parse_comment_row(value: &Value) -> Option<CommentRow> {
    let row = match CommentRow::deserialize(value) {
        Ok(row) => row,
        Err(err) => {
            warn!(kind = "comment", error = %err, "dropping invalid row");
            return None;
        }
    };
    if let Err(err) = row.check_text() {
        warn!(kind = "comment", error = %err, "dropping invalid row");
        return None;
    }
    Some(row)
}
