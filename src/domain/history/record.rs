//! History record entities

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A persisted text improvement, as stored in the `history` table.
///
/// `id` and `created_at` are store-generated and kept exactly as the store
/// returned them, whatever the column types are.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub id: Value,
    pub user_id: String,
    pub original_text: String,
    pub improved_text: String,
    pub created_at: Value,
}

/// Insert payload for a history record. The store assigns `id` and `created_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewHistoryRecord {
    pub user_id: String,
    pub original_text: String,
    pub improved_text: String,
}

impl NewHistoryRecord {
    pub fn new(
        user_id: impl Into<String>,
        original_text: impl Into<String>,
        improved_text: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            original_text: original_text.into(),
            improved_text: improved_text.into(),
        }
    }
}
