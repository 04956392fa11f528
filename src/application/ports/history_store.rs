//! History store port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::history::{HistoryRecord, NewHistoryRecord};

/// History store errors
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("Store request failed: {0}")]
    RequestFailed(String),

    #[error("Store returned HTTP {status}: {message}")]
    ApiError { status: u16, message: String },

    #[error("Failed to parse store response: {0}")]
    ParseError(String),
}

/// Port for persisted improvement history
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// Append a record. The store assigns `id` and `created_at`.
    async fn insert(&self, record: &NewHistoryRecord) -> Result<(), StoreError>;

    /// All records for a user, newest first.
    async fn list_for_user(&self, user_id: &str) -> Result<Vec<HistoryRecord>, StoreError>;
}
