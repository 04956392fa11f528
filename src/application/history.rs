//! List history use case

use std::sync::Arc;

use thiserror::Error;

use crate::domain::history::HistoryRecord;

use super::ports::{HistoryStore, StoreError};

/// Errors from the list history use case
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("DUMMY_USER_ID not configured")]
    MissingUserId,

    #[error("History store not configured")]
    StoreUnavailable,

    #[error("An error occurred: {0}")]
    Store(#[from] StoreError),
}

/// Reads back the configured user's improvement history.
pub struct ListHistoryUseCase {
    store: Option<Arc<dyn HistoryStore>>,
    user_id: Option<String>,
}

impl ListHistoryUseCase {
    /// Create a new use case instance
    pub fn new(store: Option<Arc<dyn HistoryStore>>, user_id: Option<String>) -> Self {
        Self { store, user_id }
    }

    /// Records for the configured user, in the order the store returns them
    pub async fn execute(&self) -> Result<Vec<HistoryRecord>, HistoryError> {
        let user_id = self.user_id.as_deref().ok_or(HistoryError::MissingUserId)?;
        let store = self.store.as_ref().ok_or(HistoryError::StoreUnavailable)?;

        let records = store.list_for_user(user_id).await.map_err(|e| {
            tracing::error!(error = %e, user_id, "failed to load history");
            e
        })?;

        tracing::debug!(user_id, count = records.len(), "loaded history");
        Ok(records)
    }
}
