//! Improve text use case

use std::sync::Arc;

use thiserror::Error;

use crate::domain::history::NewHistoryRecord;
use crate::domain::improvement::{ImprovePrompt, UserText};

use super::ports::{Generation, HistoryStore, LanguageModel, LanguageModelError, StoreError};

/// Sampling temperature for rewrites
const TEMPERATURE: f32 = 0.0;

/// Errors from the improve text use case
#[derive(Debug, Error)]
pub enum ImproveTextError {
    #[error("Content blocked: {0}")]
    Blocked(String),

    #[error("An error occurred: {0}")]
    Model(#[from] LanguageModelError),
}

/// Why a history write did not happen
#[derive(Debug, Error)]
pub enum HistoryWriteError {
    #[error("no user id configured")]
    NoUser,

    #[error("no history store configured")]
    NoStore,

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Output from the improve text use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImproveTextOutput {
    /// The rewritten text
    pub improved_text: String,
    /// Whether the history record was persisted
    pub history_saved: bool,
}

/// Rewrites user text with the language model and records the result.
pub struct ImproveTextUseCase {
    model: Arc<dyn LanguageModel>,
    history: Option<Arc<dyn HistoryStore>>,
    user_id: Option<String>,
}

impl ImproveTextUseCase {
    /// Create a new use case instance
    pub fn new(
        model: Arc<dyn LanguageModel>,
        history: Option<Arc<dyn HistoryStore>>,
        user_id: Option<String>,
    ) -> Self {
        Self {
            model,
            history,
            user_id,
        }
    }

    /// Execute the improvement workflow
    pub async fn execute(&self, text: UserText) -> Result<ImproveTextOutput, ImproveTextError> {
        tracing::debug!(text = %text, "received improve-text request");

        let prompt = ImprovePrompt::build(&text);

        let improved_text = match self.model.generate(&prompt, TEMPERATURE).await {
            Ok(Generation::Text(improved)) => improved,
            Ok(Generation::Blocked(reason)) => {
                tracing::warn!(%reason, "content blocked by language model");
                return Err(ImproveTextError::Blocked(reason));
            }
            Err(e) => {
                tracing::error!(error = %e, "language model call failed");
                return Err(e.into());
            }
        };

        // History is best effort; a failed write never fails the request
        let history_saved = match self.record_history(&text, &improved_text).await {
            Ok(()) => true,
            Err(HistoryWriteError::NoUser) => {
                tracing::debug!("no user id configured, skipping history");
                false
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to save history");
                false
            }
        };

        Ok(ImproveTextOutput {
            improved_text,
            history_saved,
        })
    }

    async fn record_history(
        &self,
        original: &UserText,
        improved: &str,
    ) -> Result<(), HistoryWriteError> {
        let user_id = self.user_id.as_deref().ok_or(HistoryWriteError::NoUser)?;
        let store = self.history.as_ref().ok_or(HistoryWriteError::NoStore)?;

        let record = NewHistoryRecord::new(user_id, original.as_str(), improved);
        store.insert(&record).await?;

        tracing::info!(user_id, "saved history");
        Ok(())
    }
}
