//! List generation models use case

use std::sync::Arc;

use thiserror::Error;

use super::ports::{LanguageModel, LanguageModelError};

/// Errors from the list models use case
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ListModelsError(#[from] LanguageModelError);

/// Lists the vendor models that can generate content.
pub struct ListModelsUseCase {
    model: Arc<dyn LanguageModel>,
}

impl ListModelsUseCase {
    pub fn new(model: Arc<dyn LanguageModel>) -> Self {
        Self { model }
    }

    /// Names of models supporting `generateContent`
    pub async fn execute(&self) -> Result<Vec<String>, ListModelsError> {
        let models = self.model.list_models().await?;

        Ok(models
            .into_iter()
            .filter(|m| m.supports_generation())
            .map(|m| m.name)
            .collect())
    }
}
