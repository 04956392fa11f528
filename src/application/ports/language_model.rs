//! Language model port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::improvement::ImprovePrompt;

/// Language model errors
#[derive(Debug, Clone, Error)]
pub enum LanguageModelError {
    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,

    #[error("Empty model response")]
    EmptyResponse,

    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    #[error("API error: {0}")]
    ApiError(String),
}

/// Result of a generation request that reached the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Generation {
    /// The model produced text
    Text(String),
    /// The prompt or the output was refused by content policy
    Blocked(String),
}

/// A model advertised by the vendor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelInfo {
    /// Resource name, e.g. `models/gemini-2.0-flash`
    pub name: String,
    /// Methods the model supports, e.g. `generateContent`
    pub supported_generation_methods: Vec<String>,
}

impl ModelInfo {
    /// Whether the model can be used for content generation
    pub fn supports_generation(&self) -> bool {
        self.supported_generation_methods
            .iter()
            .any(|m| m == "generateContent")
    }
}

/// Port for text generation
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Generate text for a prompt.
    ///
    /// # Arguments
    /// * `prompt` - The full instruction prompt
    /// * `temperature` - Sampling temperature
    ///
    /// # Returns
    /// Generated text or a content-policy block, or an error
    async fn generate(
        &self,
        prompt: &ImprovePrompt,
        temperature: f32,
    ) -> Result<Generation, LanguageModelError>;

    /// List every model available to the configured key.
    async fn list_models(&self) -> Result<Vec<ModelInfo>, LanguageModelError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supports_generation_checks_methods() {
        let model = ModelInfo {
            name: "models/gemini-2.0-flash".to_string(),
            supported_generation_methods: vec![
                "generateContent".to_string(),
                "countTokens".to_string(),
            ],
        };
        assert!(model.supports_generation());

        let embedder = ModelInfo {
            name: "models/embedding-001".to_string(),
            supported_generation_methods: vec!["embedContent".to_string()],
        };
        assert!(!embedder.supports_generation());
    }
}
