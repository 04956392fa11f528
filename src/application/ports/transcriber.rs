//! Transcription port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::transcription::AudioUpload;

/// Transcription errors
#[derive(Debug, Clone, Error)]
pub enum TranscriptionError {
    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Transcription did not finish within {0} seconds")]
    TimedOut(u64),
}

/// Final state of a transcription job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transcript {
    /// The service produced a transcript
    Completed(String),
    /// The service processed the job but reported an error for it
    Failed(String),
}

/// Port for audio transcription
#[async_trait]
pub trait Transcriber: Send + Sync {
    /// Transcribe uploaded audio to text.
    ///
    /// # Arguments
    /// * `audio` - The uploaded audio file
    ///
    /// # Returns
    /// The finished transcript, or an error if the service could not be reached
    async fn transcribe(&self, audio: &AudioUpload) -> Result<Transcript, TranscriptionError>;
}
