//! Transcribe uploaded audio use case

use std::sync::Arc;

use thiserror::Error;

use crate::domain::transcription::AudioUpload;

use super::ports::{Transcriber, Transcript, TranscriptionError};

/// Errors from the transcribe use case
#[derive(Debug, Error)]
pub enum TranscribeAudioError {
    #[error("AssemblyAI API key not configured")]
    NotConfigured,

    #[error("Uploaded file is empty")]
    EmptyAudio,

    #[error("Transcription failed: {0}")]
    Failed(String),

    #[error("An error occurred: {0}")]
    Transcription(#[from] TranscriptionError),
}

/// Forwards uploaded audio to the transcription service.
pub struct TranscribeAudioUseCase {
    transcriber: Option<Arc<dyn Transcriber>>,
}

impl TranscribeAudioUseCase {
    /// Create a new use case instance. `None` means no transcription key is configured.
    pub fn new(transcriber: Option<Arc<dyn Transcriber>>) -> Self {
        Self { transcriber }
    }

    /// Execute the transcription
    pub async fn execute(&self, audio: AudioUpload) -> Result<String, TranscribeAudioError> {
        let transcriber = self
            .transcriber
            .as_ref()
            .ok_or(TranscribeAudioError::NotConfigured)?;

        if audio.is_empty() {
            return Err(TranscribeAudioError::EmptyAudio);
        }

        tracing::info!(
            size = %audio.human_readable_size(),
            file_name = audio.file_name().unwrap_or("-"),
            "transcribing upload"
        );

        match transcriber.transcribe(&audio).await {
            Ok(Transcript::Completed(text)) => Ok(text),
            Ok(Transcript::Failed(message)) => {
                tracing::warn!(%message, "transcription reported an error");
                Err(TranscribeAudioError::Failed(message))
            }
            Err(e) => {
                tracing::error!(error = %e, "transcription call failed");
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;

    struct MockTranscriber {
        result: Result<Transcript, TranscriptionError>,
        calls: AtomicUsize,
    }

    impl MockTranscriber {
        fn new(result: Result<Transcript, TranscriptionError>) -> Arc<Self> {
            Arc::new(Self {
                result,
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl Transcriber for MockTranscriber {
        async fn transcribe(&self, _audio: &AudioUpload) -> Result<Transcript, TranscriptionError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result.clone()
        }
    }

    fn audio() -> AudioUpload {
        AudioUpload::new(b"dummy audio data".to_vec()).with_file_name("test.wav")
    }

    #[tokio::test]
    async fn execute_returns_transcript() {
        let transcriber = MockTranscriber::new(Ok(Transcript::Completed("Hi.".to_string())));
        let use_case = TranscribeAudioUseCase::new(Some(transcriber.clone()));

        assert_eq!(use_case.execute(audio()).await.unwrap(), "Hi.");
        assert_eq!(transcriber.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn execute_without_transcriber_is_not_configured() {
        let use_case = TranscribeAudioUseCase::new(None);
        let err = use_case.execute(audio()).await.unwrap_err();
        assert!(matches!(err, TranscribeAudioError::NotConfigured));
    }

    #[tokio::test]
    async fn execute_rejects_empty_upload_without_calling_service() {
        let transcriber = MockTranscriber::new(Ok(Transcript::Completed(String::new())));
        let use_case = TranscribeAudioUseCase::new(Some(transcriber.clone()));

        let err = use_case.execute(AudioUpload::new(Vec::new())).await.unwrap_err();

        assert!(matches!(err, TranscribeAudioError::EmptyAudio));
        assert_eq!(transcriber.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn execute_surfaces_vendor_failure() {
        let transcriber =
            MockTranscriber::new(Ok(Transcript::Failed("Audio file is corrupt".to_string())));
        let use_case = TranscribeAudioUseCase::new(Some(transcriber));

        let err = use_case.execute(audio()).await.unwrap_err();
        assert_eq!(err.to_string(), "Transcription failed: Audio file is corrupt");
    }

    #[tokio::test]
    async fn execute_wraps_transport_errors() {
        let transcriber = MockTranscriber::new(Err(TranscriptionError::TimedOut(300)));
        let use_case = TranscribeAudioUseCase::new(Some(transcriber));

        let err = use_case.execute(audio()).await.unwrap_err();
        assert!(matches!(err, TranscribeAudioError::Transcription(_)));
    }
}
