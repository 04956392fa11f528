//! AssemblyAI transcriber adapter
//!
//! Uploads the audio, creates a transcript job, and polls it until the
//! service reports `completed` or `error`.

use std::time::Duration;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::application::ports::{Transcriber, Transcript, TranscriptionError};
use crate::domain::transcription::AudioUpload;

/// AssemblyAI API base URL
const API_BASE_URL: &str = "https://api.assemblyai.com";

/// Default interval between status polls
const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Default bound on a whole job
const DEFAULT_JOB_TIMEOUT: Duration = Duration::from_secs(300);

#[derive(Debug, Deserialize)]
struct UploadResponse {
    upload_url: String,
}

#[derive(Debug, Serialize)]
struct CreateTranscriptRequest<'a> {
    audio_url: &'a str,
}

#[derive(Debug, Deserialize)]
struct TranscriptResponse {
    id: String,
    status: TranscriptStatus,
    text: Option<String>,
    error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
enum TranscriptStatus {
    Queued,
    Processing,
    Completed,
    Error,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    error: String,
}

/// AssemblyAI API transcriber
pub struct AssemblyAiTranscriber {
    api_key: SecretString,
    base_url: String,
    poll_interval: Duration,
    job_timeout: Duration,
    client: reqwest::Client,
}

impl AssemblyAiTranscriber {
    /// Create a new transcriber with the given API key
    pub fn new(api_key: SecretString) -> Self {
        Self {
            api_key,
            base_url: API_BASE_URL.to_string(),
            poll_interval: DEFAULT_POLL_INTERVAL,
            job_timeout: DEFAULT_JOB_TIMEOUT,
            client: reqwest::Client::new(),
        }
    }

    /// Use a preconfigured HTTP client (timeouts, proxies)
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// Point the transcriber at a different API root
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the polling interval and the total job deadline
    pub fn with_polling(mut self, poll_interval: Duration, job_timeout: Duration) -> Self {
        self.poll_interval = poll_interval;
        self.job_timeout = job_timeout;
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Upload raw bytes and return the private URL AssemblyAI assigns them
    async fn upload(&self, audio: &AudioUpload) -> Result<String, TranscriptionError> {
        let response = self
            .client
            .post(self.url("/v2/upload"))
            .header(reqwest::header::AUTHORIZATION, self.api_key.expose_secret())
            .header(reqwest::header::CONTENT_TYPE, "application/octet-stream")
            .body(audio.data().to_vec())
            .send()
            .await
            .map_err(|e| TranscriptionError::RequestFailed(e.to_string()))?;

        let upload: UploadResponse = Self::parse(response).await?;
        Ok(upload.upload_url)
    }

    async fn create(&self, audio_url: &str) -> Result<TranscriptResponse, TranscriptionError> {
        let response = self
            .client
            .post(self.url("/v2/transcript"))
            .header(reqwest::header::AUTHORIZATION, self.api_key.expose_secret())
            .json(&CreateTranscriptRequest { audio_url })
            .send()
            .await
            .map_err(|e| TranscriptionError::RequestFailed(e.to_string()))?;

        Self::parse(response).await
    }

    async fn fetch(&self, id: &str) -> Result<TranscriptResponse, TranscriptionError> {
        let response = self
            .client
            .get(self.url(&format!("/v2/transcript/{}", id)))
            .header(reqwest::header::AUTHORIZATION, self.api_key.expose_secret())
            .send()
            .await
            .map_err(|e| TranscriptionError::RequestFailed(e.to_string()))?;

        Self::parse(response).await
    }

    /// Poll until the job leaves the queued/processing states
    async fn wait_for(
        &self,
        mut transcript: TranscriptResponse,
    ) -> Result<Transcript, TranscriptionError> {
        loop {
            match transcript.status {
                TranscriptStatus::Completed => {
                    return Ok(Transcript::Completed(transcript.text.unwrap_or_default()));
                }
                TranscriptStatus::Error => {
                    return Ok(Transcript::Failed(
                        transcript
                            .error
                            .unwrap_or_else(|| "Unknown transcription error".to_string()),
                    ));
                }
                TranscriptStatus::Queued | TranscriptStatus::Processing => {
                    tokio::time::sleep(self.poll_interval).await;
                    transcript = self.fetch(&transcript.id).await?;
                }
            }
        }
    }

    /// Check status and decode a JSON body
    async fn parse<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, TranscriptionError> {
        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(TranscriptionError::InvalidApiKey);
        }

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            let message = serde_json::from_str::<ApiError>(&body)
                .map(|e| e.error)
                .unwrap_or(body);
            return Err(TranscriptionError::ApiError(format!(
                "HTTP {}: {}",
                status, message
            )));
        }

        response
            .json()
            .await
            .map_err(|e| TranscriptionError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl Transcriber for AssemblyAiTranscriber {
    async fn transcribe(&self, audio: &AudioUpload) -> Result<Transcript, TranscriptionError> {
        let job = async {
            let audio_url = self.upload(audio).await?;
            let transcript = self.create(&audio_url).await?;
            tracing::debug!(id = %transcript.id, "created transcript job");
            self.wait_for(transcript).await
        };

        tokio::time::timeout(self.job_timeout, job)
            .await
            .map_err(|_| TranscriptionError::TimedOut(self.job_timeout.as_secs()))?
    }
}
