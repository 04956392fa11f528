//! API request/response types

use serde::{Deserialize, Serialize};

use crate::domain::improvement::UserText;

/// Body of `POST /api/improve-text`
#[derive(Debug, Deserialize)]
pub struct ImproveTextRequest {
    pub text: UserText,
}

#[derive(Debug, Serialize)]
pub struct ImproveTextResponse {
    pub improved_text: String,
}

#[derive(Debug, Serialize)]
pub struct TranscriptionResponse {
    pub transcription: String,
}

#[derive(Debug, Serialize)]
pub struct ModelsResponse {
    pub models: Vec<String>,
}

/// Liveness banner
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Body of every error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}
