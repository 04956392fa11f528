//! Request handlers

use axum::extract::multipart::{Multipart, MultipartRejection};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use crate::domain::history::HistoryRecord;
use crate::domain::transcription::AudioUpload;

use super::error::ApiError;
use super::types::{
    ImproveTextRequest, ImproveTextResponse, MessageResponse, ModelsResponse,
    TranscriptionResponse,
};
use super::AppState;

/// Liveness banner
pub const BANNER: &str = "Dadam API is running.";

/// Multipart field carrying the audio
const FILE_FIELD: &str = "file";

/// GET /
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: BANNER.to_string(),
    })
}

/// POST /api/improve-text
pub async fn improve_text(
    State(state): State<AppState>,
    payload: Result<Json<ImproveTextRequest>, JsonRejection>,
) -> Result<Json<ImproveTextResponse>, ApiError> {
    let Json(request) = payload?;

    let output = state.improve.execute(request.text).await?;

    Ok(Json(ImproveTextResponse {
        improved_text: output.improved_text,
    }))
}

/// POST /api/transcribe
pub async fn transcribe(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<TranscriptionResponse>, ApiError> {
    let audio = read_upload(multipart?).await?;

    let transcription = state.transcribe.execute(audio).await?;

    Ok(Json(TranscriptionResponse { transcription }))
}

/// GET /api/history
pub async fn history(State(state): State<AppState>) -> Result<Json<Vec<HistoryRecord>>, ApiError> {
    Ok(Json(state.history.execute().await?))
}

/// GET /api/models
pub async fn models(State(state): State<AppState>) -> Result<Json<ModelsResponse>, ApiError> {
    let models = state.models.execute().await?;
    Ok(Json(ModelsResponse { models }))
}

/// Unknown routes
pub async fn not_found() -> ApiError {
    ApiError::new(axum::http::StatusCode::NOT_FOUND, "Not Found")
}

/// Pull the `file` part out of a multipart body
async fn read_upload(mut multipart: Multipart) -> Result<AudioUpload, ApiError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = field.file_name().map(str::to_owned);
        let data = field.bytes().await?;

        let mut upload = AudioUpload::new(data.to_vec());
        if let Some(name) = file_name {
            upload = upload.with_file_name(name);
        }
        return Ok(upload);
    }

    Err(ApiError::validation("Missing multipart field 'file'"))
}
