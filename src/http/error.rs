//! HTTP error mapping
//!
//! Every failure leaves the server as `{"detail": "<message>"}` with a
//! status code chosen by the error category.

use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::application::{
    HistoryError, ImproveTextError, ListModelsError, TranscribeAudioError,
};

use super::types::ErrorResponse;

/// An error rendered as a JSON `detail` body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    status: StatusCode,
    detail: String,
}

impl ApiError {
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: detail.into(),
        }
    }

    /// Request payload failed validation
    pub fn validation(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, detail)
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, detail)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorResponse {
                detail: self.detail,
            }),
        )
            .into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::validation(rejection.body_text())
    }
}

impl From<MultipartRejection> for ApiError {
    fn from(rejection: MultipartRejection) -> Self {
        Self::validation(rejection.body_text())
    }
}

impl From<MultipartError> for ApiError {
    fn from(err: MultipartError) -> Self {
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return Self::new(StatusCode::PAYLOAD_TOO_LARGE, err.body_text());
        }
        Self::validation(err.body_text())
    }
}

impl From<ImproveTextError> for ApiError {
    fn from(err: ImproveTextError) -> Self {
        let status = match err {
            ImproveTextError::Blocked(_) => StatusCode::BAD_REQUEST,
            ImproveTextError::Model(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self::new(status, err.to_string())
    }
}

impl From<TranscribeAudioError> for ApiError {
    fn from(err: TranscribeAudioError) -> Self {
        let status = match err {
            TranscribeAudioError::EmptyAudio => StatusCode::UNPROCESSABLE_ENTITY,
            TranscribeAudioError::Failed(_) => StatusCode::BAD_GATEWAY,
            TranscribeAudioError::NotConfigured | TranscribeAudioError::Transcription(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self::new(status, err.to_string())
    }
}

impl From<HistoryError> for ApiError {
    fn from(err: HistoryError) -> Self {
        Self::internal(err.to_string())
    }
}

impl From<ListModelsError> for ApiError {
    fn from(err: ListModelsError) -> Self {
        Self::internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{LanguageModelError, TranscriptionError};

    #[test]
    fn blocked_is_bad_request() {
        let err = ApiError::from(ImproveTextError::Blocked("SAFETY".to_string()));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.detail(), "Content blocked: SAFETY");
    }

    #[test]
    fn model_failure_is_internal() {
        let err = ApiError::from(ImproveTextError::Model(LanguageModelError::RateLimited));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.detail().starts_with("An error occurred: "));
    }

    #[test]
    fn transcription_statuses() {
        assert_eq!(
            ApiError::from(TranscribeAudioError::Failed("bad audio".to_string())).status(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            ApiError::from(TranscribeAudioError::NotConfigured).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::from(TranscribeAudioError::Transcription(
                TranscriptionError::InvalidApiKey
            ))
            .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::from(TranscribeAudioError::EmptyAudio).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn history_errors_are_internal() {
        let err = ApiError::from(HistoryError::MissingUserId);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.detail(), "DUMMY_USER_ID not configured");
    }
}
