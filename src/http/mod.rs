//! HTTP layer - axum routes, shared state and error mapping

pub mod error;
pub mod handlers;
pub mod types;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::http::header::InvalidHeaderValue;
use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::application::ports::{HistoryStore, LanguageModel, Transcriber};
use crate::application::{
    ImproveTextUseCase, ListHistoryUseCase, ListModelsUseCase, TranscribeAudioUseCase,
};

pub use error::ApiError;

/// Largest accepted audio upload
pub const MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

/// Use cases shared by every request. Cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub improve: Arc<ImproveTextUseCase>,
    pub transcribe: Arc<TranscribeAudioUseCase>,
    pub history: Arc<ListHistoryUseCase>,
    pub models: Arc<ListModelsUseCase>,
}

impl AppState {
    /// Wire the use cases from port handles.
    ///
    /// `transcriber` is `None` when no transcription key is configured;
    /// `history` is `None` when no store is configured.
    pub fn new(
        model: Arc<dyn LanguageModel>,
        transcriber: Option<Arc<dyn Transcriber>>,
        history: Option<Arc<dyn HistoryStore>>,
        user_id: Option<String>,
    ) -> Self {
        Self {
            improve: Arc::new(ImproveTextUseCase::new(
                Arc::clone(&model),
                history.clone(),
                user_id.clone(),
            )),
            transcribe: Arc::new(TranscribeAudioUseCase::new(transcriber)),
            history: Arc::new(ListHistoryUseCase::new(history, user_id)),
            models: Arc::new(ListModelsUseCase::new(model)),
        }
    }
}

/// Build the API router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/api/improve-text", post(handlers::improve_text))
        .route(
            "/api/transcribe",
            post(handlers::transcribe).layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
        .route("/api/history", get(handlers::history))
        .route("/api/models", get(handlers::models))
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// CORS policy admitting a single origin, with credentials
pub fn cors_layer(allowed_origin: &str) -> Result<CorsLayer, InvalidHeaderValue> {
    let origin = HeaderValue::from_str(allowed_origin)?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}
