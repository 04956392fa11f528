//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with external systems like the Gemini, AssemblyAI
//! and Supabase APIs.

pub mod config;
pub mod language_model;
pub mod persistence;
pub mod transcription;

use std::time::Duration;

// Re-export adapters
pub use config::XdgConfigStore;
pub use language_model::GeminiClient;
pub use persistence::SupabaseHistoryStore;
pub use transcription::AssemblyAiTranscriber;

/// Build an outbound HTTP client with a per-request timeout
pub fn http_client(timeout: Duration) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(concat!("dadam-api/", env!("CARGO_PKG_VERSION")))
        .build()
}
