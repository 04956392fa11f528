//! Domain layer - Core business logic
//!
//! Contains value objects, entities, and domain errors.
//! This layer has no dependencies on external systems.

pub mod config;
pub mod error;
pub mod history;
pub mod improvement;
pub mod transcription;

// Re-export common types
pub use config::{AppConfig, ServerSettings};
pub use error::*;
pub use history::{HistoryRecord, NewHistoryRecord};
pub use improvement::{ImprovePrompt, UserText};
pub use transcription::AudioUpload;
