//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod config;
pub mod history_store;
pub mod language_model;
pub mod transcriber;

// Re-export common types
pub use config::ConfigStore;
pub use history_store::{HistoryStore, StoreError};
pub use language_model::{Generation, LanguageModel, LanguageModelError, ModelInfo};
pub use transcriber::{Transcriber, Transcript, TranscriptionError};
