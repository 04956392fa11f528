//! Application layer - Use cases and port interfaces
//!
//! Contains the core business operations and trait definitions
//! for external system interactions.

pub mod history;
pub mod improve;
pub mod models;
pub mod ports;
pub mod transcribe;

// Re-export use cases
pub use history::{HistoryError, ListHistoryUseCase};
pub use improve::{ImproveTextError, ImproveTextOutput, ImproveTextUseCase};
pub use models::{ListModelsError, ListModelsUseCase};
pub use transcribe::{TranscribeAudioError, TranscribeAudioUseCase};
