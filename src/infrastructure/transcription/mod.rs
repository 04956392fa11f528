//! Transcription adapters

mod assemblyai;

pub use assemblyai::AssemblyAiTranscriber;
