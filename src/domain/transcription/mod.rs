//! Transcription domain module

mod audio_upload;

pub use audio_upload::AudioUpload;
