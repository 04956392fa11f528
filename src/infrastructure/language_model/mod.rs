//! Language model adapters

mod gemini;

pub use gemini::GeminiClient;
