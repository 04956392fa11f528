//! Configuration domain module

mod app_config;
mod settings;

pub use app_config::{
    AppConfig, SupabaseConfig, DEFAULT_ALLOWED_ORIGIN, DEFAULT_GEMINI_MODEL, DEFAULT_HOST,
    DEFAULT_PORT,
};
pub use settings::{ServerSettings, SupabaseSettings};
