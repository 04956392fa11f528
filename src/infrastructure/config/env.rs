//! Environment variable config source

use std::str::FromStr;

use crate::domain::config::{AppConfig, SupabaseConfig};
use crate::domain::error::ConfigError;

/// Build a partial config from the process environment.
pub fn config_from_process_env() -> Result<AppConfig, ConfigError> {
    config_from_env(|key| std::env::var(key).ok())
}

/// Build a partial config from an environment lookup.
/// Empty values count as unset.
pub fn config_from_env<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    let supabase_url = get("SUPABASE_URL");
    let supabase_key = get("SUPABASE_KEY");
    let supabase = if supabase_url.is_some() || supabase_key.is_some() {
        Some(SupabaseConfig {
            url: supabase_url,
            key: supabase_key,
        })
    } else {
        None
    };

    Ok(AppConfig {
        gemini_api_key: get("GEMINI_API_KEY"),
        gemini_model: get("GEMINI_MODEL"),
        assemblyai_api_key: get("ASSEMBLYAI_API_KEY"),
        user_id: get("DUMMY_USER_ID"),
        host: get("DADAM_HOST"),
        port: parse(&get, "DADAM_PORT")?,
        allowed_origin: get("DADAM_ALLOWED_ORIGIN"),
        vendor_timeout_secs: parse(&get, "DADAM_VENDOR_TIMEOUT_SECS")?,
        transcription_timeout_secs: parse(&get, "DADAM_TRANSCRIPTION_TIMEOUT_SECS")?,
        poll_interval_ms: parse(&get, "DADAM_POLL_INTERVAL_MS")?,
        supabase,
    })
}

fn parse<T, G>(get: &G, key: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    G: Fn(&str) -> Option<String>,
{
    get(key)
        .map(|raw| {
            raw.trim()
                .parse()
                .map_err(|e: T::Err| ConfigError::ValidationError {
                    key: key.to_string(),
                    message: e.to_string(),
                })
        })
        .transpose()
}
