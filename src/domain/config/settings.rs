//! Validated server settings

use std::time::Duration;

use secrecy::SecretString;

use super::app_config::{
    AppConfig, DEFAULT_POLL_INTERVAL_MS, DEFAULT_TRANSCRIPTION_TIMEOUT_SECS,
    DEFAULT_VENDOR_TIMEOUT_SECS,
};
use crate::domain::error::ConfigError;

/// Supabase credentials, present only when both URL and key are configured.
#[derive(Debug)]
pub struct SupabaseSettings {
    pub url: String,
    pub key: SecretString,
}

/// Fully resolved settings the server runs with.
///
/// Built once at start-up from the merged [`AppConfig`]. Only the Gemini
/// key is mandatory; the transcription key, user id and Supabase credentials
/// gate their features and are reported at first use when absent.
#[derive(Debug)]
pub struct ServerSettings {
    pub gemini_api_key: SecretString,
    pub gemini_model: String,
    pub assemblyai_api_key: Option<SecretString>,
    pub user_id: Option<String>,
    pub supabase: Option<SupabaseSettings>,
    pub host: String,
    pub port: u16,
    pub allowed_origin: String,
    pub vendor_timeout: Duration,
    pub transcription_timeout: Duration,
    pub poll_interval: Duration,
}

impl ServerSettings {
    /// Validate a merged config into server settings.
    pub fn from_config(config: AppConfig) -> Result<Self, ConfigError> {
        let gemini_api_key = non_empty(config.gemini_api_key.clone())
            .ok_or(ConfigError::MissingKey("GEMINI_API_KEY"))?;

        let supabase = match config.supabase.clone() {
            None => None,
            Some(section) => match (non_empty(section.url), non_empty(section.key)) {
                (None, None) => None,
                (Some(url), Some(key)) => Some(SupabaseSettings {
                    url: url.trim_end_matches('/').to_string(),
                    key: SecretString::from(key),
                }),
                (Some(_), None) => return Err(ConfigError::MissingKey("SUPABASE_KEY")),
                (None, Some(_)) => return Err(ConfigError::MissingKey("SUPABASE_URL")),
            },
        };

        let port = config.port_or_default();
        if port == 0 {
            return Err(ConfigError::ValidationError {
                key: "port".to_string(),
                message: "must be between 1 and 65535".to_string(),
            });
        }

        Ok(Self {
            gemini_api_key: SecretString::from(gemini_api_key),
            gemini_model: config.gemini_model_or_default().to_string(),
            assemblyai_api_key: non_empty(config.assemblyai_api_key.clone()).map(SecretString::from),
            user_id: non_empty(config.user_id.clone()),
            supabase,
            host: config.host_or_default().to_string(),
            port,
            allowed_origin: config.allowed_origin_or_default().to_string(),
            vendor_timeout: Duration::from_secs(positive(
                "vendor_timeout_secs",
                config.vendor_timeout_secs.unwrap_or(DEFAULT_VENDOR_TIMEOUT_SECS),
            )?),
            transcription_timeout: Duration::from_secs(positive(
                "transcription_timeout_secs",
                config
                    .transcription_timeout_secs
                    .unwrap_or(DEFAULT_TRANSCRIPTION_TIMEOUT_SECS),
            )?),
            poll_interval: Duration::from_millis(positive(
                "poll_interval_ms",
                config.poll_interval_ms.unwrap_or(DEFAULT_POLL_INTERVAL_MS),
            )?),
        })
    }

    /// Socket address string to bind
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

fn positive(key: &str, value: u64) -> Result<u64, ConfigError> {
    if value == 0 {
        return Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: "must be greater than zero".to_string(),
        });
    }
    Ok(value)
}
