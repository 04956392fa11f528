//! Application configuration value object

use serde::{Deserialize, Serialize};

/// Default Gemini model used for text improvement
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";

/// Default bind host
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default bind port
pub const DEFAULT_PORT: u16 = 8000;

/// Default frontend origin allowed by CORS
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";

/// Default timeout for a single outbound vendor request, in seconds
pub const DEFAULT_VENDOR_TIMEOUT_SECS: u64 = 60;

/// Default upper bound on a whole transcription job, in seconds
pub const DEFAULT_TRANSCRIPTION_TIMEOUT_SECS: u64 = 300;

/// Default interval between transcript status polls, in milliseconds
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 1_000;

/// Supabase connection settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupabaseConfig {
    pub url: Option<String>,
    pub key: Option<String>,
}

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub gemini_api_key: Option<String>,
    pub gemini_model: Option<String>,
    pub assemblyai_api_key: Option<String>,
    pub user_id: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub allowed_origin: Option<String>,
    pub vendor_timeout_secs: Option<u64>,
    pub transcription_timeout_secs: Option<u64>,
    pub poll_interval_ms: Option<u64>,
    pub supabase: Option<SupabaseConfig>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            gemini_api_key: None,
            gemini_model: Some(DEFAULT_GEMINI_MODEL.to_string()),
            assemblyai_api_key: None,
            user_id: None,
            host: Some(DEFAULT_HOST.to_string()),
            port: Some(DEFAULT_PORT),
            allowed_origin: Some(DEFAULT_ALLOWED_ORIGIN.to_string()),
            vendor_timeout_secs: Some(DEFAULT_VENDOR_TIMEOUT_SECS),
            transcription_timeout_secs: Some(DEFAULT_TRANSCRIPTION_TIMEOUT_SECS),
            poll_interval_ms: Some(DEFAULT_POLL_INTERVAL_MS),
            supabase: None,
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            gemini_api_key: other.gemini_api_key.or(self.gemini_api_key),
            gemini_model: other.gemini_model.or(self.gemini_model),
            assemblyai_api_key: other.assemblyai_api_key.or(self.assemblyai_api_key),
            user_id: other.user_id.or(self.user_id),
            host: other.host.or(self.host),
            port: other.port.or(self.port),
            allowed_origin: other.allowed_origin.or(self.allowed_origin),
            vendor_timeout_secs: other.vendor_timeout_secs.or(self.vendor_timeout_secs),
            transcription_timeout_secs: other
                .transcription_timeout_secs
                .or(self.transcription_timeout_secs),
            poll_interval_ms: other.poll_interval_ms.or(self.poll_interval_ms),
            supabase: Self::merge_supabase_config(self.supabase, other.supabase),
        }
    }

    /// Merge Supabase config sections
    fn merge_supabase_config(
        base: Option<SupabaseConfig>,
        other: Option<SupabaseConfig>,
    ) -> Option<SupabaseConfig> {
        match (base, other) {
            (None, None) => None,
            (Some(b), None) => Some(b),
            (None, Some(o)) => Some(o),
            (Some(b), Some(o)) => Some(SupabaseConfig {
                url: o.url.or(b.url),
                key: o.key.or(b.key),
            }),
        }
    }

    /// Get the Gemini model, or the default if not set
    pub fn gemini_model_or_default(&self) -> &str {
        self.gemini_model.as_deref().unwrap_or(DEFAULT_GEMINI_MODEL)
    }

    /// Get the bind host, or the default if not set
    pub fn host_or_default(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Get the bind port, or the default if not set
    pub fn port_or_default(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Get the CORS origin, or the default if not set
    pub fn allowed_origin_or_default(&self) -> &str {
        self.allowed_origin
            .as_deref()
            .unwrap_or(DEFAULT_ALLOWED_ORIGIN)
    }
}
