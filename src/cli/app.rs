//! Server runner and configuration loading

use std::sync::Arc;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::application::ports::{ConfigStore, HistoryStore, LanguageModel, Transcriber};
use crate::domain::config::{AppConfig, ServerSettings};
use crate::domain::error::ConfigError;
use crate::http::{self, AppState};
use crate::infrastructure::config::config_from_process_env;
use crate::infrastructure::{
    http_client, AssemblyAiTranscriber, GeminiClient, SupabaseHistoryStore,
};

use super::args::{ConfigAction, LogFormat};
use super::presenter::Presenter;

/// Exit code for startup and config failures
pub const EXIT_ERROR: u8 = 1;

/// Default log filter when RUST_LOG is unset
const DEFAULT_LOG_FILTER: &str = "dadam_api=info,tower_http=info";

/// Errors that stop the server
#[derive(Debug, Error)]
pub enum ServeError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Invalid allowed origin '{origin}': {reason}")]
    InvalidOrigin { origin: String, reason: String },

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Install the global tracing subscriber
pub fn init_tracing(format: LogFormat) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match format {
        LogFormat::Pretty => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

/// Load and merge configuration from defaults, file, env, and CLI
pub async fn load_merged_config(
    store: &dyn ConfigStore,
    cli_config: AppConfig,
) -> Result<AppConfig, ConfigError> {
    let file_config = store.load().await?;
    let env_config = config_from_process_env()?;

    Ok(layer_configs(file_config, env_config, cli_config))
}

/// Merge: defaults < file < env < cli
fn layer_configs(file: AppConfig, env: AppConfig, cli: AppConfig) -> AppConfig {
    AppConfig::defaults().merge(file).merge(env).merge(cli)
}

/// Handle `config` subcommands
pub async fn handle_config_command(
    action: ConfigAction,
    store: &dyn ConfigStore,
    cli_config: AppConfig,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Path => {
            presenter.output(&store.path().to_string_lossy());
            Ok(())
        }
        ConfigAction::Check => {
            let config = load_merged_config(store, cli_config).await?;
            let settings = ServerSettings::from_config(config)?;

            presenter.key_value("bind", &settings.bind_addr());
            presenter.key_value("gemini_model", &settings.gemini_model);
            presenter.key_value("gemini_api_key", Presenter::presence(true));
            presenter.key_value(
                "assemblyai_api_key",
                Presenter::presence(settings.assemblyai_api_key.is_some()),
            );
            presenter.key_value(
                "user_id",
                settings.user_id.as_deref().unwrap_or("not set"),
            );
            presenter.key_value(
                "supabase",
                settings
                    .supabase
                    .as_ref()
                    .map(|s| s.url.as_str())
                    .unwrap_or("not set"),
            );
            presenter.key_value("allowed_origin", &settings.allowed_origin);
            presenter.success("Configuration is valid");
            Ok(())
        }
    }
}

/// Build adapters from settings and serve until a shutdown signal
pub async fn run_server(settings: ServerSettings) -> Result<(), ServeError> {
    let addr = settings.bind_addr();
    let ServerSettings {
        gemini_api_key,
        gemini_model,
        assemblyai_api_key,
        user_id,
        supabase,
        allowed_origin,
        vendor_timeout,
        transcription_timeout,
        poll_interval,
        ..
    } = settings;

    let client = http_client(vendor_timeout)?;

    let model: Arc<dyn LanguageModel> = Arc::new(
        GeminiClient::with_model(gemini_api_key, gemini_model.as_str())
            .with_client(client.clone()),
    );

    let transcriber: Option<Arc<dyn Transcriber>> = match assemblyai_api_key {
        Some(key) => Some(Arc::new(
            AssemblyAiTranscriber::new(key)
                .with_client(client.clone())
                .with_polling(poll_interval, transcription_timeout),
        )),
        None => {
            tracing::warn!("ASSEMBLYAI_API_KEY not set, /api/transcribe will return 500");
            None
        }
    };

    let history: Option<Arc<dyn HistoryStore>> = match supabase {
        Some(s) => Some(Arc::new(
            SupabaseHistoryStore::new(s.url, s.key).with_client(client.clone()),
        )),
        None => {
            tracing::warn!("Supabase not configured, history is disabled");
            None
        }
    };

    if user_id.is_none() {
        tracing::warn!("DUMMY_USER_ID not set, history is disabled");
    }

    let cors = http::cors_layer(&allowed_origin).map_err(|e| ServeError::InvalidOrigin {
        origin: allowed_origin.clone(),
        reason: e.to_string(),
    })?;

    let state = AppState::new(model, transcriber, history, user_id);
    let app = http::router(state).layer(cors);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ServeError::Bind {
            addr: addr.clone(),
            source,
        })?;

    tracing::info!(%addr, model = %gemini_model, origin = %allowed_origin, "Dadam API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServeError::Serve)?;

    tracing::info!("server stopped");
    Ok(())
}

/// Resolve on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
