//! Dadam API entry point

use std::process::ExitCode;

use clap::Parser;

use dadam_api::cli::{
    handle_config_command, init_tracing, load_merged_config, run_server, Cli, Commands,
    Presenter, EXIT_ERROR,
};
use dadam_api::domain::config::ServerSettings;
use dadam_api::infrastructure::XdgConfigStore;

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is fine; real environment variables still apply
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let presenter = Presenter::new();

    let store = match cli.config.as_ref() {
        Some(path) => XdgConfigStore::with_path(path),
        None => XdgConfigStore::new(),
    };
    let cli_config = cli.to_config();

    // Handle subcommands
    if let Some(Commands::Config { action }) = cli.command {
        if let Err(e) = handle_config_command(action, &store, cli_config, &presenter).await {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
        return ExitCode::SUCCESS;
    }

    // Configuration errors are fatal before anything is served
    let settings = match load_merged_config(&store, cli_config)
        .await
        .and_then(ServerSettings::from_config)
    {
        Ok(settings) => settings,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    };

    init_tracing(cli.log_format);

    match run_server(settings).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "server failed");
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}
