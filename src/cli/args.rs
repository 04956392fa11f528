//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::domain::config::AppConfig;

/// Dadam API - grammar improvement and transcription relay
#[derive(Parser, Debug)]
#[command(name = "dadam-api")]
#[command(version)]
#[command(about = "HTTP relay for AI text improvement and audio transcription")]
#[command(long_about = None)]
pub struct Cli {
    /// Address to bind (overrides DADAM_HOST)
    #[arg(long, value_name = "HOST")]
    pub host: Option<String>,

    /// Port to listen on (overrides DADAM_PORT)
    #[arg(short = 'p', long, value_name = "PORT")]
    pub port: Option<u16>,

    /// Path to a TOML config file
    #[arg(short = 'c', long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty, env = "DADAM_LOG_FORMAT")]
    pub log_format: LogFormat,

    /// Config subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Config values given on the command line
    pub fn to_config(&self) -> AppConfig {
        AppConfig {
            host: self.host.clone(),
            port: self.port,
            ..AppConfig::empty()
        }
    }
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Inspect configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug, Clone, Copy)]
pub enum ConfigAction {
    /// Print the config file path
    Path,
    /// Validate the merged configuration and print it (secrets hidden)
    Check,
}

/// Log output format
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines
    Pretty,
    /// One JSON object per line
    Json,
}
