//! CLI layer - Command-line interface
//!
//! Contains argument parsing, output formatting, configuration loading,
//! and the server runner.

pub mod app;
pub mod args;
pub mod presenter;

// Re-export commonly used types
pub use app::{
    handle_config_command, init_tracing, load_merged_config, run_server, ServeError, EXIT_ERROR,
};
pub use args::{Cli, Commands, ConfigAction, LogFormat};
pub use presenter::Presenter;
