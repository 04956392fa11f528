//! Configuration sources

mod env;
mod xdg;

pub use env::{config_from_env, config_from_process_env};
pub use xdg::XdgConfigStore;
