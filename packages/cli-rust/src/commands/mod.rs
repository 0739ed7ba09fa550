//! CLI command implementations

mod config;
mod connect;

pub use config::{ConfigArgs, cmd_config, cmd_config_path};
pub use connect::cmd_connect;
