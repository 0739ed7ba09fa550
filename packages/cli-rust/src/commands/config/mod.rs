//! Config subcommand implementations
//!
//! Provides `rdp-launcher config` subcommands for inspecting configuration.

mod show;

use anyhow::Result;
use clap::{Args, Subcommand};
use rdp_launcher_core::{Config, IdentityResolver};
use std::path::Path;

pub use show::cmd_config_show;

/// Configuration command arguments
#[derive(Args)]
pub struct ConfigArgs {
    /// Output as JSON instead of table format
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Option<ConfigSubcommands>,
}

/// Configuration subcommands
#[derive(Subcommand)]
pub enum ConfigSubcommands {
    /// Show configured hosts and users
    Show {
        /// Output as JSON instead of table format
        #[arg(long)]
        json: bool,
    },
    /// Print the config file path in use
    Path,
}

impl ConfigArgs {
    /// Whether the subcommand reads the config file
    pub fn needs_config(&self) -> bool {
        !matches!(self.command, Some(ConfigSubcommands::Path))
    }
}

/// Print the resolved config path
pub fn cmd_config_path(config_path: &Path) -> Result<()> {
    println!("{}", config_path.display());
    Ok(())
}

/// Handle config command
///
/// Routes to the appropriate handler based on the subcommand.
/// If no subcommand is given, defaults to Show.
pub fn cmd_config(
    args: &ConfigArgs,
    config: &Config,
    identities: &IdentityResolver,
    config_path: &Path,
) -> Result<()> {
    match args.command {
        Some(ConfigSubcommands::Show { json }) => {
            cmd_config_show(config, identities, config_path, json)
        }
        Some(ConfigSubcommands::Path) => cmd_config_path(config_path),
        None => cmd_config_show(config, identities, config_path, args.json),
    }
}
