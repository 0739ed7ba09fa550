//! rdp-launcher CLI - Pick a host and identity, then launch a remote desktop session
//!
//! This module contains the shared CLI implementation used by the binary.

mod commands;
mod constants;
mod logging;
mod output;
pub mod wizard;

pub use output::show_error;

use anyhow::{Result, anyhow};
use clap::{Parser, Subcommand};
use console::style;
use rdp_launcher_core::config::{
    display_config_issue, display_config_warning, paths, validate_config,
};
use rdp_launcher_core::{Config, IdentityResolver, get_version, load_config};
use std::path::{Path, PathBuf};
use tracing::{error, info};

use logging::LogDestination;

/// Pick a host and identity, then launch a remote desktop session
#[derive(Parser)]
#[command(name = "rdp-launcher")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(
    about = "Pick a host and identity, then launch a remote desktop session",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file, JSON or YAML (default: ./config.json or ./config.yaml, then the user config directory)
    #[arg(short, long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Increase verbosity level
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Diagnostics log file (overrides settings.log_file)
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Include passwords in debug log records
    #[arg(long, global = true)]
    log_secrets: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Select a host and user, then launch the session (default)
    Connect,
    /// Inspect configuration
    Config(commands::ConfigArgs),
}

impl Cli {
    fn log_file(&self, config: &Config) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(&config.settings.log_file))
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Configure color output
    if cli.no_color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    let config_path = paths::resolve_config_path(cli.config.as_deref())
        .ok_or_else(|| anyhow!("Could not determine config path"))?;

    if let Some(Commands::Config(ref args)) = cli.command
        && !args.needs_config()
    {
        return commands::cmd_config_path(&config_path);
    }

    let config = load_config(&config_path)?;
    let identities = IdentityResolver::from_env();

    match validate_config(&config, &identities) {
        Ok(warnings) => {
            if !cli.quiet {
                for warning in &warnings {
                    display_config_warning(warning);
                }
            }
        }
        Err(issue) => {
            display_config_issue(&issue);
            eprintln!("  Config file: {}", style(config_path.display()).yellow());
            std::process::exit(1);
        }
    }

    let log_file = cli.log_file(&config);
    let (dispatch, destination) = logging::build_dispatch(&log_file, cli.verbose);

    if cli.verbose > 0 {
        eprintln!(
            "{} Config: {}",
            style("[info]").cyan(),
            config_path.display()
        );
        if let LogDestination::File(ref path) = destination {
            eprintln!("{} Log: {}", style("[info]").cyan(), path.display());
        }
    }

    tracing::dispatcher::with_default(&dispatch, || {
        if let LogDestination::Stderr(ref reason) = destination {
            info!(
                path = %log_file.display(),
                %reason,
                "Failed to log to file, using default stderr"
            );
        }
        info!(
            version = get_version(),
            config = %config_path.display(),
            hosts = config.hosts.len(),
            users = config.users.len(),
            "rdp-launcher starting"
        );

        let result = dispatch_command(&cli, &config, &identities, &config_path);
        if let Err(ref err) = result {
            error!("{err:#}");
        }
        result
    })
}

fn dispatch_command(
    cli: &Cli,
    config: &Config,
    identities: &IdentityResolver,
    config_path: &Path,
) -> Result<()> {
    match cli.command {
        Some(Commands::Config(ref args)) => {
            commands::cmd_config(args, config, identities, config_path)
        }
        Some(Commands::Connect) | None => {
            commands::cmd_connect(config, identities, cli.quiet, cli.log_secrets)
        }
    }
}
