//! Centralized error formatting
//!
//! Turns launcher errors into styled messages with a hint on what to do next.

use console::style;
use rdp_launcher_core::LauncherError;

/// Format a launcher error with actionable guidance
pub fn format_launcher_error(e: &LauncherError) -> String {
    match e {
        LauncherError::ConfigRead { path, source } => {
            format!(
                "{}\n\n  {}\n  {}\n\n  {} {}",
                style("Config file could not be read").red().bold(),
                style(path.display()).yellow(),
                source,
                style("Tip:").cyan(),
                "Create config.json or config.yaml with \"host\" and \"user\" lists, or pass --config <PATH>."
            )
        }
        LauncherError::ConfigurationShape(msg) => {
            format!(
                "{}\n\n  {}\n\n  {} {}",
                style("Configuration error").red().bold(),
                msg,
                style("Tip:").cyan(),
                "Hosts need Name and Address; users need Domain and Username."
            )
        }
        LauncherError::PromptAborted(reason) => {
            format!(
                "{} {}",
                style("Cancelled.").yellow().bold(),
                style(format!("({reason})")).dim()
            )
        }
        _ => e.to_string(),
    }
}

/// Format any error, using launcher-specific guidance when available
pub fn format_error(e: &anyhow::Error) -> String {
    match e.downcast_ref::<LauncherError>() {
        Some(launcher) => format_launcher_error(launcher),
        None => format!("{} {e:#}", style("Error:").red().bold()),
    }
}

/// Show an error in a rich format to stderr
///
/// Prints a blank line before the error message for visual separation.
pub fn show_error(e: &anyhow::Error) {
    let msg = format_error(e);
    eprintln!();
    eprintln!("{msg}");
}
