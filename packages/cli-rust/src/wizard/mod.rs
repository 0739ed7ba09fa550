//! Interactive connection wizard
//!
//! Walks the operator through host, user and password selection.

mod prechecks;
mod summary;
mod terminal;

pub use prechecks::verify_tty;
pub use summary::display_summary;
pub use terminal::TerminalPrompter;

use anyhow::Result;
use console::style;
use rdp_launcher_core::{Config, IdentityResolver, Prompter, Selection, collect_credential};

/// Run the interactive part of a connection
///
/// Returns the selection without touching the credential store; the caller
/// runs the session.
pub fn run_wizard<P: Prompter>(
    prompter: &P,
    config: &Config,
    identities: &IdentityResolver,
    quiet: bool,
    log_secrets: bool,
) -> Result<Selection> {
    if !quiet {
        println!();
        println!("{}", style("rdp-launcher").cyan().bold());
        println!("{}", style("=".repeat(12)).dim());
        println!();
    }

    let selection = collect_credential(prompter, config, identities, log_secrets)?;

    if !quiet {
        println!();
        display_summary(&selection);
        println!();
    }

    Ok(selection)
}
