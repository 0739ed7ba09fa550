//! Prechecks before prompting

use anyhow::{Result, bail};
use console::Term;

/// Prompts render on stderr; refuse to start without a terminal there
pub fn verify_tty() -> Result<()> {
    if !Term::stderr().is_term() {
        bail!(
            "rdp-launcher needs an interactive terminal.\n\
Run it from a console window rather than piping input or output."
        );
    }
    Ok(())
}
