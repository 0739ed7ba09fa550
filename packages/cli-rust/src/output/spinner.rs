//! Spinner for the session sequence

use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

/// A spinner that reports how a long-running step ended
pub struct CommandSpinner {
    bar: ProgressBar,
}

impl CommandSpinner {
    pub fn new(message: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg} {elapsed:.dim}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar }
    }

    /// Hidden spinner in quiet mode
    pub fn new_maybe(message: &str, quiet: bool) -> Self {
        if quiet {
            Self {
                bar: ProgressBar::hidden(),
            }
        } else {
            Self::new(message)
        }
    }

    pub fn success(&self, message: &str) {
        self.bar
            .finish_with_message(format!("{} {message}", style("✓").green()));
    }

    pub fn fail(&self, message: &str) {
        self.bar
            .finish_with_message(format!("{} {message}", style("✗").red()));
    }
}
