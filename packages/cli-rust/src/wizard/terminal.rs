//! Terminal prompts backed by dialoguer

use console::{Term, style};
use dialoguer::{Input, Password, Select};
use rdp_launcher_core::{LauncherError, Prompter};

use crate::constants::VISIBLE_ITEMS;

/// Prompts on the controlling terminal
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl TerminalPrompter {
    pub fn new() -> Self {
        Self
    }
}

/// Restore the cursor and turn a prompt failure into an abort
fn aborted(reason: impl Into<String>) -> LauncherError {
    // Restore cursor in case it was hidden
    let _ = Term::stderr().show_cursor();
    LauncherError::PromptAborted(reason.into())
}

impl Prompter for TerminalPrompter {
    fn select(&self, prompt: &str, items: &[String]) -> Result<usize, LauncherError> {
        Select::new()
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .max_length(VISIBLE_ITEMS)
            .interact_opt()
            .map_err(|e| aborted(e.to_string()))?
            .ok_or_else(|| aborted("selection cancelled"))
    }

    fn input(&self, prompt: &str, allow_empty: bool) -> Result<String, LauncherError> {
        Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(allow_empty)
            .interact_text()
            .map_err(|e| aborted(e.to_string()))
    }

    fn password(&self, prompt: &str) -> Result<String, LauncherError> {
        Password::new()
            .with_prompt(prompt)
            .allow_empty_password(true)
            .interact()
            .map_err(|e| aborted(e.to_string()))
    }

    fn show_error(&self, message: &str) {
        eprintln!("{} {}", style("✗").red(), style(message).red());
    }
}
