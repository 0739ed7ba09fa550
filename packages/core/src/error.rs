//! Launcher error types
//!
//! Fatal errors (configuration, aborted prompts) end the run. Validation errors
//! are recoverable by re-entering input. External command errors are recorded
//! in the session report and never stop the sequence.

use std::path::PathBuf;
use thiserror::Error;

use crate::session::SessionStep;

/// Errors that can occur while selecting, resolving and launching
#[derive(Debug, Error)]
pub enum LauncherError {
    /// Configuration does not match the host/user record shapes
    #[error("Configuration shape error: {0}")]
    ConfigurationShape(String),

    /// Configuration file could not be read
    #[error("Failed to read config file {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Interactive prompt ended abnormally (interrupt, closed input)
    #[error("Prompt aborted: {0}")]
    PromptAborted(String),

    /// Interactively entered value was rejected
    #[error("{0}")]
    Validation(String),

    /// An orchestration command failed to spawn or exited non-zero
    #[error("{step} command failed: {message}")]
    ExternalCommand { step: SessionStep, message: String },
}

impl LauncherError {
    /// Whether this error ends the run
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            LauncherError::Validation(_) | LauncherError::ExternalCommand { .. }
        )
    }
}
