//! Output utilities for CLI commands
//!
//! This module provides terminal output helpers: a spinner for the session
//! sequence, step result styling and error formatting.

pub mod colors;
pub mod errors;
pub mod spinner;

pub use colors::step_style;
pub use errors::show_error;
pub use spinner::CommandSpinner;
