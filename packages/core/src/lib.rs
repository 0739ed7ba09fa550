//! rdp-launcher-core
//!
//! Core library for rdp-launcher: config schema and loading, host/user
//! selection, password resolution and the register → launch → cleanup
//! session sequence.

pub mod config;
pub mod credential;
pub mod error;
pub mod identity;
pub mod selector;
pub mod session;
pub mod workflow;

#[cfg(test)]
mod test_support;

pub use config::{Config, HostRecord, Settings, UserRecord, load_config};
pub use credential::{Credential, Password, PasswordSource};
pub use error::LauncherError;
pub use identity::{IdentityResolver, LoginIdentity};
pub use selector::{Prompter, Selector};
pub use session::{
    CommandRunner, SessionOrchestrator, SessionReport, SessionStep, SessionTimings, ShellRunner,
};
pub use workflow::{Selection, collect_credential};

/// Get the version of rdp-launcher-core
pub fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
