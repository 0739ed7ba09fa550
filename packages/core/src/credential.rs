//! Password resolution
//!
//! A stored password from the matching user record is used when present.
//! Otherwise the operator is prompted until a valid password is entered.

use std::fmt;

use tracing::{debug, info, warn};

use crate::config::UserRecord;
use crate::error::LauncherError;
use crate::identity::IdentityResolver;
use crate::selector::Prompter;

/// Passwords must be longer than this many characters
pub const MIN_PASSWORD_EXCLUSIVE: usize = 6;

const MASK: &str = "********";

/// A password that does not show up in `Debug` output or logs
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Value for log records: the real password only when `reveal` is set
    pub fn for_log(&self, reveal: bool) -> &str {
        if reveal { &self.0 } else { MASK }
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(")?;
        f.write_str(MASK)?;
        f.write_str(")")
    }
}

/// Where a resolved password came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordSource {
    Configuration,
    Prompt,
}

impl fmt::Display for PasswordSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PasswordSource::Configuration => f.write_str("config"),
            PasswordSource::Prompt => f.write_str("prompt"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ResolvedPassword {
    pub password: Password,
    pub source: PasswordSource,
}

/// Everything needed to register and launch one session
#[derive(Debug, Clone)]
pub struct Credential {
    pub address: String,
    pub user: String,
    pub password: Password,
}

/// Check the minimum length rule for interactively entered passwords
pub fn validate_password(input: &str) -> Result<(), LauncherError> {
    if input.chars().count() <= MIN_PASSWORD_EXCLUSIVE {
        return Err(LauncherError::Validation(format!(
            "Password must have more than {MIN_PASSWORD_EXCLUSIVE} characters"
        )));
    }
    Ok(())
}

/// Stored password for `selected`, if any
///
/// Identities are re-derived with the same resolver used for display. When
/// several records derive the same identity, the last one wins.
pub fn stored_password(
    selected: &str,
    users: &[UserRecord],
    identities: &IdentityResolver,
) -> Option<String> {
    users
        .iter()
        .rev()
        .find(|user| identities.login_for(user).as_str() == selected)
        .and_then(|user| user.stored_password())
        .map(str::to_string)
}

/// Prompt until a valid password is entered or the prompt is aborted
pub fn prompt_password<P: Prompter>(prompter: &P) -> Result<Password, LauncherError> {
    loop {
        let input = prompter.password("Password")?;
        match validate_password(&input) {
            Ok(()) => return Ok(Password::new(input)),
            Err(err) if err.is_fatal() => return Err(err),
            Err(err) => {
                warn!("Password rejected: {err}");
                prompter.show_error(&err.to_string());
            }
        }
    }
}

/// Resolve the password for the selected identity
pub fn resolve_password<P: Prompter>(
    prompter: &P,
    selected: &str,
    users: &[UserRecord],
    identities: &IdentityResolver,
) -> Result<ResolvedPassword, LauncherError> {
    if let Some(password) = stored_password(selected, users, identities) {
        info!(user = %selected, "Using stored password");
        return Ok(ResolvedPassword {
            password: Password::new(password),
            source: PasswordSource::Configuration,
        });
    }

    debug!(user = %selected, "No stored password, prompting");
    let password = prompt_password(prompter)?;
    Ok(ResolvedPassword {
        password,
        source: PasswordSource::Prompt,
    })
}
