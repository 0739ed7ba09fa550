//! Login identity derivation
//!
//! A login identity is `DOMAIN\username`. The `USERNAME` sentinel is replaced
//! with the current OS user. The OS user is captured once per run so the
//! identities shown in the selection list and the ones re-derived for the
//! password lookup always agree.

use std::fmt;

use crate::config::UserRecord;

/// Username value meaning "the currently logged-in OS user"
pub const CURRENT_USER_SENTINEL: &str = "USERNAME";

/// A derived `DOMAIN\username` string
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LoginIdentity(String);

impl LoginIdentity {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LoginIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<LoginIdentity> for String {
    fn from(identity: LoginIdentity) -> Self {
        identity.0
    }
}

/// Derives login identities against a fixed OS username
#[derive(Debug, Clone)]
pub struct IdentityResolver {
    os_username: String,
}

impl IdentityResolver {
    pub fn new(os_username: impl Into<String>) -> Self {
        Self {
            os_username: os_username.into(),
        }
    }

    /// Capture the current OS user from the environment
    pub fn from_env() -> Self {
        Self::new(current_os_username())
    }

    /// Username after sentinel substitution
    pub fn effective_username<'a>(&'a self, user: &'a UserRecord) -> &'a str {
        if user.username == CURRENT_USER_SENTINEL {
            &self.os_username
        } else {
            &user.username
        }
    }

    pub fn login_for(&self, user: &UserRecord) -> LoginIdentity {
        LoginIdentity(format!("{}\\{}", user.domain, self.effective_username(user)))
    }

    /// Identities for every record, in configured order
    pub fn logins(&self, users: &[UserRecord]) -> Vec<LoginIdentity> {
        users.iter().map(|user| self.login_for(user)).collect()
    }
}

/// Current OS username
///
/// `USERNAME` (Windows) and `USER` are checked before asking the OS directly.
pub fn current_os_username() -> String {
    ["USERNAME", "USER"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|value| !value.trim().is_empty())
        .unwrap_or_else(whoami::username)
}
