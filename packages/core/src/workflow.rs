//! Host → user → password workflow
//!
//! Collects everything the session needs. Nothing outside the process is
//! touched here, so a failure at this stage leaves nothing to clean up.

use tracing::{debug, info};

use crate::config::Config;
use crate::credential::{Credential, PasswordSource, resolve_password};
use crate::error::LauncherError;
use crate::identity::IdentityResolver;
use crate::selector::{Prompter, Selector};

/// Outcome of the interactive part of a run
#[derive(Debug, Clone)]
pub struct Selection {
    pub host_name: String,
    pub credential: Credential,
    pub password_source: PasswordSource,
}

/// Select a host and identity, then resolve the password
pub fn collect_credential<P: Prompter>(
    prompter: &P,
    config: &Config,
    identities: &IdentityResolver,
    reveal_secrets: bool,
) -> Result<Selection, LauncherError> {
    let selector = Selector::new(prompter, config.settings.page_size);

    let host = selector.select_host(&config.hosts)?;

    let logins: Vec<String> = identities
        .logins(&config.users)
        .into_iter()
        .map(String::from)
        .collect();
    let user = selector.select_user_or_add(&logins)?;

    let resolved = resolve_password(prompter, &user, &config.users, identities)?;
    info!(user = %user, source = %resolved.source, "Password resolved");
    debug!(
        password = %resolved.password.for_log(reveal_secrets),
        "Resolved password"
    );

    Ok(Selection {
        host_name: host.name.clone(),
        credential: Credential {
            address: host.address.clone(),
            user,
            password: resolved.password,
        },
        password_source: resolved.source,
    })
}
