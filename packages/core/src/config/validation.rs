//! Configuration validation with actionable error messages
//!
//! Checks the parsed configuration for problems serde cannot catch and
//! suggests how to fix each one.

use std::collections::HashSet;

use super::schema::Config;
use crate::identity::IdentityResolver;
use console::style;

/// A fatal configuration problem with a suggested fix
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    /// The config field that has an error
    pub field: String,
    /// Description of what's wrong
    pub message: String,
    /// How to fix it
    pub fix_hint: String,
}

/// A non-fatal configuration warning
#[derive(Debug, Clone)]
pub struct ConfigWarning {
    /// The config field with a potential issue
    pub field: String,
    /// Description of the warning
    pub message: String,
    /// Suggested change
    pub fix_hint: String,
}

/// Validate configuration and return warnings or first error
///
/// Returns Ok(warnings) if validation passes (possibly with non-fatal warnings).
/// Returns Err(issue) on the first fatal problem encountered.
pub fn validate_config(
    config: &Config,
    identities: &IdentityResolver,
) -> Result<Vec<ConfigWarning>, ConfigIssue> {
    let mut warnings = Vec::new();

    if config.hosts.is_empty() {
        return Err(ConfigIssue {
            field: "host".to_string(),
            message: "At least one host is required".to_string(),
            fix_hint: r#"Add an entry like {"Name": "Box1", "Address": "10.0.0.5"} to "host""#
                .to_string(),
        });
    }

    for (index, host) in config.hosts.iter().enumerate() {
        if host.address.trim().is_empty() {
            return Err(ConfigIssue {
                field: format!("host[{index}].Address"),
                message: format!("Host '{}' has an empty address", host.name),
                fix_hint: "Set Address to a hostname or IP".to_string(),
            });
        }
        if host.name.trim().is_empty() {
            return Err(ConfigIssue {
                field: format!("host[{index}].Name"),
                message: format!("Host at {} has an empty name", host.address),
                fix_hint: "Give the host a Name to search by".to_string(),
            });
        }
        if !host.kind.eq_ignore_ascii_case("rdp") {
            warnings.push(ConfigWarning {
                field: format!("host[{index}].Type"),
                message: format!(
                    "Host '{}' has type '{}'; it will still be launched as rdp",
                    host.name, host.kind
                ),
                fix_hint: r#"Set Type to "rdp""#.to_string(),
            });
        }
    }

    for (index, user) in config.users.iter().enumerate() {
        if user.username.trim().is_empty() {
            return Err(ConfigIssue {
                field: format!("user[{index}].Username"),
                message: "Username cannot be empty".to_string(),
                fix_hint: r#"Use a login name, or "USERNAME" for the current OS user"#
                    .to_string(),
            });
        }
    }

    let mut seen = HashSet::new();
    for user in &config.users {
        let login = identities.login_for(user);
        if !seen.insert(login.clone()) {
            warnings.push(ConfigWarning {
                field: "user".to_string(),
                message: format!(
                    "Identity '{login}' appears more than once; the last entry's password is used"
                ),
                fix_hint: "Remove the duplicate user entry".to_string(),
            });
        }
    }

    if config.settings.page_size == 0 {
        warnings.push(ConfigWarning {
            field: "settings.page_size".to_string(),
            message: "page_size 0 asks for a search query before every list".to_string(),
            fix_hint: "Set settings.page_size to 4".to_string(),
        });
    }

    Ok(warnings)
}

/// Display a validation error with styled formatting
pub fn display_config_issue(issue: &ConfigIssue) {
    eprintln!();
    eprintln!("{}", style("Error: Configuration error").red().bold());
    eprintln!();
    eprintln!("  {}  {}", style("Field:").dim(), issue.field);
    eprintln!("  {}  {}", style("Problem:").dim(), issue.message);
    eprintln!();
    eprintln!("{}:", style("To fix").dim());
    eprintln!("  {}", style(&issue.fix_hint).cyan());
    eprintln!();
}

/// Display a validation warning with styled formatting
pub fn display_config_warning(warning: &ConfigWarning) {
    eprintln!(
        "{} {} ({})",
        style("Warning:").yellow().bold(),
        warning.message,
        style(&warning.field).dim()
    );
    eprintln!("  {} {}", style("Tip:").cyan(), warning.fix_hint);
}
