//! Config show subcommand
//!
//! Displays configured hosts and users in table or JSON format.
//! Stored passwords are masked.

use anyhow::Result;
use comfy_table::{Cell, Color, Table};
use rdp_launcher_core::config::ABSENT_PASSWORD_SENTINEL;
use rdp_launcher_core::{Config, IdentityResolver, UserRecord};
use serde_json::Value;
use std::path::Path;

use crate::constants::PASSWORD_MASK;

/// Key holding the password in serialized user records
const SENSITIVE_FIELD: &str = "Password";

/// Show current configuration
pub fn cmd_config_show(
    config: &Config,
    identities: &IdentityResolver,
    config_path: &Path,
    json: bool,
) -> Result<()> {
    if json {
        return show_json(config);
    }

    show_tables(config, identities, config_path);
    Ok(())
}

fn show_json(config: &Config) -> Result<()> {
    let mut value = serde_json::to_value(config)?;
    mask_sensitive_fields(&mut value);
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

fn show_tables(config: &Config, identities: &IdentityResolver, config_path: &Path) {
    let mut hosts = Table::new();
    hosts.set_header(vec!["#", "Name", "Type", "Address"]);
    for (index, host) in config.hosts.iter().enumerate() {
        let kind = if host.kind.eq_ignore_ascii_case("rdp") {
            Cell::new(&host.kind)
        } else {
            Cell::new(&host.kind).fg(Color::Yellow)
        };
        hosts.add_row(vec![
            Cell::new(index + 1),
            Cell::new(&host.name),
            kind,
            Cell::new(&host.address),
        ]);
    }
    println!("{hosts}");
    println!();

    let mut users = Table::new();
    users.set_header(vec!["#", "Login", "Password"]);
    for (index, user) in config.users.iter().enumerate() {
        users.add_row(vec![
            Cell::new(index + 1),
            Cell::new(identities.login_for(user)),
            password_cell(user),
        ]);
    }
    println!("{users}");

    println!();
    println!("Config file: {}", config_path.display());
}

/// Describe a stored password without revealing it
fn password_cell(user: &UserRecord) -> Cell {
    match user.stored_password() {
        Some(_) => Cell::new(PASSWORD_MASK).fg(Color::Yellow),
        None => Cell::new("(prompt)").fg(Color::Green),
    }
}

/// Mask stored passwords in serialized config (for JSON output)
fn mask_sensitive_fields(value: &mut Value) {
    let Some(Value::Array(users)) = value.get_mut("user") else {
        return;
    };

    for user in users.iter_mut() {
        let Some(val) = user.get_mut(SENSITIVE_FIELD) else {
            continue;
        };

        let Value::String(s) = val else {
            continue;
        };

        if !s.is_empty() && s != ABSENT_PASSWORD_SENTINEL {
            *val = Value::String(PASSWORD_MASK.to_string());
        }
    }
}
