//! Configuration schema for rdp-launcher
//!
//! Defines the host/user record shapes and the optional launcher settings.

use serde::{Deserialize, Serialize};

/// Stored password value meaning "no password configured"
pub const ABSENT_PASSWORD_SENTINEL: &str = "NA";

/// Main configuration structure for rdp-launcher
///
/// Serialized to/from `config.json` or `config.yaml`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Hosts offered for selection, in display order
    #[serde(rename = "host", alias = "hosts")]
    pub hosts: Vec<HostRecord>,

    /// Users offered for selection, in display order
    #[serde(rename = "user", alias = "users", default)]
    pub users: Vec<UserRecord>,

    /// Launcher behavior overrides
    #[serde(default)]
    pub settings: Settings,
}

/// A remote host the operator can connect to
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct HostRecord {
    #[serde(rename = "Name", alias = "name")]
    pub name: String,

    /// Connection type (only "rdp" sessions are launched)
    #[serde(rename = "Type", alias = "type", default = "default_host_type")]
    pub kind: String,

    #[serde(rename = "Address", alias = "address")]
    pub address: String,
}

impl HostRecord {
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: default_host_type(),
            address: address.into(),
        }
    }

    /// Label shown in the selection list: name, type and address
    pub fn display_label(&self) -> String {
        format!("{} [{}] ({})", self.name, self.kind, self.address)
    }
}

/// A login identity the operator can use
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct UserRecord {
    #[serde(rename = "Domain", alias = "domain")]
    pub domain: String,

    /// Literal username, or `USERNAME` for the current OS user
    #[serde(rename = "Username", alias = "username")]
    pub username: String,

    /// Stored password; `NA`, empty or missing means "prompt"
    #[serde(
        rename = "Password",
        alias = "password",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub password: Option<String>,
}

impl UserRecord {
    pub fn new(domain: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            username: username.into(),
            password: None,
        }
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Stored password, treating the `NA` sentinel and empty values as absent
    pub fn stored_password(&self) -> Option<&str> {
        self.password
            .as_deref()
            .filter(|p| !p.is_empty() && *p != ABSENT_PASSWORD_SENTINEL)
    }
}

/// Launcher behavior settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Seconds to wait after registering the credential (default: 2)
    #[serde(default = "default_register_settle_secs")]
    pub register_settle_secs: u64,

    /// Seconds to wait after launching the session, before cleanup (default: 3)
    #[serde(default = "default_launch_settle_secs")]
    pub launch_settle_secs: u64,

    /// Kill register/cleanup commands that run longer than this (default: no limit)
    #[serde(default)]
    pub command_timeout_secs: Option<u64>,

    /// Lists longer than this ask for a search query first (default: 4)
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Diagnostics log path (default: "./output.log")
    #[serde(default = "default_log_file")]
    pub log_file: String,

    /// Shell command templates for the three session steps
    #[serde(default)]
    pub commands: CommandTemplates,
}

/// Command line templates
///
/// Placeholders: `{address}`, `{user}`, `{password}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CommandTemplates {
    #[serde(default = "default_register_command")]
    pub register: String,

    #[serde(default = "default_launch_command")]
    pub launch: String,

    #[serde(default = "default_cleanup_command")]
    pub cleanup: String,
}

fn default_host_type() -> String {
    "rdp".to_string()
}

fn default_register_settle_secs() -> u64 {
    2
}

fn default_launch_settle_secs() -> u64 {
    3
}

fn default_page_size() -> usize {
    4
}

fn default_log_file() -> String {
    "./output.log".to_string()
}

fn default_register_command() -> String {
    "cmdkey /generic:TERMSRV/{address} /user:{user} /pass:{password}".to_string()
}

fn default_launch_command() -> String {
    "start mstsc /f /v:{address}".to_string()
}

fn default_cleanup_command() -> String {
    "cmdkey /delete:TERMSRV/{address}".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            register_settle_secs: default_register_settle_secs(),
            launch_settle_secs: default_launch_settle_secs(),
            command_timeout_secs: None,
            page_size: default_page_size(),
            log_file: default_log_file(),
            commands: CommandTemplates::default(),
        }
    }
}

impl Default for CommandTemplates {
    fn default() -> Self {
        Self {
            register: default_register_command(),
            launch: default_launch_command(),
            cleanup: default_cleanup_command(),
        }
    }
}
