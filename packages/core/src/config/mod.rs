//! Configuration loading
//!
//! The config file is parsed straight into the typed schema; any mismatch is a
//! `ConfigurationShape` error so the rest of the launcher only sees valid records.

pub mod paths;
pub mod schema;
pub mod validation;

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::LauncherError;

pub use schema::{
    ABSENT_PASSWORD_SENTINEL, CommandTemplates, Config, HostRecord, Settings, UserRecord,
};
pub use validation::{
    ConfigIssue, ConfigWarning, display_config_issue, display_config_warning, validate_config,
};

/// Config file syntax
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml,
}

impl ConfigFormat {
    /// Pick the syntax from the file extension; anything but `.yaml`/`.yml` is JSON
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Self::Yaml
            }
            _ => Self::Json,
        }
    }
}

/// Parse configuration from JSON text
pub fn parse_config(text: &str) -> Result<Config, LauncherError> {
    parse_config_as(text, ConfigFormat::Json)
}

/// Parse configuration text in the given syntax
pub fn parse_config_as(text: &str, format: ConfigFormat) -> Result<Config, LauncherError> {
    match format {
        ConfigFormat::Json => serde_json::from_str(text)
            .map_err(|e| LauncherError::ConfigurationShape(format!("invalid JSON config: {e}"))),
        ConfigFormat::Yaml => serde_yaml::from_str(text)
            .map_err(|e| LauncherError::ConfigurationShape(format!("invalid YAML config: {e}"))),
    }
}

/// Load configuration from a file
pub fn load_config(path: &Path) -> Result<Config, LauncherError> {
    let format = ConfigFormat::from_path(path);
    debug!(?format, "Loading config from {}", path.display());
    let text = fs::read_to_string(path).map_err(|source| LauncherError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse_config_as(&text, format)?;
    debug!(
        hosts = config.hosts.len(),
        users = config.users.len(),
        "Config loaded"
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn load_config_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"host": [{{"Name": "Box1", "Type": "rdp", "Address": "10.0.0.5"}}],
               "user": [{{"Domain": "CORP", "Username": "alice", "Password": "NA"}}]}}"#
        )
        .unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.hosts[0].address, "10.0.0.5");
        assert_eq!(config.users[0].username, "alice");
    }

    #[test]
    fn load_yaml_config_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(
            &path,
            r"host:
  - Name: Box1
    Type: rdp
    Address: 10.0.0.5
user:
  - Domain: CORP
    Username: alice
    Password: NA
",
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.hosts[0].name, "Box1");
        assert_eq!(config.hosts[0].address, "10.0.0.5");
        assert_eq!(config.users[0].domain, "CORP");
        assert_eq!(config.users[0].username, "alice");
        assert_eq!(config.users[0].stored_password(), None);
    }

    #[test]
    fn yml_extension_accepts_lowercase_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("launcher.YML");
        std::fs::write(
            &path,
            "hosts:\n  - {name: Box1, address: 10.0.0.5}\nusers:\n  - {domain: CORP, username: alice, password: hunter2}\n",
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.hosts[0].kind, "rdp");
        assert_eq!(config.users[0].stored_password(), Some("hunter2"));
    }

    #[test]
    fn malformed_yaml_is_shape_error() {
        let err = parse_config_as("host: [\n  - Name: Box1", ConfigFormat::Yaml).unwrap_err();
        assert!(matches!(err, LauncherError::ConfigurationShape(_)));

        let err = parse_config_as("host:\n  - Name: Box1\n    Port: 3389\n", ConfigFormat::Yaml)
            .unwrap_err();
        assert!(matches!(err, LauncherError::ConfigurationShape(_)));
    }

    #[test]
    fn format_follows_extension() {
        assert_eq!(ConfigFormat::from_path(Path::new("config.yaml")), ConfigFormat::Yaml);
        assert_eq!(ConfigFormat::from_path(Path::new("config.yml")), ConfigFormat::Yaml);
        assert_eq!(ConfigFormat::from_path(Path::new("config.json")), ConfigFormat::Json);
        assert_eq!(ConfigFormat::from_path(Path::new("config")), ConfigFormat::Json);
    }

    #[test]
    fn malformed_json_is_shape_error() {
        let err = parse_config("{\"host\": [").unwrap_err();
        assert!(matches!(err, LauncherError::ConfigurationShape(_)));
    }

    #[test]
    fn wrong_record_shape_is_shape_error() {
        let err = parse_config(r#"{"host": ["Box1"]}"#).unwrap_err();
        assert!(matches!(err, LauncherError::ConfigurationShape(_)));
    }

    #[test]
    fn missing_host_collection_is_shape_error() {
        let err = parse_config(r#"{"user": []}"#).unwrap_err();
        assert!(matches!(err, LauncherError::ConfigurationShape(_)));
    }

    #[test]
    fn missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(&dir.path().join("config.json")).unwrap_err();
        assert!(matches!(err, LauncherError::ConfigRead { .. }));
    }
}
