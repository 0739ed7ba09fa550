//! Config file discovery

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

/// Config file name looked up in each candidate directory
pub const CONFIG_FILE_NAME: &str = "config.json";

/// File names tried in each candidate directory, in order
pub const CONFIG_FILE_NAMES: [&str; 3] = [CONFIG_FILE_NAME, "config.yaml", "config.yml"];

/// Per-user config directory (e.g. `~/.config/rdp-launcher`)
pub fn get_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "rdp-launcher").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Candidate config paths in lookup order: working directory, then user config dir
pub fn candidate_config_paths(cwd: &Path) -> Vec<PathBuf> {
    let mut dirs = vec![cwd.to_path_buf()];
    dirs.extend(get_config_dir());
    dirs.iter()
        .flat_map(|dir| CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)))
        .collect()
}

/// Resolve which config file to use
///
/// An explicit path always wins, even if it does not exist, so the read error
/// names the file the operator asked for. Otherwise the first existing
/// candidate is used, falling back to the working-directory path.
pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    let cwd = std::env::current_dir().ok()?;
    let candidates = candidate_config_paths(&cwd);
    candidates
        .iter()
        .find(|path| path.exists())
        .or_else(|| candidates.first())
        .cloned()
}
