//! Handles the logic for determining the configuration file path.

use directories::ProjectDirs;
use std::io;
use std::path::{Path, PathBuf};

/// Configuration file name
const CONFIG_FILE_NAME: &str = "config.json";

/// Application name used for the configuration directory
const APP_NAME: &str = "rulesync";

/// Returns the path to the configuration file
///
/// Uses the platform-specific application configuration directory according to:
/// - Linux: `$XDG_CONFIG_HOME/rulesync/config.json` or `$HOME/.config/rulesync/config.json`
/// - macOS: `$HOME/Library/Application Support/rulesync/config.json`
///
/// Falls back to a path under `$HOME` when the platform-specific directory
/// cannot be determined or does not respect a `HOME` override (tests set one).
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined
pub fn get_config_file_path() -> io::Result<PathBuf> {
    let home_dir = std::env::var("HOME").map_err(|_| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Unable to determine home directory for configuration path",
        )
    })?;

    if let Some(project_dirs) = ProjectDirs::from("", "", APP_NAME) {
        let config_path = project_dirs.config_dir().join(CONFIG_FILE_NAME);
        // ProjectDirs resolves HOME once per process; honor an override by
        // only trusting paths that live under the current HOME.
        if config_path.starts_with(&home_dir) {
            return Ok(config_path);
        }
    }

    let config_dir = if cfg!(target_os = "macos") {
        Path::new(&home_dir)
            .join("Library")
            .join("Application Support")
            .join(APP_NAME)
    } else {
        Path::new(&home_dir).join(".config").join(APP_NAME)
    };

    Ok(config_dir.join(CONFIG_FILE_NAME))
}
