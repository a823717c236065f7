//! Handles all file input/output operations for the configuration.

use super::path::get_config_file_path;
use super::structure::Config;
use std::fs;
use std::io;
use std::path::Path;

/// Loads configuration from the configuration file
///
/// # Errors
///
/// Returns an error if:
/// - The configuration directory cannot be determined
/// - File reading fails
/// - JSON parsing fails
pub fn load_config() -> io::Result<Config> {
    let config_path = get_config_file_path()?;
    load_config_from_file(&config_path)
}

/// Loads configuration from the given file path
///
/// A missing or empty file loads as the default (empty) configuration.
///
/// # Errors
///
/// Returns an error if file reading fails or the content is not valid JSON
pub fn load_config_from_file(config_path: &Path) -> io::Result<Config> {
    if !config_path.exists() {
        return Ok(Config::default());
    }

    let config_content = fs::read_to_string(config_path)?;
    let trimmed_content = config_content.trim();

    if trimmed_content.is_empty() {
        return Ok(Config::default());
    }

    let config: Config = serde_json::from_str(trimmed_content).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!(
                "Failed to parse configuration file at {}: {}",
                config_path.display(),
                e
            ),
        )
    })?;

    Ok(config)
}

/// Saves configuration to the configuration file
///
/// # Arguments
///
/// * `config` - The configuration to save
///
/// # Errors
///
/// Returns an error if:
/// - The configuration directory cannot be determined
/// - Directory creation fails
/// - JSON serialization fails
/// - File writing fails
pub fn save_config(config: &Config) -> io::Result<()> {
    let config_path = get_config_file_path()?;
    save_config_to_file(config, &config_path)
}

/// Saves configuration to the given file path, creating parent directories
///
/// # Errors
///
/// Returns an error if directory creation, serialization, or writing fails
pub fn save_config_to_file(config: &Config, config_path: &Path) -> io::Result<()> {
    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut config_content = serialize_config(config)?;

    // Ensure the file ends with a newline
    if !config_content.ends_with('\n') {
        config_content.push('\n');
    }

    fs::write(config_path, config_content)?;
    Ok(())
}

/// Records a project and its technology in the configuration file
///
/// # Arguments
///
/// * `project` - Path to the project root
/// * `tech` - The technology name that was synced
///
/// # Returns
///
/// Returns `true` if the configuration changed
///
/// # Errors
///
/// Returns an error if loading or saving the configuration fails
pub fn record_project_in_config<P: AsRef<Path>>(project: P, tech: &str) -> io::Result<bool> {
    let config_path = get_config_file_path()?;
    record_project_in_config_file(project, tech, &config_path)
}

/// Records a project in the given configuration file
///
/// # Errors
///
/// Returns an error if loading or saving the configuration fails
pub fn record_project_in_config_file<P: AsRef<Path>>(
    project: P,
    tech: &str,
    config_path: &Path,
) -> io::Result<bool> {
    let project = project.as_ref().to_path_buf();
    let tech = tech.to_string();
    modify_config_file(config_path, |config| config.record_project(&project, &tech))
}

/// Removes a project from the configuration file
///
/// # Arguments
///
/// * `project` - Path to the project root to remove
///
/// # Returns
///
/// Returns `true` if the project was recorded and has been removed
///
/// # Errors
///
/// Returns an error if loading or saving the configuration fails
pub fn remove_project_from_config<P: AsRef<Path>>(project: P) -> io::Result<bool> {
    let config_path = get_config_file_path()?;
    remove_project_from_config_file(project, &config_path)
}

/// Removes a project from the given configuration file
///
/// # Errors
///
/// Returns an error if loading or saving the configuration fails
pub fn remove_project_from_config_file<P: AsRef<Path>>(
    project: P,
    config_path: &Path,
) -> io::Result<bool> {
    let project = project.as_ref().to_path_buf();
    modify_config_file(config_path, |config| config.remove_project(&project))
}

/// Modifies the configuration file atomically via a temp-file-and-rename write
///
/// # Arguments
///
/// * `modifier` - Function that modifies the configuration and returns whether changes were made
///
/// # Errors
///
/// Returns an error if file operations fail
fn modify_config_file<F>(config_path: &Path, modifier: F) -> io::Result<bool>
where
    F: FnOnce(&mut Config) -> bool,
{
    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut config = load_config_from_file(config_path)?;

    let changed = modifier(&mut config);

    if changed {
        let mut new_content = serialize_config(&config)?;
        if !new_content.ends_with('\n') {
            new_content.push('\n');
        }

        let temp_path = config_path.with_extension("json.tmp");
        fs::write(&temp_path, new_content)?;
        fs::rename(&temp_path, config_path)?;
    }

    Ok(changed)
}

fn serialize_config(config: &Config) -> io::Result<String> {
    serde_json::to_string_pretty(config).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("Failed to serialize configuration: {}", e),
        )
    })
}
