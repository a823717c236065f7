//! Rule set location and core rule file reading.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::constants::{CORE_FILENAME, RULES_DIR_SUFFIX, SKILLS_DIR};

/// A located rule set for one technology.
///
/// A rule set lives in a `<tech>_rules/` directory under the rules root and
/// consists of a mandatory `core.md` plus an optional `skills/` directory of
/// markdown skill files. The source is read-only; syncing never mutates it.
#[derive(Debug, Clone)]
pub struct RuleSource {
    tech: String,
    dir: PathBuf,
}

impl RuleSource {
    /// Locates the rule set for `tech` under `rules_root`.
    ///
    /// # Arguments
    ///
    /// * `rules_root` - The directory containing the `<tech>_rules/` directories
    /// * `tech` - The technology name selecting the rule set
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `tech` is empty (`InvalidInput`)
    /// - The `<tech>_rules/` directory does not exist (`NotFound`)
    /// - The directory exists but has no `core.md` (`NotFound`)
    ///
    pub fn locate<P: AsRef<Path>>(rules_root: P, tech: &str) -> io::Result<Self> {
        if tech.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "Technology name must not be empty",
            ));
        }

        let dir = rules_root
            .as_ref()
            .join(format!("{}{}", tech, RULES_DIR_SUFFIX));

        if !dir.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!(
                    "No rule set found for '{}': directory {} does not exist",
                    tech,
                    dir.display()
                ),
            ));
        }

        let source = Self {
            tech: tech.to_string(),
            dir,
        };

        if !source.core_path().is_file() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Could not find {} in {}", CORE_FILENAME, source.dir.display()),
            ));
        }

        Ok(source)
    }

    /// The technology name this rule set was located for.
    pub fn tech(&self) -> &str {
        &self.tech
    }

    /// The rule set's directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path to the rule set's `core.md`.
    pub fn core_path(&self) -> PathBuf {
        self.dir.join(CORE_FILENAME)
    }

    /// Path to the rule set's `skills/` directory (which may not exist).
    pub fn skills_dir(&self) -> PathBuf {
        self.dir.join(SKILLS_DIR)
    }

    /// Whether this rule set ships any skill files.
    pub fn has_skills(&self) -> bool {
        self.skills_dir().is_dir()
    }

    /// Reads the full content of the rule set's `core.md`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid UTF-8.
    pub fn core_content(&self) -> io::Result<String> {
        fs::read_to_string(self.core_path())
    }
}

/// Lists the technology names with a valid rule set under `rules_root`.
///
/// A directory counts as a rule set when its name ends in `_rules` and it
/// contains a `core.md` file. The returned names are sorted and have the
/// `_rules` suffix stripped.
///
/// # Errors
///
/// Returns an error if `rules_root` cannot be read.
pub fn list_rule_sets<P: AsRef<Path>>(rules_root: P) -> io::Result<Vec<String>> {
    let mut techs = Vec::new();

    for entry in fs::read_dir(rules_root.as_ref())? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }

        let file_name = entry.file_name();
        let name = file_name.to_string_lossy();
        if let Some(tech) = name.strip_suffix(RULES_DIR_SUFFIX) {
            if !tech.is_empty() && entry.path().join(CORE_FILENAME).is_file() {
                techs.push(tech.to_string());
            }
        }
    }

    techs.sort();
    Ok(techs)
}

/// Resolves the rules root directory.
///
/// When `override_dir` is given (the `--rules-dir` flag) it is used directly;
/// otherwise the directory containing the running executable is used, which
/// keeps rule sets colocated with the installed binary.
///
/// # Errors
///
/// Returns an error if:
/// - The override directory does not exist
/// - The executable path cannot be determined
///
pub fn resolve_rules_root(override_dir: Option<&Path>) -> io::Result<PathBuf> {
    if let Some(dir) = override_dir {
        if !dir.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Rules directory {} does not exist", dir.display()),
            ));
        }
        return Ok(dir.to_path_buf());
    }

    let exe_path = std::env::current_exe()?;
    match exe_path.parent() {
        Some(parent) => Ok(parent.to_path_buf()),
        None => Err(io::Error::new(
            io::ErrorKind::NotFound,
            "Unable to determine the executable's directory for the rules root",
        )),
    }
}
