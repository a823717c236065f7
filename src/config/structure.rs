//! Defines the `Config` struct and its implementation.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Configuration structure that records which technology was last synced
/// into each project.
///
/// Keys are project roots, values are technology names. A `BTreeMap` keeps
/// the on-disk JSON stable across runs.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct Config {
    /// Synced projects, keyed by project root
    pub projects: BTreeMap<PathBuf, String>,
}

impl Config {
    /// Creates a new empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a project and the technology synced into it.
    ///
    /// # Arguments
    ///
    /// * `project` - Path to the project root
    /// * `tech` - The technology name that was synced
    ///
    /// # Returns
    ///
    /// Returns `true` if the entry was added or its technology changed,
    /// `false` if the project was already recorded with the same technology
    pub fn record_project<P: AsRef<Path>>(&mut self, project: P, tech: &str) -> bool {
        let key = canonical_key(project);
        match self.projects.get(&key) {
            Some(existing) if existing == tech => false,
            _ => {
                self.projects.insert(key, tech.to_string());
                true
            }
        }
    }

    /// Removes a project from the configuration.
    ///
    /// # Arguments
    ///
    /// * `project` - Path to the project root to remove
    ///
    /// # Returns
    ///
    /// Returns `true` if the project was removed (was present),
    /// `false` if it wasn't recorded
    pub fn remove_project<P: AsRef<Path>>(&mut self, project: P) -> bool {
        let key = canonical_key(project);
        self.projects.remove(&key).is_some()
    }

    /// Checks if a project is recorded in the configuration.
    ///
    /// # Arguments
    ///
    /// * `project` - Path to the project root to check
    pub fn contains_project<P: AsRef<Path>>(&self, project: P) -> bool {
        let key = canonical_key(project);
        self.projects.contains_key(&key)
    }

    /// Returns the technology last synced into a project, if recorded.
    pub fn tech_for<P: AsRef<Path>>(&self, project: P) -> Option<&str> {
        let key = canonical_key(project);
        self.projects.get(&key).map(String::as_str)
    }

    /// Gets the recorded projects and their technologies
    pub fn projects(&self) -> &BTreeMap<PathBuf, String> {
        &self.projects
    }

    /// Gets the count of recorded projects
    pub fn project_count(&self) -> usize {
        self.projects.len()
    }
}

/// Canonicalizes a path when possible, so the same project recorded via
/// different relative spellings maps to one entry.
fn canonical_key<P: AsRef<Path>>(project: P) -> PathBuf {
    match project.as_ref().canonicalize() {
        Ok(path) => path,
        Err(_) => project.as_ref().to_path_buf(),
    }
}
