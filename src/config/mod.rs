//! Configuration file management for tracking synced projects.
//!
//! This module manages a configuration file that records which technology's
//! rules were last synced into each project. The `resync` command uses this
//! registry to refresh every recorded project in one pass.

pub mod io;
pub mod path;
pub mod structure;

pub use io::{
    load_config, load_config_from_file, record_project_in_config,
    record_project_in_config_file, remove_project_from_config,
    remove_project_from_config_file, save_config, save_config_to_file,
};
pub use path::get_config_file_path;
pub use structure::Config;
