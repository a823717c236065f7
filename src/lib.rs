//! A Rust library for syncing AI-agent rule sets into project configuration files.
//!
//! A rule set for a technology lives in a `<tech>_rules/` directory: a
//! mandatory `core.md` with the master instructions plus an optional
//! `skills/` directory of markdown skill files. Syncing mirrors the skills
//! into the target project's `.prompts/skills/` directory and writes the
//! core content, with a generated footer listing the skills, to the fixed
//! agent-configuration files (CLAUDE.md, GEMINI.md, AGENT.md, .cursorrules,
//! and .github/copilot-instructions.md).

pub mod config;
pub mod constants;
pub mod footer;
pub mod skills;
pub mod source;
pub mod sync;

pub use config::{
    load_config, record_project_in_config, remove_project_from_config, save_config, Config,
};
pub use footer::skills_footer;
pub use skills::mirror_skills;
pub use source::{list_rule_sets, resolve_rules_root, RuleSource};
pub use sync::{sync_project, SyncReport};
