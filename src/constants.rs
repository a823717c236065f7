//! Shared constants used across the application.

/// Suffix appended to a technology name to form its rules directory name
pub const RULES_DIR_SUFFIX: &str = "_rules";

/// The filename of a rule set's master instruction file
pub const CORE_FILENAME: &str = "core.md";

/// The directory name holding a rule set's skill files
pub const SKILLS_DIR: &str = "skills";

/// The destination directory for synced skill files, relative to the target project root
pub const SKILLS_DEST_DIR: &str = ".prompts/skills";

/// The fixed agent-configuration files written on every sync, relative to the target project root
pub const TARGET_FILES: [&str; 5] = [
    "CLAUDE.md",
    "GEMINI.md",
    "AGENT.md",
    ".cursorrules",
    ".github/copilot-instructions.md",
];
