//! The sync pipeline: rule set in, agent-configuration files out.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::constants::TARGET_FILES;
use crate::footer::skills_footer;
use crate::skills::mirror_skills;
use crate::source::RuleSource;

/// The outcome of a successful sync run.
#[derive(Debug)]
pub struct SyncReport {
    /// The technology whose rules were synced
    pub tech: String,
    /// The target project root
    pub target: PathBuf,
    /// The target files written, relative to the project root
    pub files_written: Vec<PathBuf>,
    /// The skill filenames mirrored into `.prompts/skills/`
    pub skills: Vec<String>,
}

/// Syncs the rule set for `tech` into the target project.
///
/// This is the whole pipeline in one pass:
///
/// 1. Locate `<tech>_rules/` under `rules_root` and read its `core.md`
/// 2. Strictly mirror the rule set's `skills/` into `<target>/.prompts/skills/`
/// 3. Append the generated skills footer to the core content
/// 4. Write the combined content to each fixed target file, creating missing
///    parent directories (`.github/` in particular)
///
/// The operation is idempotent: re-running with an unchanged source produces
/// byte-identical outputs. There is no rollback; on failure the last
/// successful write stands and a re-run repairs the target.
///
/// # Errors
///
/// Returns an error if:
/// - The rule set or its `core.md` is missing (the target is left untouched)
/// - Any filesystem operation fails (delete, copy, create, or write)
///
pub fn sync_project<P, Q>(rules_root: P, tech: &str, target: Q) -> io::Result<SyncReport>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let target = target.as_ref();

    // Locate before touching the target, so a bad tech name is side-effect free
    let source = RuleSource::locate(rules_root, tech)?;
    let core = source.core_content()?;

    let skills = mirror_skills(&source, target)?;

    let mut content = core;
    content.push_str(&skills_footer(&skills));

    let mut files_written = Vec::with_capacity(TARGET_FILES.len());
    for relative in TARGET_FILES {
        let dest = target.join(relative);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&dest, &content)?;
        files_written.push(PathBuf::from(relative));
    }

    Ok(SyncReport {
        tech: source.tech().to_string(),
        target: target.to_path_buf(),
        files_written,
        skills,
    })
}
