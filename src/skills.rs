//! Strict mirroring of a rule set's skill files into a target project.

use std::fs;
use std::io;
use std::path::Path;

use crate::constants::SKILLS_DEST_DIR;
use crate::source::RuleSource;

/// Mirrors the rule set's `skills/` directory into `<target_root>/.prompts/skills/`.
///
/// The destination is cleared and rebuilt on every call, so after a successful
/// run it contains exactly the files currently present in the source. Stale
/// files from earlier syncs never survive. The destination is cleared even
/// when the source ships no `skills/` directory at all.
///
/// # Arguments
///
/// * `source` - The located rule set to copy skills from
/// * `target_root` - The target project root
///
/// # Returns
///
/// The sorted top-level skill filenames, for use in the generated footer.
/// Hidden (dot-prefixed) entries and subdirectories are copied but not listed.
///
/// # Errors
///
/// Returns an error if clearing, directory creation, or copying fails.
pub fn mirror_skills<P: AsRef<Path>>(source: &RuleSource, target_root: P) -> io::Result<Vec<String>> {
    let target_skills = target_root.as_ref().join(SKILLS_DEST_DIR);

    if target_skills.exists() {
        fs::remove_dir_all(&target_skills)?;
    }
    fs::create_dir_all(&target_skills)?;

    let source_skills = source.skills_dir();
    if !source_skills.is_dir() {
        return Ok(Vec::new());
    }

    copy_dir_recursive(&source_skills, &target_skills)?;

    let mut names = Vec::new();
    for entry in fs::read_dir(&source_skills)? {
        let entry = entry?;
        let file_name = entry.file_name().to_string_lossy().into_owned();
        if entry.file_type()?.is_file() && !file_name.starts_with('.') {
            names.push(file_name);
        }
    }

    // Sorted so repeated syncs produce byte-identical footers
    names.sort();
    Ok(names)
}

/// Recursively copies the contents of `source_dir` into `target_dir`.
///
/// `target_dir` must already exist. Symlinked entries are followed and copied
/// as regular files.
///
/// # Errors
///
/// Returns an error if directory reading, creation, or file copying fails.
fn copy_dir_recursive(source_dir: &Path, target_dir: &Path) -> io::Result<()> {
    for entry in fs::read_dir(source_dir)? {
        let entry = entry?;
        let source_path = entry.path();
        let target_path = target_dir.join(entry.file_name());

        if source_path.is_dir() {
            fs::create_dir(&target_path)?;
            copy_dir_recursive(&source_path, &target_path)?;
        } else {
            fs::copy(&source_path, &target_path)?;
        }
    }

    Ok(())
}
