use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

/// Creates a rules root containing a flutter rule set with one skill.
fn write_flutter_rules(root: &Path) {
    let rules_dir = root.join("flutter_rules");
    fs::create_dir_all(rules_dir.join("skills")).unwrap();
    fs::write(rules_dir.join("core.md"), "RULES").unwrap();
    fs::write(rules_dir.join("skills/perf.md"), "Performance tips").unwrap();
}

fn rulesync_cmd(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("rulesync").unwrap();
    // Isolate the config registry from the real user config
    cmd.env("HOME", home);
    cmd
}

#[test]
fn test_sync_command() {
    let home = tempdir().unwrap();
    let rules_root = tempdir().unwrap();
    write_flutter_rules(rules_root.path());

    let project = tempdir().unwrap();

    rulesync_cmd(home.path())
        .arg("--rules-dir")
        .arg(rules_root.path())
        .arg("sync")
        .arg("flutter")
        .arg(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote: CLAUDE.md"))
        .stdout(predicate::str::contains("Synced 1 skill(s)"))
        .stdout(predicate::str::contains("Done."));

    for relative in [
        "CLAUDE.md",
        "GEMINI.md",
        "AGENT.md",
        ".cursorrules",
        ".github/copilot-instructions.md",
    ] {
        let dest = project.path().join(relative);
        assert!(dest.exists(), "missing target file {}", relative);

        let content = fs::read_to_string(&dest).unwrap();
        assert!(content.starts_with("RULES"));
        assert!(content.contains("perf.md"));
    }

    assert_eq!(
        fs::read_to_string(project.path().join(".prompts/skills/perf.md")).unwrap(),
        "Performance tips"
    );
}

#[test]
fn test_sync_command_missing_tech() {
    let home = tempdir().unwrap();
    let rules_root = tempdir().unwrap();
    let project = tempdir().unwrap();

    rulesync_cmd(home.path())
        .arg("--rules-dir")
        .arg(rules_root.path())
        .arg("sync")
        .arg("flutter")
        .arg(project.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("No rule set found for 'flutter'"));

    // The target project is left untouched
    assert!(!project.path().join("CLAUDE.md").exists());
    assert!(!project.path().join(".prompts").exists());
}

#[test]
fn test_sync_command_is_idempotent() {
    let home = tempdir().unwrap();
    let rules_root = tempdir().unwrap();
    write_flutter_rules(rules_root.path());

    let project = tempdir().unwrap();

    let run = || {
        rulesync_cmd(home.path())
            .arg("--rules-dir")
            .arg(rules_root.path())
            .arg("sync")
            .arg("flutter")
            .arg(project.path())
            .assert()
            .success();
    };

    run();
    let first = fs::read(project.path().join("CLAUDE.md")).unwrap();

    run();
    let second = fs::read(project.path().join("CLAUDE.md")).unwrap();

    assert!(first.starts_with(b"RULES"));
    assert_eq!(first, second);
}

#[test]
fn test_sync_command_strict_mirror() {
    let home = tempdir().unwrap();
    let rules_root = tempdir().unwrap();
    write_flutter_rules(rules_root.path());

    let project = tempdir().unwrap();
    let skills_dest = project.path().join(".prompts/skills");
    fs::create_dir_all(&skills_dest).unwrap();
    fs::write(skills_dest.join("stale.md"), "old").unwrap();

    rulesync_cmd(home.path())
        .arg("--rules-dir")
        .arg(rules_root.path())
        .arg("sync")
        .arg("flutter")
        .arg(project.path())
        .assert()
        .success();

    assert!(skills_dest.join("perf.md").exists());
    assert!(!skills_dest.join("stale.md").exists());
}

#[test]
fn test_sync_then_removed_skill_disappears() {
    let home = tempdir().unwrap();
    let rules_root = tempdir().unwrap();
    write_flutter_rules(rules_root.path());

    let project = tempdir().unwrap();

    rulesync_cmd(home.path())
        .arg("--rules-dir")
        .arg(rules_root.path())
        .arg("sync")
        .arg("flutter")
        .arg(project.path())
        .assert()
        .success();

    assert!(project.path().join(".prompts/skills/perf.md").exists());

    fs::remove_file(rules_root.path().join("flutter_rules/skills/perf.md")).unwrap();

    rulesync_cmd(home.path())
        .arg("--rules-dir")
        .arg(rules_root.path())
        .arg("sync")
        .arg("flutter")
        .arg(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Synced 0 skill(s)"));

    assert!(!project.path().join(".prompts/skills/perf.md").exists());
}

#[test]
fn test_list_command() {
    let home = tempdir().unwrap();
    let rules_root = tempdir().unwrap();
    write_flutter_rules(rules_root.path());

    let nestjs_dir = rules_root.path().join("nestjs_rules");
    fs::create_dir(&nestjs_dir).unwrap();
    fs::write(nestjs_dir.join("core.md"), "# NestJS").unwrap();

    rulesync_cmd(home.path())
        .arg("--rules-dir")
        .arg(rules_root.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("flutter"))
        .stdout(predicate::str::contains("nestjs"));
}

#[test]
fn test_list_command_empty_root() {
    let home = tempdir().unwrap();
    let rules_root = tempdir().unwrap();

    rulesync_cmd(home.path())
        .arg("--rules-dir")
        .arg(rules_root.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No rule sets found"));
}

#[test]
fn test_sync_missing_rules_dir() {
    let home = tempdir().unwrap();
    let project = tempdir().unwrap();
    let missing = home.path().join("no-such-rules");

    rulesync_cmd(home.path())
        .arg("--rules-dir")
        .arg(&missing)
        .arg("sync")
        .arg("flutter")
        .arg(project.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error resolving rules directory"));
}

#[test]
fn test_forget_command() {
    let home = tempdir().unwrap();
    let rules_root = tempdir().unwrap();
    write_flutter_rules(rules_root.path());

    let project = tempdir().unwrap();

    // Sync records the project in the registry
    rulesync_cmd(home.path())
        .arg("--rules-dir")
        .arg(rules_root.path())
        .arg("sync")
        .arg("flutter")
        .arg(project.path())
        .assert()
        .success();

    rulesync_cmd(home.path())
        .arg("forget")
        .arg(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Successfully removed"));

    // Forgetting again reports the project as unknown
    rulesync_cmd(home.path())
        .arg("forget")
        .arg(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("is not in the recorded projects list"));
}

#[test]
fn test_resync_command() {
    let home = tempdir().unwrap();
    let rules_root = tempdir().unwrap();
    write_flutter_rules(rules_root.path());

    let project = tempdir().unwrap();

    rulesync_cmd(home.path())
        .arg("--rules-dir")
        .arg(rules_root.path())
        .arg("sync")
        .arg("flutter")
        .arg(project.path())
        .assert()
        .success();

    // Update the core rules, then resync the recorded project
    fs::write(rules_root.path().join("flutter_rules/core.md"), "UPDATED RULES").unwrap();

    rulesync_cmd(home.path())
        .arg("--rules-dir")
        .arg(rules_root.path())
        .arg("resync")
        .assert()
        .success()
        .stdout(predicate::str::contains("Done."));

    let content = fs::read_to_string(project.path().join("CLAUDE.md")).unwrap();
    assert!(content.starts_with("UPDATED RULES"));
}

#[test]
fn test_resync_command_no_projects() {
    let home = tempdir().unwrap();
    let rules_root = tempdir().unwrap();

    rulesync_cmd(home.path())
        .arg("--rules-dir")
        .arg(rules_root.path())
        .arg("resync")
        .assert()
        .success()
        .stdout(predicate::str::contains("No recorded projects to resync"));
}

#[test]
fn test_help_messages() {
    let mut cmd = Command::cargo_bin("rulesync").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "A CLI tool for syncing AI-agent rule sets into projects",
        ))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("sync"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("resync"))
        .stdout(predicate::str::contains("forget"));

    let mut cmd = Command::cargo_bin("rulesync").unwrap();
    cmd.arg("sync").arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Usage: rulesync sync"));

    let mut cmd = Command::cargo_bin("rulesync").unwrap();
    cmd.arg("forget").arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Usage: rulesync forget"));
}
