// Author: Eshan Roy
// SPDX-License-Identifier: MIT

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

/// A `cml` command isolated from any real configuration.
fn cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("cml").unwrap();
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env("XDG_CONFIG_HOME", dir.path())
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn check_accepts_motivated_feature() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .args(["check", "--no-color"])
        .write_stdin("feat(api): add retry support\n\nCalls to the API fail under load.\n")
        .assert()
        .success()
        .stdout("ok: commit message follows the convention\n");
}

#[test]
fn check_warns_without_failing() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .args(["check", "--no-color", "-m", "feat(api): add retry support"])
        .assert()
        .success()
        .stdout(contains("warning: missing-motivation:"));
}

#[test]
fn check_rejects_untyped_message() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .args(["check", "--no-color", "-m", "Fix bug."])
        .assert()
        .code(1)
        .stdout(contains("error: missing-type:"))
        .stdout(contains("error: capitalized-subject:"))
        .stdout(contains("error: trailing-period:"));
}

#[test]
fn check_rejects_empty_stdin() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .args(["check", "--no-color"])
        .write_stdin("")
        .assert()
        .code(1)
        .stdout(contains("missing-type").and(contains("missing-subject")));
}

#[test]
fn check_default_command_reads_stdin() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .write_stdin("docs: fix typo in readme\n")
        .assert()
        .success();
}

#[test]
fn check_message_file_strips_comments() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("COMMIT_EDITMSG");
    std::fs::write(
        &path,
        "docs: describe setup\n# Please enter the commit message for your changes.\n",
    )
    .unwrap();

    cmd(&dir)
        .args(["check", "--no-color"])
        .arg(&path)
        .assert()
        .success()
        .stdout("ok: commit message follows the convention\n");

    cmd(&dir)
        .args(["check", "--no-color", "--keep-comments"])
        .arg(&path)
        .assert()
        .code(1)
        .stdout(contains("missing-blank-line"));
}

#[test]
fn check_strict_fails_on_warnings() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .args(["check", "--no-color", "--strict", "-m", "fix: handle timeout"])
        .assert()
        .code(1)
        .stdout(contains("missing-motivation"));
}

#[test]
fn check_multiple_files() {
    let dir = TempDir::new().unwrap();
    let good = dir.path().join("good.txt");
    let bad = dir.path().join("bad.txt");
    std::fs::write(&good, "chore: bump deps\n").unwrap();
    std::fs::write(&bad, "wip\n").unwrap();

    cmd(&dir)
        .args(["check", "--no-color"])
        .arg(&good)
        .arg(&bad)
        .assert()
        .code(1)
        .stdout(contains("good.txt:"))
        .stdout(contains("bad.txt:"))
        .stdout(contains("error: missing-type:"));
}

#[test]
fn check_json_output() {
    let dir = TempDir::new().unwrap();
    let output = cmd(&dir)
        .args(["--format", "json", "check", "-m", "Fix bug."])
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["valid"], false);
    assert_eq!(json["violations"][0]["rule_id"], "missing-type");
}

#[test]
fn check_missing_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .args(["check", "does-not-exist.txt"])
        .assert()
        .code(1)
        .stderr(contains("Error: Input error"));
}

#[test]
fn check_unreadable_file_does_not_stop_batch() {
    let dir = TempDir::new().unwrap();
    let first = dir.path().join("first.txt");
    let last = dir.path().join("last.txt");
    std::fs::write(&first, "chore: bump deps\n").unwrap();
    std::fs::write(&last, "wip\n").unwrap();

    cmd(&dir)
        .args(["check", "--no-color"])
        .arg(&first)
        .arg("missing.txt")
        .arg(&last)
        .assert()
        .code(1)
        .stdout(contains("first.txt:"))
        .stdout(contains("last.txt:"))
        .stdout(contains("error: missing-type:"))
        .stderr(contains("Error: Input error").and(contains("missing.txt")));
}

#[test]
fn check_unreadable_file_in_json_batch() {
    let dir = TempDir::new().unwrap();
    let good = dir.path().join("good.txt");
    std::fs::write(&good, "chore: bump deps\n").unwrap();

    let output = cmd(&dir)
        .args(["--format", "json", "check"])
        .arg(&good)
        .arg("missing.txt")
        .arg(&good)
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let documents = json.as_array().unwrap();
    assert_eq!(documents.len(), 3);
    assert_eq!(documents[0]["valid"], true);
    assert_eq!(documents[1]["input"], "missing.txt");
    assert_eq!(documents[1]["valid"], false);
    assert!(documents[1]["error"].as_str().unwrap().contains("missing.txt"));
    assert_eq!(documents[2]["valid"], true);
}

#[test]
fn check_reports_source_line_of_commented_message() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("COMMIT_EDITMSG");
    std::fs::write(&path, "feat: add x\n# comment\n# another\nbody straight\n").unwrap();

    let output = cmd(&dir)
        .args(["--format", "json", "check"])
        .arg(&path)
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["violations"][0]["rule_id"], "missing-blank-line");
    assert_eq!(json["violations"][0]["line"], 4);
}

#[test]
fn check_ignores_leading_blank_lines() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .args(["check", "--no-color"])
        .write_stdin("\nfeat: add x\n")
        .assert()
        .success()
        .stdout("warning: missing-motivation: 'feat' commits should explain the change in a body or footer\n");
}

#[test]
fn check_piped_output_has_no_hint_lines() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .args(["check", "-m", "feat: add x"])
        .assert()
        .success()
        .stdout(predicate::str::contains("→").not())
        .stdout(predicate::function(|out: &str| out.lines().count() == 1));
}

#[test]
fn config_file_changes_rules() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("cml.toml"),
        "[rules]\nallowed_types = [\"perf\"]\nmotivation_types = []\n",
    )
    .unwrap();

    cmd(&dir)
        .args(["check", "--no-color", "-m", "perf: cache lookups"])
        .assert()
        .success();

    cmd(&dir)
        .args(["check", "--no-color", "-m", "feat: cache lookups"])
        .assert()
        .code(1)
        .stdout(contains("unknown-type"));
}

#[test]
fn invalid_config_is_an_error() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("broken.toml");
    std::fs::write(&config, "[rules]\nmax_header_length = 0\n").unwrap();

    cmd(&dir)
        .arg("--config")
        .arg(&config)
        .args(["check", "-m", "feat: x"])
        .assert()
        .code(1)
        .stderr(contains("max_header_length"));
}

#[test]
fn rules_lists_table_in_order() {
    let dir = TempDir::new().unwrap();
    let output = cmd(&dir).arg("rules").assert().success().get_output().stdout.clone();
    let text = String::from_utf8(output).unwrap();

    let names: Vec<_> = text
        .lines()
        .filter_map(|line| line.split_whitespace().next())
        .collect();
    assert_eq!(names.first(), Some(&"type-present"));
    assert_eq!(names.last(), Some(&"body-or-footer-empty-commit"));
    assert_eq!(names.len(), 8);
}

#[test]
fn rules_marks_disabled_entries() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("cml.toml"),
        "[rules]\ndisabled = [\"subject-mood\"]\n",
    )
    .unwrap();

    let output = cmd(&dir)
        .args(["--format", "json", "rules"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let rules = json.as_array().unwrap();
    assert_eq!(rules.len(), 8);
    assert_eq!(rules[3]["name"], "subject-mood");
    assert_eq!(rules[3]["enabled"], false);
    assert!(rules
        .iter()
        .filter(|rule| rule["name"] != "subject-mood")
        .all(|rule| rule["enabled"] == true));
}

#[test]
fn template_prints_convention() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .arg("template")
        .assert()
        .success()
        .stdout(contains("# <type>(<scope>): <subject>"))
        .stdout(contains("#   chore"));
}

#[test]
fn init_writes_config_once() {
    let dir = TempDir::new().unwrap();
    cmd(&dir).arg("init").assert().success();
    assert!(dir.path().join("cml.toml").exists());

    cmd(&dir)
        .arg("init")
        .assert()
        .code(1)
        .stderr(contains("already exists"));

    cmd(&dir).args(["init", "--force"]).assert().success();
}
