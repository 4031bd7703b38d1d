use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn svn() -> Command {
    let mut cmd = Command::cargo_bin("svn").unwrap();
    cmd.env_remove("SVN_LOG");
    cmd
}

#[test]
fn test_no_arguments_prints_usage_and_fails() {
    svn()
        .assert()
        .failure()
        .stdout(predicate::str::starts_with("usage: svn <subcommand> [options] [args]"))
        .stdout(predicate::str::contains("   commit (ci)\n"));
}

#[test]
fn test_unknown_subcommand() {
    svn()
        .arg("frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown command: frobnicate"))
        .stdout(predicate::str::contains("Available subcommands:"));
}

#[test]
fn test_help_for_subcommand() {
    svn()
        .args(["help", "rm"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("delete (del, remove, rm): "))
        .stdout(predicate::str::contains("  --force:  force operation to run\n"));
}

#[test]
fn test_question_mark_alias_and_switch() {
    svn()
        .arg("?")
        .assert()
        .success()
        .stdout(predicate::str::contains("Available subcommands:"));
    svn()
        .args(["-?", "log"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("log: "));
}

#[test]
fn test_version_switch() {
    svn()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(format!(
            "svn, version {}",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn test_resolved_request_is_printed() {
    let output = svn()
        .args(["co", "-r", "5:head", "http://host/repos", "-d", "wc", "-q"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let request: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(request["command"], "checkout");
    assert_eq!(request["targets"][0], "http://host/repos");
    assert_eq!(request["options"]["start_revision"]["number"], 5);
    assert_eq!(request["options"]["end_revision"], "head");
    assert_eq!(request["options"]["target"], "wc");
    assert_eq!(request["options"]["quiet"], true);
}

#[test]
fn test_default_revision_range() {
    let output = svn().arg("log").output().unwrap();
    let request: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(request["options"]["start_revision"], "head");
    assert_eq!(request["options"]["end_revision"]["number"], 1);
}

#[test]
fn test_bad_revision_range() {
    svn()
        .args(["log", "-r", "5:6:7"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "Syntax error in revision argument \"5:6:7\"",
        ));
}

#[test]
fn test_bad_date_range() {
    svn()
        .args(["update", "-D", "a:b:c"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unable to parse \"a:b:c\""));
}

#[test]
fn test_unreadable_filedata() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("no-such-message");
    svn()
        .args(["commit", "-F"])
        .arg(&missing)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no-such-message"));
}

#[test]
fn test_versioned_log_message_file_needs_force() {
    let wc = TempDir::new().unwrap();
    fs::create_dir(wc.path().join(".svn")).unwrap();
    fs::write(
        wc.path().join(".svn").join("entries"),
        "<wc-entries xmlns=\"svn:\">\n<entry name=\"msg.txt\" kind=\"file\"/>\n</wc-entries>\n",
    )
    .unwrap();
    let msg = wc.path().join("msg.txt");
    fs::write(&msg, "fix the frobnicator").unwrap();

    svn()
        .args(["commit", "-F"])
        .arg(&msg)
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Log message file is a versioned file",
        ));

    let output = svn()
        .args(["commit", "--force", "-F"])
        .arg(&msg)
        .output()
        .unwrap();
    assert!(output.status.success());
    let request: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(request["options"]["filedata"], "fix the frobnicator");
}

#[test]
fn test_unversioned_log_message_file_is_accepted() {
    let temp_dir = TempDir::new().unwrap();
    let msg = temp_dir.path().join("msg.txt");
    fs::write(&msg, "message").unwrap();
    svn().args(["ci", "-F"]).arg(&msg).assert().success();
}

#[test]
fn test_invalid_locale_is_not_fatal() {
    svn()
        .args(["status", "--locale", "qq_NOWHERE.bogus"])
        .assert()
        .success()
        .stderr(predicate::str::contains("can not be set"));
}
