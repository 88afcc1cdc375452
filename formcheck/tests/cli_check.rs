//! CLI tests for `formcheck check`, `rules`, and `bonus`.
//!
//! Spawns the formcheck binary and verifies stdout and exit codes for
//! accepted, rejected, and misconfigured forms.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use formcheck::exit_codes;
use formcheck::io::init::{InitOptions, init_samples};

fn formcheck(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_formcheck"))
        .current_dir(dir)
        .args(args)
        .output()
        .expect("run formcheck")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

#[test]
fn check_accepts_valid_form() {
    let temp = tempfile::tempdir().expect("tempdir");
    init_samples(temp.path(), &InitOptions { force: false }).expect("init");

    let output = formcheck(
        temp.path(),
        &[
            "check",
            "--set",
            "userName=bob",
            "--set",
            "password=abcdef",
            "--set",
            "phoneNumber=13800000000",
        ],
    );

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(stdout(&output), "ok");
}

#[test]
fn check_rejects_with_first_failing_message() {
    let temp = tempfile::tempdir().expect("tempdir");
    init_samples(temp.path(), &InitOptions { force: false }).expect("init");

    let output = formcheck(temp.path(), &["check", "--set", "password=abc"]);

    assert_eq!(output.status.code(), Some(exit_codes::REJECTED));
    assert_eq!(stdout(&output), "user name must not be empty");
}

#[test]
fn check_unknown_rule_exits_invalid() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::write(
        temp.path().join("formcheck.toml"),
        "[[checks]]\nfield = \"email\"\nrule = \"isEmail\"\nmessage = \"bad email\"\n",
    )
    .expect("write config");

    let output = formcheck(temp.path(), &["check", "--set", "email=a@b"]);

    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    assert!(String::from_utf8_lossy(&output.stderr).contains("unknown rule 'isEmail'"));
}

#[test]
fn check_missing_config_exits_invalid() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = formcheck(temp.path(), &["check"]);
    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
}

#[test]
fn rules_lists_builtins_and_patterns() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::write(
        temp.path().join("formcheck.toml"),
        "[patterns]\nisZipCode = \"^[0-9]{6}$\"\n",
    )
    .expect("write config");

    let output = formcheck(temp.path(), &["rules"]);

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(
        stdout(&output).lines().collect::<Vec<_>>(),
        vec!["isMobile", "isNonEmpty", "isZipCode", "minLength"]
    );
}

#[test]
fn bonus_prints_multiplied_salary() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = formcheck(temp.path(), &["bonus", "S", "3000"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(stdout(&output), "12000");
}
