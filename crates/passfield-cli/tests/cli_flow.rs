use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_passfield"))
}

/// Command isolated from the user's config, color and log settings.
fn passfield(config_home: &Path) -> Command {
    let mut cmd = Command::new(bin());
    cmd.env("XDG_CONFIG_HOME", config_home)
        .env("HOME", config_home)
        .env("NO_COLOR", "1")
        .env_remove("PASSFIELD_CONFIG")
        .env_remove("RUST_LOG")
        .env_remove("COLUMNS");
    cmd
}

fn run_with_stdin(mut cmd: Command, input: &str) -> Output {
    let mut child = cmd
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn passfield");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(input.as_bytes())
        .expect("write stdin");
    child.wait_with_output().expect("wait passfield")
}

fn run(cmd: Command) -> Output {
    run_with_stdin(cmd, "")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn check_valid_password_exits_zero() {
    let home = tempfile::tempdir().unwrap();
    let mut cmd = passfield(home.path());
    cmd.args(["check", "Password1!"]);
    let output = run(cmd);

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "status=Enabled state\ntone=normal\nphase=valid\n"
    );
}

#[test]
fn check_invalid_password_lists_failed_rules_and_is_rejected() {
    let home = tempfile::tempdir().unwrap();
    let mut cmd = passfield(home.path());
    cmd.args(["check", "password"]);
    let output = run(cmd);

    assert_eq!(output.status.code(), Some(3));
    assert_eq!(
        stdout(&output),
        "status=Error state\ntone=error\nphase=invalid\n\
         hint=One uppercase letter\nhint=One number\nhint=One special character\n"
    );
}

#[test]
fn check_short_password_shows_length_hint_only() {
    let home = tempfile::tempdir().unwrap();
    let mut cmd = passfield(home.path());
    cmd.args(["check", "P1!"]);
    let output = run(cmd);

    assert_eq!(output.status.code(), Some(3));
    let out = stdout(&output);
    assert!(out.contains("hint=At least 8 characters"));
    assert_eq!(out.matches("hint=").count(), 1);
}

#[test]
fn check_empty_password_is_clean() {
    let home = tempfile::tempdir().unwrap();
    let mut cmd = passfield(home.path());
    cmd.args(["check", ""]);
    let output = run(cmd);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "status=Enabled state\ntone=normal\nphase=clean\n"
    );
}

#[test]
fn check_counts_emoji_once_each() {
    let home = tempfile::tempdir().unwrap();
    let mut cmd = passfield(home.path());
    cmd.args(["check", "--json", &"A1\u{1F600}".repeat(2)]);
    let output = run(cmd);
    // Six chars even though the text is well over eight bytes
    assert_eq!(output.status.code(), Some(3));
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["validation"]["length_valid"], false);
    assert_eq!(json["validation"]["has_special_char"], true);
}

#[test]
fn check_reads_stdin_and_keeps_inner_spaces() {
    let home = tempfile::tempdir().unwrap();
    let mut cmd = passfield(home.path());
    cmd.args(["check", "--stdin"]);
    let output = run_with_stdin(cmd, "Pass word1\n");

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("phase=valid"));
}

#[test]
fn check_json_omits_password() {
    let home = tempfile::tempdir().unwrap();
    let mut cmd = passfield(home.path());
    cmd.args(["check", "--json", "Password1"]);
    let output = run(cmd);

    assert_eq!(output.status.code(), Some(3));
    let out = stdout(&output);
    assert!(!out.contains("Password1"));
    let json: serde_json::Value = serde_json::from_str(&out).expect("json output");
    assert_eq!(json["status"], "Error state");
    assert_eq!(json["validation"]["length_valid"], true);
    assert_eq!(json["validation"]["has_special_char"], false);
    assert_eq!(json["hints"], serde_json::json!(["One special character"]));
}

#[test]
fn check_quiet_prints_nothing_but_keeps_exit_code() {
    let home = tempfile::tempdir().unwrap();
    let mut cmd = passfield(home.path());
    cmd.args(["--quiet", "check", "abc"]);
    let output = run(cmd);

    assert_eq!(output.status.code(), Some(3));
    assert!(stdout(&output).is_empty());
}

#[test]
fn check_argument_and_stdin_conflict() {
    let home = tempfile::tempdir().unwrap();
    let mut cmd = passfield(home.path());
    cmd.args(["check", "--stdin", "Password1!"]);
    let output = run(cmd);

    assert_eq!(output.status.code(), Some(4));
    assert!(stderr(&output).contains("not both"));
}

#[test]
fn check_without_source_or_tty_fails() {
    let home = tempfile::tempdir().unwrap();
    let mut cmd = passfield(home.path());
    cmd.arg("check");
    let output = run(cmd);

    assert_eq!(output.status.code(), Some(4));
    assert!(stderr(&output).contains("hint=Hint: Pass it as an argument"));
}

#[test]
fn live_lines_type_then_delete_returns_to_clean() {
    let home = tempfile::tempdir().unwrap();
    let mut cmd = passfield(home.path());
    cmd.arg("live");
    let output = run_with_stdin(cmd, "a\n\n");

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    let frames: Vec<&str> = out.split("---\n").collect();
    assert_eq!(frames.len(), 3);
    assert!(frames[0].contains("phase=clean"));
    assert!(frames[1].contains("status=Error state"));
    assert!(frames[2].contains("status=Enabled state"));
    assert!(!frames[2].contains("hint="));
}

#[test]
fn live_json_emits_one_document_per_change() {
    let home = tempfile::tempdir().unwrap();
    let mut cmd = passfield(home.path());
    cmd.args(["live", "--json"]);
    let output = run_with_stdin(cmd, "password\nPassword1\nPassword1!\n");

    assert_eq!(output.status.code(), Some(0));
    let phases: Vec<String> = stdout(&output)
        .lines()
        .map(|line| {
            let json: serde_json::Value = serde_json::from_str(line).expect("json line");
            json["phase"].as_str().unwrap().to_string()
        })
        .collect();
    assert_eq!(phases, vec!["clean", "invalid", "invalid", "valid"]);
}

#[test]
fn rules_lists_catalogue_in_order() {
    let home = tempfile::tempdir().unwrap();
    let mut cmd = passfield(home.path());
    cmd.arg("rules");
    let output = run(cmd);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "length At least 8 characters\n\
         uppercase One uppercase letter\n\
         number One number\n\
         special One special character\n"
    );
}

#[test]
fn rules_single_rule_json() {
    let home = tempfile::tempdir().unwrap();
    let mut cmd = passfield(home.path());
    cmd.args(["rules", "number", "--json"]);
    let output = run(cmd);

    assert_eq!(output.status.code(), Some(0));
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json, serde_json::json!([{ "id": "number", "hint": "One number" }]));
}

#[test]
fn rules_unknown_rule_is_invalid_input() {
    let home = tempfile::tempdir().unwrap();
    let mut cmd = passfield(home.path());
    cmd.args(["rules", "entropy"]);
    let output = run(cmd);

    assert_eq!(output.status.code(), Some(4));
    let err = stderr(&output);
    assert!(err.contains("Unknown rule: entropy"));
    assert!(err.contains("passfield rules"));
}

#[test]
fn config_file_selects_pretty_ascii_output() {
    let home = tempfile::tempdir().unwrap();
    let config_dir = home.path().join("passfield");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.toml"),
        "[ui]\nascii = true\nformat = \"pretty\"\n",
    )
    .unwrap();

    let mut cmd = passfield(home.path());
    cmd.args(["check", "abc"]);
    let output = run(cmd);

    assert_eq!(output.status.code(), Some(3), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "Text input");
    assert_eq!(lines[1], "[ERR] Error state");
    assert_eq!(lines[2], "Input  Optional");
    assert!(lines[3].starts_with("+-"));
    assert!(lines[4].starts_with("| ***"));
    assert_eq!(
        &lines[6..],
        [
            "* At least 8 characters",
            "* One uppercase letter",
            "* One number",
            "* One special character"
        ]
    );
}

#[test]
fn format_flag_overrides_config() {
    let home = tempfile::tempdir().unwrap();
    let path = home.path().join("custom.toml");
    std::fs::write(&path, "[ui]\nformat = \"pretty\"\n").unwrap();

    let mut cmd = passfield(home.path());
    cmd.args(["--config", path.to_str().unwrap(), "check", "--format", "plain", "abc"]);
    let output = run(cmd);

    assert!(stdout(&output).starts_with("status=Error state\n"));
}

#[test]
fn missing_explicit_config_fails() {
    let home = tempfile::tempdir().unwrap();
    let mut cmd = passfield(home.path());
    cmd.env("PASSFIELD_CONFIG", home.path().join("nope.toml"))
        .args(["check", "Password1!"]);
    let output = run(cmd);

    assert_eq!(output.status.code(), Some(5));
    assert!(stderr(&output).contains("Config not found"));
}

#[test]
fn completions_generate_script() {
    let home = tempfile::tempdir().unwrap();
    let mut cmd = passfield(home.path());
    cmd.args(["completions", "bash"]);
    let output = run(cmd);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("passfield"));
}
