//! CLI output tests
//!
//! Runs the `ccon` binary with stdout captured, so every command sees a
//! non-interactive terminal and answers with its defaults.

use std::process::Command;

use predicates::prelude::*;

/// Run ccon and capture output
fn run_ccon(args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_ccon"))
        .args(args)
        .env_remove("CC_PROGRESS_MODE")
        .output()
        .expect("Failed to execute ccon");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

fn ccon() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::cargo_bin("ccon").expect("ccon binary is built");
    cmd.env_remove("CC_PROGRESS_MODE");
    cmd
}

const ACK_WARNING: &str =
    "\n > Acknowledgment asked in non interactive mode, return default value\n";
const CHOICE_WARNING: &str = "\n > Choice asked in non interactive mode, return default value\n";

// ============================================================================
// Prompts
// ============================================================================

#[test]
fn confirm_returns_default_yes() {
    let (stdout, stderr, code) = run_ccon(&["confirm", "Proceed?"]);
    assert_eq!(code, 0, "stderr: {}", stderr);
    assert_eq!(stdout, format!("Proceed? [Y/n] {}true\n", ACK_WARNING));
}

#[test]
fn confirm_default_no() {
    let (stdout, _, code) = run_ccon(&["confirm", "Proceed?", "--default-no"]);
    assert_eq!(code, 0);
    assert_eq!(stdout, format!("Proceed? [y/N] {}false\n", ACK_WARNING));
}

#[test]
fn confirm_json() {
    ccon()
        .args(["confirm", "Proceed?", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with("{\"answer\":true}\n"));
}

#[test]
fn confirm_never_reads_stdin() {
    ccon()
        .args(["confirm", "Proceed?", "--default-no"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::ends_with("false\n"));
}

#[test]
fn choose_lists_options_and_returns_default() {
    let (stdout, _, code) = run_ccon(&["choose", "Pick one", "a", "b", "c", "-d", "1"]);
    assert_eq!(code, 0);
    let expected = format!(
        "Pick one\n 0 - a\n 1 - b\n 2 - c\nEnter your selection then ENTER [1] {}1\tb\n",
        CHOICE_WARNING
    );
    assert_eq!(stdout, expected);
}

#[test]
fn choose_json() {
    let (stdout, _, _) = run_ccon(&["choose", "Pick one", "a", "b", "-d", "1", "--json"]);
    let last = stdout.lines().last().unwrap_or_default();
    insta::assert_snapshot!(last, @r#"{"index":1,"value":"b"}"#);
}

#[test]
fn choose_rejects_out_of_range_default() {
    ccon()
        .args(["choose", "Pick one", "a", "b", "-d", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn pick_returns_every_default() {
    let (stdout, _, code) = run_ccon(&["pick", "Pick some", "a", "b", "c", "-d", "2", "-d", "0"]);
    assert_eq!(code, 0);
    assert!(stdout.starts_with("Pick some\n"));
    assert!(stdout.contains(CHOICE_WARNING));
    assert!(stdout.ends_with("2\tc\n0\ta\n"));
}

#[test]
fn pick_json() {
    let (stdout, _, _) = run_ccon(&["pick", "Pick some", "a", "b", "c", "--json"]);
    let last = stdout.lines().last().unwrap_or_default();
    insta::assert_snapshot!(last, @r#"{"indices":[0],"values":["a"]}"#);
}

#[test]
fn prompt_output_has_no_escape_sequences() {
    let (stdout, _, _) = run_ccon(&["pick", "Pick some", "a", "b"]);
    assert!(!stdout.contains('\x1b'));
}

// ============================================================================
// Progress
// ============================================================================

#[test]
fn progress_is_silent_without_flag() {
    ccon()
        .args(["progress", "--max", "3", "--delay-ms", "0"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn progress_prints_labels_on_request() {
    let (stdout, _, code) = run_ccon(&[
        "progress",
        "--max",
        "2",
        "--delay-ms",
        "0",
        "--show-non-interactive",
    ]);
    assert_eq!(code, 0);
    assert_eq!(
        stdout,
        "[Progress:   0/2]\n[Progress:   1/2]\n[Progress:   2/2]\n"
    );
}

#[test]
fn progress_accepts_style() {
    ccon()
        .args(["progress", "--max", "1", "--delay-ms", "0", "--style", "pacman"])
        .assert()
        .success();
}

#[test]
fn progress_rejects_unknown_style() {
    ccon()
        .args(["progress", "--style", "snake"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

// ============================================================================
// Misc
// ============================================================================

#[test]
fn help_lists_commands() {
    let (stdout, _, code) = run_ccon(&["--help"]);
    assert_eq!(code, 0);
    for command in ["demo", "confirm", "choose", "pick", "progress", "completions"] {
        assert!(stdout.contains(command), "missing {} in help", command);
    }
}

#[test]
fn completions_bash() {
    ccon()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ccon"));
}

#[test]
fn demo_runs_without_a_terminal() {
    let (stdout, stderr, code) = run_ccon(&["demo"]);
    assert_eq!(code, 0, "stderr: {}", stderr);
    assert!(stdout.contains("Success message\n"));
    assert!(stdout.contains("(4, None)\n"));
    assert!(stdout.contains("[0, 2] [\"1\", \"3\"]\n"));
    assert!(stdout.contains("[Progress:  40/40]\n"));
    assert!(!stdout.contains('\x1b'));
}
