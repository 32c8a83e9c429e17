//! End-to-end tests for the `mauka_wordfreq` binary.

use std::io::Write;
use std::process::{Command, Output, Stdio};

use tempfile::tempdir;

fn run(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_mauka_wordfreq"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn test_default_prints_frequencies() {
    let output = run(&["-t", "5"], "a f a");

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "2    a\n1    f\n");
}

#[test]
fn test_entire_table_goes_to_stderr() {
    let output = run(&["-e", "-t", "5"], "a f");

    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("  Pos  Freq  Stats  Word\n"));
    assert!(stderr.contains("    3     1     0   f\n"));
}

#[test]
fn test_stats_report() {
    let output = run(&["-p", "-d", "-s", "5", "-t", "5"], "a f k");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("\nDouble Hashing\n\n"));
    assert!(!stdout.contains("    a\n"));
}

#[test]
fn test_stats_as_json() {
    let output = run(&["-p", "--json", "-t", "2"], "x y");

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    // Two slots: levels below 50% hold no whole entry.
    assert_eq!(value[0]["percent_full"], 50);
}

#[test]
fn test_zero_snapshots_rejected() {
    let output = run(&["-p", "-s", "0"], "");
    assert!(!output.status.success());
}

#[test]
fn test_full_table_still_prints() {
    let output = run(&["-t", "1"], "one two one");

    assert!(output.status.success());
    // -t 1 rounds up to 2 slots: "one" and "two" both fit.
    assert_eq!(String::from_utf8(output.stdout).unwrap().lines().count(), 2);
}

#[test]
fn test_gen_config_then_validate() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("wordfreq.toml");
    let path_str = path.to_str().unwrap();

    let generated = run(&["gen-config", "--output", path_str], "");
    assert!(generated.status.success());
    assert!(path.exists());

    let validated = run(&["--config", path_str, "validate"], "");
    assert!(validated.status.success());
}

#[test]
fn test_table_size_beyond_last_prime_fails_cleanly() {
    let size = usize::MAX.to_string();
    let output = run(&["-t", &size], "");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(!stderr.contains("panicked"), "unexpected panic: {stderr}");
    assert!(stderr.contains("table.capacity"), "unexpected stderr: {stderr}");
    assert!(stderr.contains(&format!("table size {size}")), "unexpected stderr: {stderr}");
}
