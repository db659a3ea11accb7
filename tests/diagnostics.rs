//! Integration tests for diagnostic routing and decode-error recovery.

use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn tracetab() -> Command {
    let mut cmd = Command::cargo_bin("tracetab").unwrap();
    cmd.env("XDG_CONFIG_HOME", "/tmp/tracetab-test-no-config");
    cmd
}

#[test]
fn err_event_goes_to_stderr_not_stdout() {
    tracetab()
        .arg("--color=never")
        .write_stdin(r#"{"type":"err","node":"n1","message":"boom"}"#)
        .assert()
        .success()
        .stderr(predicate::str::contains("err: node n1: boom"))
        .stdout(predicate::str::contains("boom").not());
}

#[test]
fn all_diagnostic_kinds_are_routed() {
    let input = r#"{"type":"err","node":"n1","message":"e"}
{"type":"warn","node":"n1","message":"w"}
{"type":"debug","node":"n1","message":"d"}
{"type":"info","node":"n1","message":"i"}"#;
    tracetab()
        .arg("--color=never")
        .write_stdin(input)
        .assert()
        .success()
        .stderr(predicate::str::contains("err: node n1: e"))
        .stderr(predicate::str::contains("warn: node n1: w"))
        .stderr(predicate::str::contains("debug: node n1: d"))
        .stderr(predicate::str::contains("info: node n1: i"));
}

#[test]
fn unrecognized_kind_is_silently_dropped() {
    let input = r#"{"type":"mystery","node":"n1","message":"nope"}"#;
    let output = tracetab()
        .arg("--color=never")
        .write_stdin(input)
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    // Header only, no row, no diagnostic.
    assert_eq!(stdout.lines().count(), 1);
    assert!(stderr.is_empty(), "unexpected stderr: {stderr}");
}

#[test]
fn malformed_line_reports_and_stream_continues() {
    let input = r#"{"type":"normal","node":"before"}
{not json at all
{"type":"normal","node":"after"}"#;
    tracetab()
        .arg("--color=never")
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("before"))
        .stdout(predicate::str::contains("after"))
        .stderr(predicate::str::contains("cannot decode event"))
        .stderr(predicate::str::contains("{not json at all"));
}

#[test]
fn mixed_stream_splits_rows_and_diagnostics() {
    let input = r#"{"type":"normal","node":"n1","pid":1,"comm":"a"}
{"type":"warn","node":"n1","message":"slow"}
{"type":"normal","node":"n1","pid":2,"comm":"b"}"#;
    let output = tracetab()
        .arg("--color=never")
        .write_stdin(input)
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    // Header plus two data rows on stdout, one diagnostic on stderr.
    assert_eq!(stdout.lines().count(), 3);
    assert_eq!(stderr.trim_end(), "warn: node n1: slow");
}

#[test]
fn color_always_styles_the_kind_token() {
    tracetab()
        .arg("--color=always")
        .write_stdin(r#"{"type":"err","node":"n1","message":"boom"}"#)
        .assert()
        .success()
        .stderr(predicate::str::contains("\x1b["))
        .stderr(predicate::str::contains(": node n1: boom"));
}

#[test]
fn color_never_emits_plain_diagnostics() {
    tracetab()
        .arg("--color=never")
        .write_stdin(r#"{"type":"err","node":"n1","message":"boom"}"#)
        .assert()
        .success()
        .stderr(predicate::str::contains("\x1b[").not());
}

#[test]
fn data_rows_are_never_colored() {
    tracetab()
        .arg("--color=always")
        .write_stdin(r#"{"type":"normal","node":"n1"}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[").not());
}
