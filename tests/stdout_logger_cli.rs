//! End-to-end tests for the `stdout-logger` binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn stdout_logger() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_stdout-logger"));
    command.env_remove("LINELOG_THRESHOLD_LEVEL");
    command
}

fn output_lines(command: &mut Command) -> Vec<String> {
    let output = command.output().expect("run stdout-logger");
    assert!(output.status.success(), "stdout-logger should succeed");
    String::from_utf8(output.stdout)
        .expect("stdout is UTF-8")
        .lines()
        .map(str::to_owned)
        .collect()
}

#[test]
fn default_threshold_prints_every_level() {
    let lines = output_lines(&mut stdout_logger());
    assert_eq!(lines.len(), 7);
    assert!(lines[0].ends_with("INFO The threshold log level has been set to 50."));
    assert!(lines.iter().any(|line| line.ends_with("DEBUG This is an example debug log.")));
}

#[test]
fn environment_threshold_filters_lines() {
    let lines = output_lines(stdout_logger().env("LINELOG_THRESHOLD_LEVEL", "10"));
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("ERROR This is an example error log."));
    assert!(lines[1].ends_with("CRITICAL This is an example critical log."));
}

#[test]
fn out_of_range_environment_threshold_means_debug() {
    let lines = output_lines(stdout_logger().env("LINELOG_THRESHOLD_LEVEL", "900"));
    assert_eq!(lines.len(), 7);
}

#[test]
fn flag_overrides_environment() {
    let lines = output_lines(
        stdout_logger()
            .env("LINELOG_THRESHOLD_LEVEL", "debug")
            .args(["--threshold", "normal"]),
    );
    assert_eq!(lines.len(), 3);
    assert!(lines.iter().all(|line| !line.contains(" INFO ")));
    assert!(lines[2].ends_with("NORMAL This is an example normal log."));
}

#[test]
fn lines_start_with_timestamp() {
    stdout_logger()
        .args(["--threshold", "critical"])
        .assert()
        .success()
        .stdout(
            predicate::str::is_match(
                r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2} CRITICAL This is an example critical log\.\n$",
            )
            .expect("valid pattern"),
        );
}

#[test]
fn unknown_threshold_is_rejected() {
    stdout_logger()
        .args(["--threshold", "shouty"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("unknown level"));
}

#[test]
fn help_lists_threshold_flag() {
    stdout_logger()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--threshold"));
}
