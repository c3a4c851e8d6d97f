// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::io::Write;
use std::process::{Command, Output};
use tempfile::NamedTempFile;

fn run_demo(args: &[&str]) -> Output {
    let mut config = NamedTempFile::new().unwrap();
    config
        .write_all(b"logging:\n  level: info\n  ansi: false\n")
        .unwrap();

    Command::new(env!("CARGO_BIN_EXE_the-decorators"))
        .arg("--config")
        .arg(config.path())
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn test_stdout_carries_only_the_value() {
    let output = run_demo(&[]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "10816\n");
}

#[test]
fn test_log_records_go_to_stderr_in_order() {
    let output = run_demo(&[]);
    let stderr = String::from_utf8(output.stderr).unwrap();

    let calling = stderr.find("Calling pow_2").unwrap();
    let timed = stderr.find("Execution of pow_2 took ").unwrap();
    let succeeded = stderr.find("Successfully called pow_2").unwrap();
    assert!(calling < timed && timed < succeeded);
    assert!(stderr.contains("channel=\"my_app\""));
}

#[test]
fn test_float_input() {
    let output = run_demo(&["1.5"]);
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "2.25\n");
}

#[test]
fn test_overflow_fails_without_output() {
    let output = run_demo(&["9223372036854775807"]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Calling pow_2"));
    assert!(!stderr.contains("Successfully called pow_2"));
    assert!(stderr.contains("does not fit in a 64-bit integer"));
}
