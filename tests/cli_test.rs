// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tests for the `codesearch` command-line driver.

use std::process::{Command, Output};

fn codesearch(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_codesearch"))
        .args(args)
        .output()
        .expect("failed to run codesearch")
}

#[test]
fn test_plain_output() {
    let output = codesearch(&["-n", "3", "-q", "2", "-d", "2"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Size: 4"), "{}", stdout);
    assert!(stdout.contains("Code: [000, 011, 101, 110]"), "{}", stdout);
}

#[test]
fn test_json_output() {
    let output = codesearch(&[
        "--length", "3", "--alphabet", "2", "--distance", "3", "--metric", "hamming", "--json",
    ]);
    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["size"], 2);
    assert_eq!(report["metric"], "hamming");
    assert_eq!(report["code"], serde_json::json!(["000", "111"]));
    assert_eq!(report["exhausted"], true);
    assert!(report["statistics"]["nodes"].as_u64().unwrap() > 0);
}

#[test]
fn test_modes_agree() {
    let base = ["-n", "4", "-q", "2", "-d", "2", "--json"];
    let code_of = |extra: &[&str]| {
        let mut args = base.to_vec();
        args.extend_from_slice(extra);
        let output = codesearch(&args);
        assert!(output.status.success(), "{:?}", extra);
        let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        report["code"].clone()
    };
    let sequential = code_of(&[]);
    assert_eq!(code_of(&["--parallel"]), sequential);
    assert_eq!(code_of(&["--brute-force"]), sequential);
}

#[test]
fn test_target_with_custom_thresholds() {
    let output = codesearch(&[
        "-n", "5", "-q", "2", "-d", "2", "--target", "6", "--thresholds", "3,5,7", "--json",
    ]);
    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["size"], 6);
    assert_eq!(report["target"], 6);
    assert_eq!(report["exhausted"], false);
}

#[test]
fn test_invalid_parameter_exits_with_error() {
    let output = codesearch(&["-n", "3", "-q", "2", "--distance=-1"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid parameter d"), "{}", stderr);
}

#[test]
fn test_brute_force_refuses_large_universe() {
    let output = codesearch(&["-n", "3", "-q", "3", "-d", "2", "--brute-force"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("exceeds limit of 20"), "{}", stderr);
}
