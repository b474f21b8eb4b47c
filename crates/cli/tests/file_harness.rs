use assert_cmd::prelude::*;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::{contains, is_empty};
use std::fs;
use std::process::Command;
use tempfile::tempdir;

const HARNESSES: [&str; 2] = ["bplist-fuzzer", "jplist-fuzzer"];

#[test]
fn no_argument_prints_usage() -> Result<(), Box<dyn std::error::Error>> {
    for bin in HARNESSES {
        Command::cargo_bin(bin)?
            .assert()
            .code(1)
            .stderr(contains("Usage:").and(contains("<file>")));
    }
    Ok(())
}

#[test]
fn extra_arguments_print_usage_without_opening_files() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempdir()?;
    let first = tmp.path().join("missing-a");
    let second = tmp.path().join("missing-b");
    for bin in HARNESSES {
        Command::cargo_bin(bin)?
            .arg(&first)
            .arg(&second)
            .assert()
            .code(1)
            .stderr(contains("Usage:").and(contains("failed to open").not()));
    }
    Ok(())
}

#[test]
fn missing_file_exits_with_one() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempdir()?;
    let path = tmp.path().join("absent.bin");
    for bin in HARNESSES {
        Command::cargo_bin(bin)?
            .arg(&path)
            .assert()
            .code(1)
            .stderr(contains("failed to open"));
    }
    Ok(())
}

#[test]
fn empty_file_completes() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempdir()?;
    let path = tmp.path().join("empty");
    fs::write(&path, b"")?;
    for bin in HARNESSES {
        Command::cargo_bin(bin)?
            .arg(&path)
            .assert()
            .success()
            .stdout(is_empty());
    }
    Ok(())
}

#[test]
fn garbage_bytes_exit_cleanly() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempdir()?;
    let path = tmp.path().join("garbage");
    fs::write(&path, b"\xff\x00\x7f")?;
    for bin in HARNESSES {
        Command::cargo_bin(bin)?
            .arg(&path)
            .assert()
            .success()
            .stdout(is_empty());
    }
    Ok(())
}

#[test]
fn json_document_loads_at_debug_level() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempdir()?;
    let path = tmp.path().join("doc.json");
    let doc = serde_json::json!({ "items": [1, 2.5, "three", { "four": false }] });
    fs::write(&path, serde_json::to_vec(&doc)?)?;
    Command::cargo_bin("jplist-fuzzer")?
        .arg(&path)
        .env("PARSEFUZZ_LOG", "debug")
        .assert()
        .success()
        .stdout(is_empty())
        .stderr(contains("input loaded"));
    Ok(())
}

#[test]
fn help_exits_successfully() -> Result<(), Box<dyn std::error::Error>> {
    Command::cargo_bin("bplist-fuzzer")?
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("Usage"));
    Ok(())
}

#[test]
fn unreadable_config_is_a_usage_error() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempdir()?;
    let input = tmp.path().join("in");
    fs::write(&input, b"{}")?;
    Command::cargo_bin("jplist-fuzzer")?
        .arg(&input)
        .env("PARSEFUZZ_CONFIG", tmp.path().join("nope.toml"))
        .assert()
        .code(1)
        .stderr(contains("nope.toml"));
    Ok(())
}
