use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use std::process::Command;

fn write_source(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("program.zil");
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn missing_source_path_is_rejected_before_compiling() {
    let mut cmd = Command::cargo_bin("zillac").unwrap();
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn unrecognized_flag_is_rejected_before_compiling() {
    let tmp = tempfile::tempdir().unwrap();
    let path = write_source(tmp.path(), "programa declare x. leia(x). escreva(x). fimprog.");

    let mut cmd = Command::cargo_bin("zillac").unwrap();
    cmd.arg(path).arg("--bogus");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument"));
}

#[test]
fn lexical_error_is_reported_with_position() {
    let tmp = tempfile::tempdir().unwrap();
    let path = write_source(tmp.path(), "programa declare x.\nx @ 1. fimprog.");

    let mut cmd = Command::cargo_bin("zillac").unwrap();
    cmd.arg(path).current_dir(tmp.path());
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Lexical error"))
        .stderr(predicate::str::contains("line 2 column 3"));
}

#[test]
fn parsing_error_names_the_expectation() {
    let tmp = tempfile::tempdir().unwrap();
    let path = write_source(tmp.path(), "programa declare x fimprog.");

    let mut cmd = Command::cargo_bin("zillac").unwrap();
    cmd.arg(path).current_dir(tmp.path());
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Parsing error"))
        .stderr(predicate::str::contains("Expected Comma"));
}

#[test]
fn semantic_error_stops_before_code_generation() {
    let tmp = tempfile::tempdir().unwrap();
    let path = write_source(tmp.path(), "programa declare x. escreva(x). fimprog.");

    let mut cmd = Command::cargo_bin("zillac").unwrap();
    cmd.arg(path).current_dir(tmp.path());
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unassigned identifier"));

    assert!(!tmp.path().join("output.c").exists());
    assert!(!tmp.path().join("output.lua").exists());
}

#[test]
fn unused_identifier_is_reported() {
    let tmp = tempfile::tempdir().unwrap();
    let path = write_source(tmp.path(), "programa declare x. fimprog.");

    let mut cmd = Command::cargo_bin("zillac").unwrap();
    cmd.arg(path).current_dir(tmp.path());
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unused variable: x"));
}

#[test]
fn token_listing_is_written_before_parsing() {
    let tmp = tempfile::tempdir().unwrap();
    // Lexes fine, fails to parse: the listing must still be produced.
    let path = write_source(tmp.path(), "programa declare x. leia(x fimprog.");

    let mut cmd = Command::cargo_bin("zillac").unwrap();
    cmd.arg(path).arg("--tokens").current_dir(tmp.path());
    cmd.assert().failure();

    let listing = std::fs::read_to_string(tmp.path().join("tokens.txt")).unwrap();
    assert!(listing.starts_with("'programa'(Start program): line 1 column 1\n"));
    assert!(listing.contains("'leia'(Read input):"));
}

#[test]
fn missing_file_is_an_io_error() {
    let tmp = tempfile::tempdir().unwrap();

    let mut cmd = Command::cargo_bin("zillac").unwrap();
    cmd.arg(tmp.path().join("nowhere.zil"));
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("IO error"));
}
