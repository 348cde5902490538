//! Black-box tests for the `ingestion-core` binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("ingestion-core").unwrap()
}

#[test]
fn converts_single_markdown_file_to_json() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("note.md");
    std::fs::write(&input, "# Heading\n\nA short paragraph of body text.\n").unwrap();

    cmd()
        .arg(&input)
        .arg("--output-dir")
        .arg(dir.path())
        .assert()
        .success();

    let output = dir.path().join("note.json");
    assert!(output.exists());
    let json = std::fs::read_to_string(&output).unwrap();
    assert!(json.contains("\"chunks\""));
    assert!(json.contains("\"checksum\""));
}

#[test]
fn batch_mode_processes_a_directory() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("one.md"), "# One\n\nFirst document body.\n").unwrap();
    std::fs::write(dir.path().join("two.md"), "# Two\n\nSecond document body.\n").unwrap();

    let out_dir = tempfile::tempdir().unwrap();

    cmd()
        .arg(dir.path())
        .arg("--output-dir")
        .arg(out_dir.path())
        .assert()
        .success();

    assert!(out_dir.path().join("one.json").exists());
    assert!(out_dir.path().join("two.json").exists());
}

#[test]
fn missing_input_path_is_an_error() {
    cmd()
        .arg("/no/such/input.md")
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn rejects_chunk_size_of_zero() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("note.md");
    std::fs::write(&input, "# Heading\n\nBody.\n").unwrap();

    cmd()
        .arg(&input)
        .arg("--chunk-size")
        .arg("0")
        .assert()
        .failure();
}
