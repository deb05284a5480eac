//! Integration tests for the ribx binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn ribx() -> Command {
    Command::cargo_bin("ribx").unwrap()
}

#[test]
fn test_help_describes_the_tool() {
    ribx()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("IBAN"));
}

#[test]
fn test_empty_directory_is_an_error() {
    let dir = tempfile::tempdir().unwrap();

    ribx()
        .arg("--input")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("no PDF files found"));
}

#[test]
fn test_unknown_format_is_rejected() {
    ribx()
        .arg("parquet")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_format_argument_is_case_insensitive() {
    // Bad input dir, but argument parsing happens first: an accepted
    // format fails later with the directory error, not a usage error.
    let dir = tempfile::tempdir().unwrap();

    ribx()
        .arg("JSON")
        .arg("--input")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("no PDF files found"));
}

#[test]
fn test_unreadable_document_yields_null_record() {
    // A file with a .pdf extension that no tier can process must not
    // abort the batch; it gets an empty IBAN column.
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("broken.pdf"), b"this is not a pdf").unwrap();
    let out = dir.path().join("result.csv");

    ribx()
        .arg("csv")
        .arg("--input")
        .arg(dir.path())
        .arg("--output")
        .arg(&out)
        .assert()
        .success();

    let content = std::fs::read_to_string(&out).unwrap();
    let mut lines = content.lines();
    assert_eq!(lines.next(), Some("FILE_NAME,IBAN"));
    assert_eq!(lines.next(), Some("broken.pdf,"));
}

#[test]
fn test_json_output_for_unreadable_document() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("broken.pdf"), b"this is not a pdf").unwrap();
    let out = dir.path().join("result.json");

    ribx()
        .arg("json")
        .arg("--input")
        .arg(dir.path())
        .arg("--output")
        .arg(&out)
        .assert()
        .success();

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(value["0"]["FILE_NAME"], "broken.pdf");
    assert_eq!(value["0"]["IBAN"], serde_json::Value::Null);
}

#[test]
fn test_unwritable_output_aborts_with_context() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("broken.pdf"), b"this is not a pdf").unwrap();

    ribx()
        .arg("--input")
        .arg(dir.path())
        .arg("--output")
        .arg(dir.path().join("missing").join("out.csv"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to write output"));
}
