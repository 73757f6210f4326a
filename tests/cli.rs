//! Command-line tests for the `toyc-lex` binary.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn cmd() -> Command {
    Command::cargo_bin("toyc-lex").unwrap()
}

#[test]
fn test_writes_lex_file_next_to_input() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("prog.txt");
    fs::write(&input, "int x;\nif (x >= 1) return 1;\n").unwrap();

    cmd()
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Analysis completed successfully!"))
        .stdout(predicate::str::contains("Generated file:"));

    let output = fs::read_to_string(dir.path().join("prog.lex")).unwrap();
    assert_eq!(
        output,
        "INTDEF IDENTIFIER PVIRGULA IF LPAREN IDENTIFIER GE INT_LITERAL RPAREN RETURN INT_LITERAL PVIRGULA"
    );
}

#[test]
fn test_explicit_output_path() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("prog.txt");
    let output = dir.path().join("tokens.out");
    fs::write(&input, "bool b = 1;").unwrap();

    cmd()
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "BOOLDEF IDENTIFIER ASSIGN BOOL_LITERAL PVIRGULA"
    );
    assert!(!dir.path().join("prog.lex").exists());
}

#[test]
fn test_lexical_error_exits_with_failure() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("bad.txt");
    fs::write(&input, "int x;\nx = a & b;\n").unwrap();

    cmd()
        .arg(&input)
        .arg("--no-color")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: ExpectedAmpersand"))
        .stderr(predicate::str::contains("2 | x = a & b;"));

    let output = fs::read_to_string(dir.path().join("bad.lex")).unwrap();
    assert_eq!(output, "INTDEF IDENTIFIER PVIRGULA IDENTIFIER ASSIGN IDENTIFIER");
}

#[test]
fn test_missing_input_file() {
    let dir = tempdir().unwrap();

    cmd()
        .arg(dir.path().join("missing.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn test_requires_input_argument() {
    cmd().assert().failure();
}
