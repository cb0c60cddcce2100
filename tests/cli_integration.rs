use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn csvstore() -> Command {
    Command::cargo_bin("csvstore").unwrap()
}

#[test]
fn add_remove_and_export() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("people.csv");
    let output = dir.path().join("out.csv");
    fs::write(&input, "name,age\nAlice,30\nBob,25\n").unwrap();

    csvstore()
        .arg("-i")
        .arg(&input)
        .args(["-a", "Carol,40", "-r", "0", "-o"])
        .arg(&output)
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "name,age\nBob,25\nCarol,40\n"
    );
}

#[test]
fn export_without_path_uses_default_name() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("in.csv"), "k\nv\n").unwrap();

    csvstore()
        .current_dir(dir.path())
        .args(["-i", "in.csv", "-o"])
        .assert()
        .success();

    assert_eq!(fs::read_to_string(dir.path().join("output.csv")).unwrap(), "k\nv\n");
}

#[test]
fn print_grid() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("scores.csv");
    fs::write(&input, "name,score\nAlice,9.5\n").unwrap();

    csvstore()
        .arg("-i")
        .arg(&input)
        .arg("-p")
        .assert()
        .success()
        .stdout(predicate::str::contains("name"))
        .stdout(predicate::str::contains("Alice"))
        .stdout(predicate::str::contains("9.50"));
}

#[test]
fn print_json() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("people.csv");
    fs::write(&input, "name,age\nBob,25\n").unwrap();

    csvstore()
        .arg("-i")
        .arg(&input)
        .args(["-p", "-f", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"kind\": \"integer\""));
}

#[test]
fn out_of_range_remove_is_reported_and_skipped() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("people.csv");
    fs::write(&input, "name,age\nAlice,30\n").unwrap();

    csvstore()
        .arg("-i")
        .arg(&input)
        .args(["-r", "5", "-p", "-f", "delimited"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Invalid argument 5"))
        .stdout(predicate::str::diff("name,age\nAlice,30\n"));
}

#[test]
fn missing_input_fails() {
    let dir = tempdir().unwrap();

    csvstore()
        .arg("-i")
        .arg(dir.path().join("nope.csv"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to import"));
}
