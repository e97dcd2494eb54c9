use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

const SAMPLE: &str = "a,b,x@zimbio.com,d,e\n\
                      a,b,x@gmail.com,d,e\n\
                      a,b,y@gmail.com,d,e\n";

fn write_sample(dir: &tempfile::TempDir) -> std::path::PathBuf {
    let path = dir.path().join("customers.csv");
    fs::write(&path, SAMPLE).unwrap();
    path
}

#[test]
fn prints_sorted_domain_counts() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_sample(&dir);

    Command::cargo_bin("domain-tally")
        .unwrap()
        .arg(&path)
        .arg("--quiet")
        .assert()
        .success()
        .stdout("gmail.com,2\nzimbio.com,1\n");
}

#[test]
fn json_output_is_an_entry_array() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_sample(&dir);

    let output = Command::cargo_bin("domain-tally")
        .unwrap()
        .arg(&path)
        .args(["--json", "--quiet"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let entries: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(entries[0]["domain"], "gmail.com");
    assert_eq!(entries[0]["occurrences"], 2);
}

#[test]
fn missing_file_fails_with_message() {
    Command::cargo_bin("domain-tally")
        .unwrap()
        .arg("doesnt-exist.csv")
        .assert()
        .failure()
        .stderr(predicate::str::contains("file not found"));
}

#[test]
fn rejects_email_field_outside_the_record() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_sample(&dir);

    Command::cargo_bin("domain-tally")
        .unwrap()
        .arg(&path)
        .args(["--fields", "5", "--email-field", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid options"));
}
