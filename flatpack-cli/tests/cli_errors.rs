use assert_cmd::prelude::*;
use assert_fs::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn missing_source_fails_and_writes_nothing() {
    let td = assert_fs::TempDir::new().unwrap();

    Command::cargo_bin("flatpack")
        .unwrap()
        .current_dir(td.path())
        .args(["--output", "out", "no-such-dir"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));

    // Collection failed before flattening, so no partial manifest exists.
    td.child("out").assert(predicate::path::missing());
}

#[test]
fn malformed_source_spec_is_rejected() {
    let td = assert_fs::TempDir::new().unwrap();
    td.child("data/a.txt").write_str("alpha").unwrap();

    Command::cargo_bin("flatpack")
        .unwrap()
        .current_dir(td.path())
        .args(["--output", "out", "data:"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid source spec"));

    td.child("out").assert(predicate::path::missing());
}

#[test]
fn source_equal_to_destination_is_skipped_not_recursed() {
    let td = assert_fs::TempDir::new().unwrap();
    td.child("out/leftover.bin").write_str("old").unwrap();

    // The destination as the only source yields an empty manifest rather than
    // feeding the destination back into itself.
    Command::cargo_bin("flatpack")
        .unwrap()
        .current_dir(td.path())
        .args(["--output", "out", "out"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Flattened 0 file(s)"));

    let manifest: flatpack_core::manifest::Manifest = serde_json::from_str(
        &std::fs::read_to_string(td.child("out/files.json").path()).unwrap(),
    )
    .unwrap();
    assert!(manifest.file_map.is_empty());
}
