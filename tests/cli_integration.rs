//! End-to-end tests driving the filmlog binary over piped stdin.
//!
//! Each test runs the binary in its own temporary working directory so
//! the `movies.json` files never collide.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn filmlog(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("filmlog").expect("binary exists");
    cmd.current_dir(dir.path());
    cmd
}

#[test]
fn exits_cleanly_on_zero() {
    let dir = TempDir::new().unwrap();

    filmlog(&dir)
        .write_stdin("0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("MOVIE CATALOG"))
        .stdout(predicate::str::contains("Goodbye"));

    assert!(dir.path().join("movies.json").exists());
}

#[test]
fn add_is_visible_to_a_later_run() {
    let dir = TempDir::new().unwrap();

    filmlog(&dir)
        .write_stdin("2\nThe Matrix\n1999\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Movie 'The Matrix' added!"));

    let contents = std::fs::read_to_string(dir.path().join("movies.json")).unwrap();
    assert!(contents.contains("The Matrix"));

    filmlog(&dir)
        .write_stdin("1\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "1. The Matrix (1999) - [not watched]",
        ));
}

#[test]
fn mark_watched_persists_across_runs() {
    let dir = TempDir::new().unwrap();

    filmlog(&dir)
        .write_stdin("2\nInception\n2010\n0\n")
        .assert()
        .success();

    filmlog(&dir)
        .write_stdin("3\n1\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Movie marked as watched!"));

    filmlog(&dir)
        .write_stdin("1\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Inception (2010) - [watched]"));
}

#[test]
fn invalid_choice_reprints_menu() {
    let dir = TempDir::new().unwrap();

    filmlog(&dir)
        .write_stdin("9\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Error: choose an option between 0 and 4",
        ));
}

#[test]
fn starts_fresh_over_malformed_storage() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("movies.json"), "{invalid}").unwrap();

    filmlog(&dir)
        .write_stdin("1\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("The catalog is empty."));
}
