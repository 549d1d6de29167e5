//! Integration tests for the dashwords CLI
//!
//! These tests run the actual binary and verify its output.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn dashwords_cmd() -> Command {
    let mut cmd = Command::cargo_bin("dashwords").unwrap();
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

/// Write a word list with the given words and return its path
fn wordlist(dir: &TempDir, words: &[&str]) -> PathBuf {
    let path = dir.path().join("words.txt");
    fs::write(&path, words.join("\n")).unwrap();
    path
}

#[test]
fn test_help_lists_subcommands() {
    dashwords_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Guess the five-letter word"))
        .stdout(predicate::str::contains("simple"))
        .stdout(predicate::str::contains("evaluate"))
        .stdout(predicate::str::contains("simulate"));
}

// ============================================================================
// evaluate
// ============================================================================

#[test]
fn test_evaluate_prints_feedback_row() {
    dashwords_cmd()
        .args(["evaluate", "crane", "slate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("⬜⬜🟩⬜🟩"))
        .stdout(predicate::str::contains("Correct: 2   Present: 0"));
}

#[test]
fn test_evaluate_exact_match() {
    dashwords_cmd()
        .args(["evaluate", "CRANE", "crane"])
        .assert()
        .success()
        .stdout(predicate::str::contains("🟩🟩🟩🟩🟩"))
        .stdout(predicate::str::contains("scores 25 points"));
}

#[test]
fn test_evaluate_rejects_short_word() {
    dashwords_cmd()
        .args(["evaluate", "crane", "cat"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("5 letters"));
}

// ============================================================================
// simple
// ============================================================================

#[test]
fn test_simple_first_guess_win() {
    let dir = TempDir::new().unwrap();
    let path = wordlist(&dir, &["crane"]);

    dashwords_cmd()
        .args(["simple", "-w", path.to_str().unwrap()])
        .write_stdin("crane\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Congratulations! You've won 25 points!",
        ))
        .stdout(predicate::str::contains("Thanks for playing!"));
}

#[test]
fn test_simple_guess_with_digit_uses_an_attempt() {
    let dir = TempDir::new().unwrap();
    let path = wordlist(&dir, &["crane"]);

    dashwords_cmd()
        .args(["simple", "-w", path.to_str().unwrap()])
        .write_stdin("cran1\ncrane\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(" C  R  A  N  1 "))
        .stdout(predicate::str::contains(
            "Congratulations! You've won 20 points!",
        ));
}

#[test]
fn test_simple_loss_reveals_secret() {
    let dir = TempDir::new().unwrap();
    let path = wordlist(&dir, &["crane"]);

    dashwords_cmd()
        .args(["simple", "-w", path.to_str().unwrap()])
        .write_stdin("slate\nslate\nslate\nslate\nslate\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Sorry, you lost. The word was: CRANE",
        ));
}

#[test]
fn test_simple_leaderboard_after_win() {
    let dir = TempDir::new().unwrap();
    let path = wordlist(&dir, &["crane"]);

    dashwords_cmd()
        .args(["simple", "-w", path.to_str().unwrap()])
        .write_stdin("crane\nleaderboard\nrestart\ncrane\nleaderboard\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("LEADERBOARD"))
        .stdout(predicate::str::contains("Games played:  2"))
        .stdout(predicate::str::contains("Total points:  50"));
}

#[test]
fn test_simple_ends_on_eof() {
    dashwords_cmd()
        .args(["simple", "--seed", "42"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Thanks for playing!"));
}

#[test]
fn test_log_file_records_outcome() {
    let dir = TempDir::new().unwrap();
    let path = wordlist(&dir, &["crane"]);
    let log = dir.path().join("dashwords.log");

    dashwords_cmd()
        .env("RUST_LOG", "info")
        .args(["simple", "-w", path.to_str().unwrap()])
        .arg("--log-file")
        .arg(&log)
        .write_stdin("crane\n")
        .assert()
        .success();

    let contents = fs::read_to_string(&log).unwrap();
    assert!(contents.contains("game won"));
    assert!(!contents.contains("secret word selected"));
}

// ============================================================================
// simulate / word lists
// ============================================================================

#[test]
fn test_simulate_single_word_list() {
    let dir = TempDir::new().unwrap();
    let path = wordlist(&dir, &["crane"]);

    dashwords_cmd()
        .args(["simulate", "-n", "10", "--seed", "3", "-w"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Games played:     10"))
        .stdout(predicate::str::contains("100.0%"));
}

#[test]
fn test_missing_wordlist_fails() {
    dashwords_cmd()
        .args(["simple", "-w", "/nonexistent/words.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load word list"));
}

#[test]
fn test_wordlist_without_valid_words_fails() {
    let dir = TempDir::new().unwrap();
    let path = wordlist(&dir, &["# comment", "cat", "toolong"]);

    dashwords_cmd()
        .args(["simulate", "-n", "1", "-w"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no valid five-letter words"));
}
