//! End-to-end tests for the crossword_helper binary.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

fn crossword_cmd() -> Command {
    let mut cmd = Command::cargo_bin("crossword_helper").unwrap();
    cmd.env_remove("CROSSWORD_LOG").env("NO_COLOR", "1");
    cmd
}

fn dictionary(words: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for word in words {
        writeln!(file, "{word}").unwrap();
    }
    file.flush().unwrap();
    file
}

#[test]
fn anagram_matches_in_dictionary_order() {
    let dict = dictionary(&["listen", "enlist", "silent", "banana", "tinsel"]);

    crossword_cmd()
        .arg("A")
        .arg(dict.path())
        .arg("LISTEN")
        .assert()
        .success()
        .stdout("1: listen\n2: enlist\n3: silent\n4: tinsel\nMatches: 4\n");
}

#[test]
fn pattern_matches_in_dictionary_order() {
    let dict = dictionary(&["cat", "car", "can", "dog"]);

    crossword_cmd()
        .arg("P")
        .arg(dict.path())
        .arg("ca_")
        .assert()
        .success()
        .stdout("1: cat\n2: car\n3: can\nMatches: 3\n");
}

#[test]
fn parallel_scan_prints_same_report() {
    let dict = dictionary(&["cat", "car", "can", "dog"]);

    crossword_cmd()
        .arg("--parallel")
        .arg("P")
        .arg(dict.path())
        .arg("ca_")
        .assert()
        .success()
        .stdout("1: cat\n2: car\n3: can\nMatches: 3\n");
}

#[test]
fn no_matches_still_prints_total() {
    let dict = dictionary(&["cat", "dog"]);

    crossword_cmd()
        .arg("A")
        .arg(dict.path())
        .arg("xyz")
        .assert()
        .success()
        .stdout("Matches: 0\n");
}

#[test]
fn banner_goes_to_stderr_unless_quiet() {
    let dict = dictionary(&["cat"]);

    crossword_cmd()
        .arg("A")
        .arg(dict.path())
        .arg("tac")
        .assert()
        .success()
        .stderr(predicate::str::contains("Crossword Helper"));

    crossword_cmd()
        .arg("-q")
        .arg("A")
        .arg(dict.path())
        .arg("tac")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn wrong_argument_count_prints_usage() {
    crossword_cmd()
        .args(["A", "words.txt"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Invalid number of arguments."))
        .stderr(predicate::str::contains(
            "Please use the format: crossword_helper [A|P] [dictionary] [letters]",
        ));
}

#[test]
fn digits_rejected_before_dictionary_is_opened() {
    crossword_cmd()
        .args(["A", "/no/such/dictionary.txt", "c4t"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Matches").not())
        .stderr(predicate::str::contains("Numbers or digits are not allowed"))
        .stderr(predicate::str::contains("File not found.").not());
}

#[test]
fn punctuation_rejected() {
    let dict = dictionary(&["cat"]);

    crossword_cmd()
        .arg("P")
        .arg(dict.path())
        .arg("c.t")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "Punctuation characters are not allowed",
        ));
}

#[test]
fn leading_hyphen_letters_rejected_as_punctuation() {
    let dict = dictionary(&["cat", "bat"]);

    crossword_cmd()
        .arg("P")
        .arg(dict.path())
        .arg("-at")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Invalid argument(s)."))
        .stderr(predicate::str::contains(
            "Punctuation characters are not allowed",
        ));
}

#[test]
fn unicode_punctuation_rejected_and_symbols_accepted() {
    let dict = dictionary(&["cat"]);

    crossword_cmd()
        .arg("P")
        .arg(dict.path())
        .arg("c\u{2019}t")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Punctuation characters are not allowed",
        ));

    crossword_cmd()
        .arg("P")
        .arg(dict.path())
        .arg("c+t")
        .assert()
        .success()
        .stdout("Matches: 0\n");
}

#[test]
fn invalid_mode_rejected() {
    let dict = dictionary(&["cat"]);

    crossword_cmd()
        .arg("X")
        .arg(dict.path())
        .arg("cat")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Invalid first argument 'X'"))
        .stderr(predicate::str::contains("Please use the format: [A|P]"));
}

#[test]
fn missing_dictionary_reports_not_found() {
    let dir = tempfile::tempdir().unwrap();

    crossword_cmd()
        .arg("A")
        .arg(dir.path().join("missing.txt"))
        .arg("cat")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("File not found."));
}

#[test]
fn empty_dictionary_rejected() {
    let dict = NamedTempFile::new().unwrap();

    crossword_cmd()
        .arg("P")
        .arg(dict.path())
        .arg("c__")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "Please make sure it is a non-empty readable dictionary file",
        ));
}
