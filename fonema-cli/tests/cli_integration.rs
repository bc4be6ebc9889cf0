//! Integration tests for the fonema CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Write a minimal dictionary set into a data directory
fn write_fixture_data(dir: &Path) {
    fs::write(
        dir.join("en_US.json"),
        r#"{"hello": "hə.ˈloʊ", "world": "wɝld"}"#,
    )
    .unwrap();
    fs::write(
        dir.join("yue.json"),
        r#"{"三": "sa:m˥", "十": "sɐp˨", "三十": "sa:m˥sɐp˨"}"#,
    )
    .unwrap();
}

fn fonema() -> Command {
    Command::cargo_bin("fonema").unwrap()
}

#[test]
fn test_transcribe_text_argument() {
    let data_dir = TempDir::new().unwrap();
    write_fixture_data(data_dir.path());

    fonema()
        .arg("transcribe")
        .arg("--text")
        .arg("Hello world!")
        .arg("-l")
        .arg("en_US")
        .arg("-d")
        .arg(data_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("/hə.ˈloʊ/ world!"));
}

#[test]
fn test_transcribe_from_file() {
    let data_dir = TempDir::new().unwrap();
    write_fixture_data(data_dir.path());
    let input_file = data_dir.path().join("input.txt");
    fs::write(&input_file, "hello world").unwrap();

    fonema()
        .arg("transcribe")
        .arg("-i")
        .arg(&input_file)
        .arg("-l")
        .arg("en_US")
        .arg("-d")
        .arg(data_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("/hə.ˈloʊ/ /wɝld/"));
}

#[test]
fn test_transcribe_from_stdin() {
    let data_dir = TempDir::new().unwrap();
    write_fixture_data(data_dir.path());

    fonema()
        .arg("transcribe")
        .arg("-l")
        .arg("en_US")
        .arg("-d")
        .arg(data_dir.path())
        .write_stdin("hello")
        .assert()
        .success()
        .stdout(predicate::str::contains("/hə.ˈloʊ/"));
}

#[test]
fn test_character_based_longest_match() {
    let data_dir = TempDir::new().unwrap();
    write_fixture_data(data_dir.path());

    // "三十" must match as one token, not as "三" then "十"
    fonema()
        .arg("transcribe")
        .arg("--text")
        .arg("三十")
        .arg("-l")
        .arg("yue")
        .arg("-d")
        .arg(data_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("/sa:m˥sɐp˨/"));
}

#[test]
fn test_jyutping_format() {
    let data_dir = TempDir::new().unwrap();
    write_fixture_data(data_dir.path());

    fonema()
        .arg("transcribe")
        .arg("--text")
        .arg("三十")
        .arg("-l")
        .arg("yue")
        .arg("-f")
        .arg("jyutping")
        .arg("-d")
        .arg(data_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("/sam1sɐp9/"));
}

#[test]
fn test_show_tokens_flag() {
    let data_dir = TempDir::new().unwrap();
    write_fixture_data(data_dir.path());

    fonema()
        .arg("transcribe")
        .arg("--text")
        .arg("三")
        .arg("-l")
        .arg("yue")
        .arg("--show-tokens")
        .arg("-d")
        .arg(data_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("三/sa:m˥/"));
}

#[test]
fn test_json_output() {
    let data_dir = TempDir::new().unwrap();
    write_fixture_data(data_dir.path());

    fonema()
        .arg("transcribe")
        .arg("--text")
        .arg("hello")
        .arg("-l")
        .arg("en_US")
        .arg("--json")
        .arg("-d")
        .arg(data_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"ipa\""))
        .stdout(predicate::str::contains("\"language\": \"en_US\""))
        .stdout(predicate::str::contains("\"format\": \"original\""));
}

#[test]
fn test_output_to_file() {
    let data_dir = TempDir::new().unwrap();
    write_fixture_data(data_dir.path());
    let output_file = data_dir.path().join("output.txt");

    fonema()
        .arg("transcribe")
        .arg("--text")
        .arg("hello")
        .arg("-l")
        .arg("en_US")
        .arg("-o")
        .arg(&output_file)
        .arg("-d")
        .arg(data_dir.path())
        .assert()
        .success();

    let content = fs::read_to_string(&output_file).unwrap();
    assert!(content.contains("/hə.ˈloʊ/"));
}

#[test]
fn test_unsupported_language_fails_with_codes() {
    let data_dir = TempDir::new().unwrap();
    write_fixture_data(data_dir.path());

    fonema()
        .arg("transcribe")
        .arg("--text")
        .arg("hello")
        .arg("-l")
        .arg("xx_ZZ")
        .arg("-d")
        .arg(data_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("language 'xx_ZZ' is not supported"))
        .stderr(predicate::str::contains("en_US"));
}

#[test]
fn test_missing_dictionary_fails() {
    let data_dir = TempDir::new().unwrap();
    // Registered language, but no dictionary file in the data directory

    fonema()
        .arg("transcribe")
        .arg("--text")
        .arg("saluton")
        .arg("-l")
        .arg("eo")
        .arg("-d")
        .arg(data_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("dictionary for 'eo' unavailable"));
}

#[test]
fn test_list_languages() {
    fonema()
        .arg("list")
        .arg("languages")
        .assert()
        .success()
        .stdout(predicate::str::contains("yue"))
        .stdout(predicate::str::contains("Cantonese"))
        .stdout(predicate::str::contains("character-based"))
        .stdout(predicate::str::contains("es_MX"));
}

#[test]
fn test_list_formats() {
    fonema()
        .arg("list")
        .arg("formats")
        .assert()
        .success()
        .stdout(predicate::str::contains("original"))
        .stdout(predicate::str::contains("numeric"))
        .stdout(predicate::str::contains("jyutping"));
}

#[test]
fn test_text_and_input_conflict() {
    fonema()
        .arg("transcribe")
        .arg("--text")
        .arg("hello")
        .arg("-i")
        .arg("somefile.txt")
        .arg("-l")
        .arg("en_US")
        .assert()
        .failure();
}
