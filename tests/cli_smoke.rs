#![allow(clippy::unwrap_used)]
//! CLI smoke tests.
//!
//! Every run gets an empty `XDG_CONFIG_HOME` so a developer's own config file
//! cannot change the outcome. Nothing here touches the network: translation is
//! either turned off with `--to none` or the run fails before any request.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[allow(deprecated)]
fn tidy(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("tidy").unwrap();
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env_remove("TIDY_LOG")
        .env("NO_COLOR", "1");
    cmd
}

fn write_config(config_home: &TempDir, contents: &str) {
    let dir = config_home.path().join("tidy");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("config.toml"), contents).unwrap();
}

#[test]
fn test_help_displays_usage() {
    let home = TempDir::new().unwrap();
    tidy(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("translate it sentence by sentence"))
        .stdout(predicate::str::contains("--to"))
        .stdout(predicate::str::contains("--provider"))
        .stdout(predicate::str::contains("--format"));
}

#[test]
fn test_version_displays_version() {
    let home = TempDir::new().unwrap();
    tidy(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_languages_list() {
    let home = TempDir::new().unwrap();
    tidy(&home)
        .arg("languages")
        .assert()
        .success()
        .stdout(predicate::str::contains("zh-cn"))
        .stdout(predicate::str::contains("Vietnamese"))
        .stdout(predicate::str::contains("(default)"))
        .stdout(predicate::str::contains("None"));
}

#[test]
fn test_clean_only_from_stdin() {
    let home = TempDir::new().unwrap();
    tidy(&home)
        .args(["--to", "none"])
        .write_stdin("Hello\nworld . How are\nyou ?\n\nFine")
        .assert()
        .success()
        .stdout(predicate::str::contains("1  Cleaned:    Hello world."))
        .stdout(predicate::str::contains("2  Cleaned:    How are you?"))
        .stdout(predicate::str::contains("3  Cleaned:    Fine"))
        .stdout(predicate::str::contains("Translated:").not());
}

#[test]
fn test_clean_only_json_from_file() {
    let home = TempDir::new().unwrap();
    let input = home.path().join("input.txt");
    fs::write(&input, "Hi. Bye!").unwrap();

    let output = tidy(&home)
        .args(["--to", "None", "--format", "json"])
        .arg(&input)
        .output()
        .unwrap();

    assert!(output.status.success());
    let pairs: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(pairs.as_array().unwrap().len(), 2);
    assert_eq!(pairs[0]["cleaned"], "Hi.");
    assert_eq!(pairs[1]["cleaned"], "Bye!");
    assert_eq!(pairs[1]["translated"], "");
}

#[test]
fn test_output_file_is_written() {
    let home = TempDir::new().unwrap();
    let out = home.path().join("pairs.txt");

    tidy(&home)
        .args(["--to", "none", "--quiet", "--output"])
        .arg(&out)
        .write_stdin("One. Two.")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written = fs::read_to_string(&out).unwrap();
    assert!(written.contains("Cleaned:    One."));
    assert!(written.contains("Cleaned:    Two."));
    assert!(!written.contains('\u{1b}'));
}

#[test]
fn test_target_language_from_config() {
    let home = TempDir::new().unwrap();
    write_config(&home, "[tidy]\nto = \"none\"\n");

    tidy(&home)
        .write_stdin("Configured . Run")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleaned:    Configured."))
        .stdout(predicate::str::contains("Translated:").not());
}

#[test]
fn test_blank_input_succeeds_without_output() {
    let home = TempDir::new().unwrap();
    tidy(&home)
        .args(["--to", "none"])
        .write_stdin(" \n\n ")
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Enter text to clean and translate."));
}

#[test]
fn test_empty_input_succeeds_without_translating() {
    let home = TempDir::new().unwrap();
    // the default provider is never contacted for empty input
    tidy(&home)
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_invalid_language_code() {
    let home = TempDir::new().unwrap();
    tidy(&home)
        .args(["--to", "invalid_lang_xyz"])
        .write_stdin("hello")
        .assert()
        .failure()
        .code(exitcode::USAGE)
        .stderr(predicate::str::contains("Invalid language code"));
}

#[test]
fn test_unknown_provider() {
    let home = TempDir::new().unwrap();
    tidy(&home)
        .args(["--provider", "nowhere", "--to", "fr"])
        .write_stdin("hello")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Provider 'nowhere' not found"));
}

#[test]
fn test_malformed_config_is_reported() {
    let home = TempDir::new().unwrap();
    write_config(&home, "[tidy\n");

    tidy(&home)
        .args(["--to", "none"])
        .write_stdin("hello")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config file"));
}

#[test]
fn test_providers_list_includes_builtin() {
    let home = TempDir::new().unwrap();
    write_config(
        &home,
        "[providers.ollama]\nendpoint = \"http://localhost:11434\"\nmodels = [\"gemma3:12b\"]\n",
    );

    tidy(&home)
        .arg("providers")
        .assert()
        .success()
        .stdout(predicate::str::contains("google"))
        .stdout(predicate::str::contains("ollama"))
        .stdout(predicate::str::contains("gemma3:12b"));
}

#[test]
fn test_providers_show_unknown() {
    let home = TempDir::new().unwrap();
    tidy(&home)
        .args(["providers", "nowhere"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_interactive_help() {
    let home = TempDir::new().unwrap();
    tidy(&home)
        .args(["interactive", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--to"))
        .stdout(predicate::str::contains("--provider"))
        .stdout(predicate::str::contains("--model"));
}
