//! Integration tests for the arli CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

fn arli() -> Command {
    Command::cargo_bin("arli").unwrap()
}

#[test]
fn test_transform_text_argument() {
    arli()
        .args(["transform", "12/05/1989"])
        .assert()
        .success()
        .stdout("١٢؍٠٥؍١٩٨٩\n");
}

#[test]
fn test_transform_input_file() {
    arli()
        .args(["transform", "-i", &fixture_path("arabic-sample.txt")])
        .assert()
        .success()
        .stdout("السعر ١٬٢٥٠٫٧٥ ريال ﴾شامل ١٥٪ ضريبة﴿؟\n");
}

#[test]
fn test_transform_stdin() {
    arli()
        .arg("transform")
        .write_stdin("(5%)\n")
        .assert()
        .success()
        .stdout("﴾٥٪﴿\n");
}

#[test]
fn test_disabling_digits_disables_dates() {
    arli()
        .args(["transform", "12/05/1989", "--digit", "false"])
        .assert()
        .success()
        .stdout("12/05/1989\n");
}

#[test]
fn test_reversed_defaults() {
    arli()
        .args(["transform", "--reversed", "Hello, 12?"])
        .assert()
        .success()
        .stdout("Hello, 12?\n");

    arli()
        .args(["transform", "--reversed", "--digit", "true", "Hello, 12?"])
        .assert()
        .success()
        .stdout("Hello, ١٢?\n");
}

#[test]
fn test_rejected_input() {
    arli()
        .args(["transform", "undefined"])
        .assert()
        .success()
        .stdout("\n");

    arli()
        .args(["transform", "--reversed", "undefined"])
        .assert()
        .success()
        .stdout("undefined\n");
}

#[test]
fn test_date_reorder_flag() {
    arli()
        .args(["transform", "--date-to", "MDY", "25/12/1989"])
        .assert()
        .success()
        .stdout("١٢؍٢٥؍١٩٨٩\n");
}

#[test]
fn test_tatweel_and_ligature_flags() {
    arli()
        .args(["transform", "مرحبــــا"])
        .assert()
        .success()
        .stdout("مرحبـا\n");

    arli()
        .args(["transform", "--tatweel", "all", "مرحبــــا"])
        .assert()
        .success()
        .stdout("مرحبا\n");

    arli()
        .args(["transform", "--ligatures-deep", "2", "عليه السلام"])
        .assert()
        .success()
        .stdout("\u{FD47}\n");

    arli()
        .args([
            "transform",
            "--exclude-ligature",
            "عليه السلام",
            "عليه السلام",
        ])
        .assert()
        .success()
        .stdout("عليه السلام\n");
}

#[test]
fn test_exclude_punc_flag() {
    arli()
        .args(["transform", "--exclude-punc", "?", "(why?)"])
        .assert()
        .success()
        .stdout("﴾why?﴿\n");
}

#[test]
fn test_invalid_flag_value() {
    arli()
        .args(["transform", "--ligatures-deep", "3", "text"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ligaturesDeep"));
}

#[test]
fn test_json_output() {
    let output = arli()
        .args(["transform", "-f", "json", "15%"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["input"], "15%");
    assert_eq!(value["output"], "١٥٪");
    assert_eq!(value["version"], env!("CARGO_PKG_VERSION"));
}

#[test]
fn test_config_file_and_flag_precedence() {
    let config = fixture_path("no-punctuation.json");

    arli()
        .args(["transform", "-c", &config, "why? مرحبــا"])
        .assert()
        .success()
        .stdout("why? مرحبــا\n");

    arli()
        .args(["transform", "-c", &config, "--punc", "true", "why?"])
        .assert()
        .success()
        .stdout("why؟\n");
}

#[test]
fn test_output_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("out.txt");

    arli()
        .args(["transform", "7,000", "-o"])
        .arg(&output_path)
        .assert()
        .success()
        .stdout("");

    assert_eq!(fs::read_to_string(&output_path).unwrap(), "٧٬٠٠٠\n");
}

#[test]
fn test_missing_input_file() {
    arli()
        .args(["transform", "-i", "/nonexistent/input.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_list_tables() {
    arli()
        .args(["list", "digits"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0\t٠\tU+0660"));

    arli()
        .args(["list", "punctuation"])
        .assert()
        .success()
        .stdout(predicate::str::contains(";\t؛\tU+061B"));

    arli()
        .args(["list", "ligatures"])
        .assert()
        .success()
        .stdout(predicate::str::contains("رضي الله عنه"));
}

#[test]
fn test_generate_then_validate() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("arli.toml");

    arli()
        .arg("generate-config")
        .arg("-o")
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("generated successfully"));

    arli()
        .arg("validate")
        .arg("-c")
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Configuration is valid!"));

    arli()
        .args(["transform", "12/05/1989", "-c"])
        .arg(&config_path)
        .assert()
        .success()
        .stdout("١٢؍٠٥؍١٩٨٩\n");
}

#[test]
fn test_validate_invalid_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("bad.toml");
    fs::write(&config_path, "removeTatweel = \"some\"\n").unwrap();

    arli()
        .arg("validate")
        .arg("--config")
        .arg(&config_path)
        .assert()
        .failure()
        .stdout(predicate::str::contains("✗ Configuration is invalid!"))
        .stderr(predicate::str::contains("Validation failed"));
}

#[test]
fn test_version() {
    arli()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_verbosity_controls_logging() {
    arli()
        .args(["transform", "-vv", "12"])
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stdout("١٢\n")
        .stderr(predicate::str::contains("Transforming 2 bytes"));

    arli()
        .args(["transform", "-q", "-vv", "12"])
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stderr("");
}

#[test]
fn test_large_input_file() {
    let temp_dir = TempDir::new().unwrap();
    let input_path = temp_dir.path().join("large.txt");
    let mut text = "1 ".repeat(500_000);
    text.push_str("12/05/1989 3.14\n");
    fs::write(&input_path, text).unwrap();

    arli()
        .arg("transform")
        .arg("-i")
        .arg(&input_path)
        .assert()
        .success()
        .stdout(predicate::str::ends_with("١ ١٢؍٠٥؍١٩٨٩ ٣٫١٤\n"));
}
