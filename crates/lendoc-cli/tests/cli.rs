//! End-to-end tests for the `lendoc` binary.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const APPLICATION: &str = "\
PERSONAL LOAN APPLICATION
Applicant: Rahul Mehta
Residential Address: 42 Park Street, Kolkata
Annual Income: ₹9,60,000
Loan Amount: ₹3,00,000
";

fn lendoc() -> Command {
    Command::cargo_bin("lendoc").unwrap()
}

/// Write an isolated config whose summaries land in `dir`.
fn write_config(dir: &Path) -> PathBuf {
    let path = dir.join("config.json");
    let config = serde_json::json!({
        "export": { "output_dir": dir.join("out") }
    });
    fs::write(&path, config.to_string()).unwrap();
    path
}

fn write_text(dir: &Path, text: &str) -> PathBuf {
    let path = dir.join("ocr.txt");
    fs::write(&path, text).unwrap();
    path
}

#[test]
fn extract_json_report() {
    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path());
    let input = write_text(dir.path(), APPLICATION);

    let output = lendoc()
        .arg("--config")
        .arg(&config)
        .arg("extract")
        .arg(&input)
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let fields = report["fields"].as_array().unwrap();
    assert_eq!(fields.len(), 4);
    assert_eq!(fields[0]["field"], "name");
    assert_eq!(fields[0]["final_value"], "Rahul Mehta");
    assert_eq!(fields[2]["final_value"], "9,60,000");
    assert_eq!(fields[2]["matches"][0]["confidence"], "high");
}

#[test]
fn extract_reads_stdin() {
    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path());

    lendoc()
        .arg("--config")
        .arg(&config)
        .args(["extract", "-", "--format", "text"])
        .write_stdin("Applicant: Solo\nIncome Details: 5000\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Name: (not found)"))
        .stdout(predicate::str::contains("✗ \"Solo\" (medium)"))
        .stdout(predicate::str::contains("✗ \"5000\" (medium)"));
}

#[test]
fn extract_missing_input_fails() {
    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path());

    lendoc()
        .arg("--config")
        .arg(&config)
        .arg("extract")
        .arg(dir.path().join("missing.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn submit_writes_summary() {
    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path());
    let input = write_text(dir.path(), APPLICATION);

    lendoc()
        .arg("--config")
        .arg(&config)
        .arg("submit")
        .arg(&input)
        .args(["--set", "loan_amount=3,50,000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("submitted to the loan processing system"))
        .stdout(predicate::str::contains("Loan Amount: 3,50,000"));

    let summaries: Vec<PathBuf> = fs::read_dir(dir.path().join("out"))
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .collect();
    assert_eq!(summaries.len(), 1);

    let name = summaries[0].file_name().unwrap().to_string_lossy().to_string();
    assert!(name.starts_with("Loan_Submission_"));
    assert!(name.ends_with(".txt"));
    assert_eq!(name.len(), "Loan_Submission_YYYYMMDD_HHMMSS.txt".len());

    let content = fs::read_to_string(&summaries[0]).unwrap();
    assert_eq!(
        content,
        "Name: Rahul Mehta\n\
         Address: 42 Park Street, Kolkata\n\
         Income: 9,60,000\n\
         Loan Amount: 3,50,000"
    );
}

#[test]
fn submit_rejects_unknown_field() {
    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path());
    let input = write_text(dir.path(), APPLICATION);

    lendoc()
        .arg("--config")
        .arg(&config)
        .arg("submit")
        .arg(&input)
        .args(["--set", "pan=ABCDE1234F", "--no-export"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown field: pan"));
}

#[test]
fn submit_without_export() {
    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path());
    let input = write_text(dir.path(), "Applicant: Solo\n");

    lendoc()
        .arg("--config")
        .arg(&config)
        .arg("submit")
        .arg(&input)
        .arg("--no-export")
        .assert()
        .success()
        .stdout(predicate::str::contains("none valid"))
        .stderr(predicate::str::contains("name is blank"));

    assert!(!dir.path().join("out").exists());
}

#[test]
fn process_rejects_unsupported_format() {
    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path());
    let input = dir.path().join("scan.gif");
    fs::write(&input, b"GIF89a").unwrap();

    lendoc()
        .arg("--config")
        .arg(&config)
        .arg("process")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported file format"));
}

#[test]
fn process_reports_decode_failure() {
    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path());
    let input = dir.path().join("scan.png");
    fs::write(&input, b"definitely not a png").unwrap();

    lendoc()
        .arg("--config")
        .arg(&config)
        .arg("process")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to decode"));
}

#[test]
fn process_reports_missing_ocr_engine() {
    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path());
    let input = dir.path().join("scan.png");
    image::GrayImage::from_pixel(8, 8, image::Luma([255]))
        .save(&input)
        .unwrap();

    lendoc()
        .arg("--config")
        .arg(&config)
        .arg("process")
        .arg(&input)
        .arg("--tesseract")
        .arg(dir.path().join("no-such-tesseract"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to launch OCR engine"));
}

#[test]
fn config_set_writes_explicit_file() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("my.json");

    lendoc()
        .arg("-c")
        .arg(&config)
        .args(["config", "set", "ocr.language", "hin"])
        .assert()
        .success();

    let written = fs::read_to_string(&config).unwrap();
    assert!(written.contains("\"hin\""));

    lendoc()
        .arg("-c")
        .arg(&config)
        .args(["config", "get", "ocr.language"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hin"));

    lendoc()
        .arg("-c")
        .arg(&config)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("my.json"));
}

#[test]
fn config_init_uses_explicit_file() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("fresh.json");

    lendoc()
        .arg("--config")
        .arg(&config)
        .args(["config", "init"])
        .assert()
        .success();
    assert!(config.exists());

    lendoc()
        .arg("--config")
        .arg(&config)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}
