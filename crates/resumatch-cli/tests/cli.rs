use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const RESUME: &str = "Jane Doe\n\
Senior Backend Engineer\n\
jane.doe@example.com | (555) 123-4567\n\
linkedin.com/in/janedoe\n\
\n\
8 years of experience building services at Initech since 2016\n";

fn resumatch(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("resumatch").unwrap();
    // Keep the user's own config out of the way
    cmd.arg("--config").arg(dir.path().join("config.json"));
    cmd
}

fn write(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn init_config(dir: &TempDir) {
    resumatch(dir).args(["config", "init"]).assert().success();
}

#[test]
fn parse_plain_text_resume_as_json() {
    let dir = TempDir::new().unwrap();
    init_config(&dir);
    let resume = write(&dir, "jane.txt", RESUME);

    let output = resumatch(&dir)
        .arg("parse")
        .arg(&resume)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let profile: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(profile["full_name"], "Jane Doe");
    assert_eq!(profile["email"], "jane.doe@example.com");
    assert_eq!(profile["phone"], "(555) 123-4567");
    assert_eq!(profile["linkedin_url"], "linkedin.com/in/janedoe");
    assert_eq!(profile["current_company"], "Initech");
    assert_eq!(profile["years_of_experience"], 8);
}

#[test]
fn parse_reports_missing_fields_on_stderr() {
    let dir = TempDir::new().unwrap();
    init_config(&dir);
    let resume = write(&dir, "sparse.txt", "contact: someone@example.org\n");

    resumatch(&dir)
        .args(["parse", "--format", "csv"])
        .arg(&resume)
        .assert()
        .success()
        .stdout(predicate::str::contains(",someone@example.org,"))
        .stderr(predicate::str::contains("fill in manually"))
        .stderr(predicate::str::contains("full_name"));
}

#[test]
fn parse_rejects_unsupported_extension() {
    let dir = TempDir::new().unwrap();
    init_config(&dir);
    let resume = write(&dir, "jane.docx", RESUME);

    resumatch(&dir)
        .arg("parse")
        .arg(&resume)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported file format: docx"));
}

#[test]
fn parse_rejects_empty_file() {
    let dir = TempDir::new().unwrap();
    init_config(&dir);
    let resume = write(&dir, "empty.txt", "");

    resumatch(&dir)
        .arg("parse")
        .arg(&resume)
        .assert()
        .failure()
        .stderr(predicate::str::contains("document is empty"));
}

#[test]
fn parse_missing_input_fails() {
    let dir = TempDir::new().unwrap();
    init_config(&dir);

    resumatch(&dir)
        .args(["parse", "does-not-exist.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn score_from_skill_list() {
    let dir = TempDir::new().unwrap();
    init_config(&dir);
    let job = write(
        &dir,
        "job.json",
        r#"{
            "mandatory_keywords": ["Rust", "SQL"],
            "preferred_keywords": ["Kafka"],
            "min_experience_years": 5
        }"#,
    );

    resumatch(&dir)
        .args(["score", "--skills", "Rust, PostgreSQL, Docker", "--years", "7", "--job"])
        .arg(&job)
        .assert()
        .success()
        .stdout(predicate::str::contains("Overall match: 75% (Strong Match)"))
        .stdout(predicate::str::contains("Mandatory keywords: 2/2"))
        .stdout(predicate::str::contains("✗ Kafka"));
}

#[test]
fn score_from_candidate_file_as_json() {
    let dir = TempDir::new().unwrap();
    init_config(&dir);
    let candidate = write(&dir, "candidate.json", r#"{"skills":["Go"],"years_of_experience":2}"#);
    let job = write(
        &dir,
        "job.json",
        r#"{"mandatory_keywords":["Rust"],"min_experience_years":3}"#,
    );

    let output = resumatch(&dir)
        .args(["score", "--format", "json", "--candidate"])
        .arg(&candidate)
        .arg("--job")
        .arg(&job)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&output).unwrap();
    // Only the empty preferred list contributes
    assert_eq!(report["score"]["overall_match_percentage"], 25);
    assert_eq!(report["score"]["experience_match"], false);
    assert_eq!(report["band"], "weak");
    assert_eq!(report["mandatory"][0]["matched"], false);
}

#[test]
fn score_requires_a_candidate() {
    let dir = TempDir::new().unwrap();
    init_config(&dir);
    let job = write(&dir, "job.json", r#"{"mandatory_keywords":["Rust"]}"#);

    resumatch(&dir)
        .arg("score")
        .arg("--job")
        .arg(&job)
        .assert()
        .failure()
        .stderr(predicate::str::contains("--candidate or --skills"));
}

#[test]
fn batch_writes_outputs_and_summary() {
    let dir = TempDir::new().unwrap();
    init_config(&dir);
    let inputs = dir.path().join("inputs");
    fs::create_dir_all(&inputs).unwrap();
    fs::write(inputs.join("jane.txt"), RESUME).unwrap();
    fs::write(inputs.join("john.txt"), "John Smith\njohn@example.com\n").unwrap();
    fs::write(inputs.join("notes.md"), "ignored").unwrap();
    let out = dir.path().join("out");

    resumatch(&dir)
        .arg("batch")
        .arg(format!("{}/*", inputs.display()))
        .arg("--output-dir")
        .arg(&out)
        .arg("--summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 2 files"))
        .stdout(predicate::str::contains("2 successful, 0 failed"));

    assert!(out.join("jane.txt.json").exists());
    assert!(out.join("john.txt.json").exists());

    let summary = fs::read_to_string(out.join("summary.csv")).unwrap();
    let lines: Vec<&str> = summary.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[1].starts_with("jane.txt,success,Jane Doe"));
    assert!(lines[2].starts_with("john.txt,success,John Smith"));
}

#[test]
fn batch_continue_on_error_records_failures() {
    let dir = TempDir::new().unwrap();
    init_config(&dir);
    let inputs = dir.path().join("inputs");
    fs::create_dir_all(&inputs).unwrap();
    fs::write(inputs.join("good.txt"), RESUME).unwrap();
    fs::write(inputs.join("empty.txt"), "").unwrap();
    let pattern = format!("{}/*.txt", inputs.display());

    resumatch(&dir)
        .args(["batch", &pattern])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Processing failed"));

    resumatch(&dir)
        .args(["batch", &pattern, "--continue-on-error", "-j", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 successful, 1 failed"))
        .stdout(predicate::str::contains("document is empty"));
}

#[test]
fn config_get_and_set() {
    let dir = TempDir::new().unwrap();

    resumatch(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"preview_chars\": 500"))
        .stderr(predicate::str::contains("showing defaults"));

    resumatch(&dir)
        .args(["config", "set", "scoring.weights.mandatory", "0.5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Set scoring.weights.mandatory = 0.5"));

    resumatch(&dir)
        .args(["config", "get", "scoring.weights.mandatory"])
        .assert()
        .success()
        .stdout(predicate::str::diff("0.5\n"));

    resumatch(&dir)
        .args(["config", "set", "scoring.bands.moderate", "90"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceeds strong threshold"));
}

#[test]
fn config_set_rejects_experience_cap_above_fifty() {
    let dir = TempDir::new().unwrap();

    resumatch(&dir)
        .args(["config", "set", "extraction.max_years_of_experience", "80"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceeds 50"));
}

#[test]
fn config_init_refuses_to_overwrite() {
    let dir = TempDir::new().unwrap();
    init_config(&dir);

    resumatch(&dir)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    resumatch(&dir).args(["config", "init", "--force"]).assert().success();
}
