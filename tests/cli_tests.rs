use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn write_inputs(dir: &TempDir) -> (std::path::PathBuf, std::path::PathBuf) {
    let before = dir.path().join("before.txt");
    let after = dir.path().join("after.txt");
    fs::write(&before, "It should be noted that our approach is fundamentally different.")
        .expect("Failed to write before file");
    fs::write(&after, "Our approach is different.").expect("Failed to write after file");
    (before, after)
}

fn copydelta() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_copydelta"));
    command.env_remove("COPYDELTA_COLOR");
    command
}

#[test]
fn test_json_output() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let (before, after) = write_inputs(&temp_dir);

    let output = copydelta()
        .arg(&before)
        .arg(&after)
        .args(["--output", "json"])
        .output()
        .expect("Failed to run copydelta");

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    assert_eq!(json["improvementScore"], 37);
    assert_eq!(json["beforeMetrics"]["wordCount"], 10);
    assert_eq!(json["afterMetrics"]["wordCount"], 4);
}

#[test]
fn test_text_output_without_color() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let (before, after) = write_inputs(&temp_dir);

    let output = copydelta()
        .arg(&before)
        .arg(&after)
        .arg("--no-color")
        .output()
        .expect("Failed to run copydelta");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("[-fundamentally-]"));
    assert!(stdout.contains("{+Our+}"));
    assert!(stdout.contains("Changes: 1 words added, 7 removed, 3 unchanged"));
    assert!(stdout.contains("Improvement Score: +37%"));
    assert!(!stdout.contains("\x1b["));
}

#[test]
fn test_export_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let (before, after) = write_inputs(&temp_dir);
    let export_path = temp_dir.path().join("results.txt");

    let status = copydelta()
        .arg(&before)
        .arg(&after)
        .args(["--output", "compact", "--export"])
        .arg(&export_path)
        .status()
        .expect("Failed to run copydelta");

    assert!(status.success());
    let exported = fs::read_to_string(&export_path).expect("Export file should exist");
    assert!(exported.starts_with("Copy Comparison Results"));
    assert!(exported.contains("Adverbs: 1 → 0"));
}

#[test]
fn test_config_file_sets_format() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let (before, after) = write_inputs(&temp_dir);
    let config_path = temp_dir.path().join("copydelta.toml");
    fs::write(&config_path, "[output]\nformat = \"compact\"\ncolor = false\n").unwrap();

    let output = copydelta()
        .arg(&before)
        .arg(&after)
        .arg("--config")
        .arg(&config_path)
        .output()
        .expect("Failed to run copydelta");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("+37% +1 -7"));
}

#[test]
fn test_missing_input_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let (before, _) = write_inputs(&temp_dir);

    let output = copydelta()
        .arg(&before)
        .arg(temp_dir.path().join("nope.txt"))
        .output()
        .expect("Failed to run copydelta");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Path does not exist"));
}
