//! Integration tests for the medkb binary.
//!
//! These tests verify end-to-end behavior including:
//! - Search, filter, count and show over the built-in stores
//! - Loading extra stores from a directory
//! - Cross-reference navigation and lint
//! - Export to CSV and JSON

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Helper to create an isolated home for config and store files
fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Helper to get the CLI binary, isolated from the user's config and data
fn cli(home: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("medkb"));
    cmd.env("XDG_CONFIG_HOME", home.join("config"))
        .env("XDG_DATA_HOME", home.join("data"))
        .env_remove("RUST_LOG")
        .arg("--store-dir")
        .arg(home.join("stores"));
    cmd
}

const CARDIOLOGY_STORE: &str = r#"{
    "name": "cardiology",
    "schema": "clinical",
    "categories": ["arrhythmia"],
    "entries": [
        {"id": "atrial-fibrillation", "name": "Atrial Fibrillation",
         "category": "arrhythmia", "description": "Irregularly irregular atrial rhythm.",
         "crossReferences": [
            {"targetId": "deep-vein-thrombosis", "targetType": "condition",
             "relationship": "see-also", "label": "Deep Vein Thrombosis"}
         ]}
    ]
}"#;

fn write_store(home: &Path, file_name: &str, contents: &str) {
    let dir = home.join("stores");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(file_name), contents).unwrap();
}

#[test]
fn test_cli_help() {
    let temp_dir = setup_test_dir();
    cli(temp_dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Read-only medical knowledge base"));
}

#[test]
fn test_stores_lists_builtin() {
    let temp_dir = setup_test_dir();
    cli(temp_dir.path())
        .arg("stores")
        .assert()
        .success()
        .stdout(predicate::str::contains("hematology"))
        .stdout(predicate::str::contains("public-health"))
        .stdout(predicate::str::contains("electrolytes"))
        .stdout(predicate::str::contains("tiered"));
}

#[test]
fn test_search_hemolytic() {
    let temp_dir = setup_test_dir();
    cli(temp_dir.path())
        .args(["search", "hematology", "hemolytic"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hemolytic-anemia-autoimmune"))
        .stdout(predicate::str::contains("thrombotic-thrombocytopenic-purpura"))
        .stdout(predicate::str::contains("hemophilia-a").not());
}

#[test]
fn test_search_is_case_insensitive() {
    let temp_dir = setup_test_dir();
    cli(temp_dir.path())
        .args(["search", "hematology", "SICKLE"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sickle-cell-disease"));
}

#[test]
fn test_blank_search_matches_nothing() {
    let temp_dir = setup_test_dir();
    cli(temp_dir.path())
        .args(["search", "hematology", "   "])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries match"));
}

#[test]
fn test_filter_two_categories() {
    let temp_dir = setup_test_dir();
    cli(temp_dir.path())
        .args(["filter", "hematology", "-c", "platelet", "-c", "thrombotic"])
        .assert()
        .success()
        .stdout(predicate::str::contains("immune-thrombocytopenia"))
        .stdout(predicate::str::contains("deep-vein-thrombosis"))
        .stdout(predicate::str::contains("sickle-cell-disease").not());
}

#[test]
fn test_filter_without_categories_lists_everything() {
    let temp_dir = setup_test_dir();
    cli(temp_dir.path())
        .args(["filter", "hematology"])
        .assert()
        .success()
        .stdout(predicate::str::contains("iron-deficiency-anemia"))
        .stdout(predicate::str::contains("acute-hemolytic-transfusion-reaction"));
}

#[test]
fn test_filter_unknown_category_matches_nothing() {
    let temp_dir = setup_test_dir();
    cli(temp_dir.path())
        .args(["filter", "hematology", "-c", "cardiology"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries"))
        .stderr(predicate::str::contains("Unknown category"));
}

#[test]
fn test_count_by_category() {
    let temp_dir = setup_test_dir();
    cli(temp_dir.path())
        .args(["count", "hematology", "-c", "hemoglobinopathy"])
        .assert()
        .success()
        .stdout("2\n");

    cli(temp_dir.path())
        .args(["count", "hematology", "-c", "not-a-category"])
        .assert()
        .success()
        .stdout("0\n");
}

#[test]
fn test_categories_all_includes_taxonomy() {
    let temp_dir = setup_test_dir();
    cli(temp_dir.path())
        .args(["categories", "public-health", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("global-health"))
        .stdout(predicate::str::contains("biostatistics"));

    cli(temp_dir.path())
        .args(["categories", "public-health"])
        .assert()
        .success()
        .stdout(predicate::str::contains("global-health").not());
}

#[test]
fn test_show_clinical_entry() {
    let temp_dir = setup_test_dir();
    cli(temp_dir.path())
        .args(["show", "hematology", "sickle-cell-disease"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sickle Cell Disease"))
        .stdout(predicate::str::contains("3A51"))
        .stdout(predicate::str::contains("Anemia drepanocítica"));
}

#[test]
fn test_show_glossary_open_fields() {
    let temp_dir = setup_test_dir();
    cli(temp_dir.path())
        .args(["show", "public-health", "sensitivity"])
        .assert()
        .success()
        .stdout(predicate::str::contains("keyPearls"))
        .stdout(predicate::str::contains("TP / (TP + FN)"));
}

#[test]
fn test_show_absent_id_is_not_an_error() {
    let temp_dir = setup_test_dir();
    cli(temp_dir.path())
        .args(["show", "hematology", "no-such-condition"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entry 'no-such-condition'"));
}

#[test]
fn test_show_tiered_default_level() {
    let temp_dir = setup_test_dir();
    cli(temp_dir.path())
        .args(["show", "electrolytes", "hyperkalemia"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Level 2"))
        .stdout(predicate::str::contains("High potassium in the blood."));
}

#[test]
fn test_show_missing_level_is_not_substituted() {
    let temp_dir = setup_test_dir();
    cli(temp_dir.path())
        .args(["show", "electrolytes", "hyperkalemia", "--level", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Level 3 (Nursing) is not available"))
        .stdout(predicate::str::contains("Available levels: 1, 2, 4"))
        .stdout(predicate::str::contains("Depolarization").not());
}

#[test]
fn test_show_out_of_range_level_fails() {
    let temp_dir = setup_test_dir();
    cli(temp_dir.path())
        .args(["show", "electrolytes", "hyperkalemia", "--level", "7"])
        .assert()
        .failure();
}

#[test]
fn test_config_default_level() {
    let temp_dir = setup_test_dir();
    let config_path = temp_dir.path().join("medkb.toml");
    fs::write(&config_path, "[display]\ndefault_level = 4\n").unwrap();

    cli(temp_dir.path())
        .arg("--config")
        .arg(&config_path)
        .args(["show", "electrolytes", "hyperkalemia"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Depolarization"));
}

#[test]
fn test_invalid_config_fails() {
    let temp_dir = setup_test_dir();
    let config_path = temp_dir.path().join("medkb.toml");
    fs::write(&config_path, "[display]\ndefault_level = 9\n").unwrap();

    cli(temp_dir.path())
        .arg("--config")
        .arg(&config_path)
        .arg("stores")
        .assert()
        .failure();
}

#[test]
fn test_unknown_store_fails() {
    let temp_dir = setup_test_dir();
    cli(temp_dir.path())
        .args(["search", "cardiology", "heart"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cardiology"));
}

#[test]
fn test_store_dir_adds_stores() {
    let temp_dir = setup_test_dir();
    write_store(temp_dir.path(), "cardiology.json", CARDIOLOGY_STORE);

    cli(temp_dir.path())
        .args(["search", "cardiology", "irregular"])
        .assert()
        .success()
        .stdout(predicate::str::contains("atrial-fibrillation"));

    cli(temp_dir.path())
        .args(["related", "hematology", "deep-vein-thrombosis"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cardiology/atrial-fibrillation"));
}

#[test]
fn test_no_builtin() {
    let temp_dir = setup_test_dir();
    write_store(temp_dir.path(), "cardiology.json", CARDIOLOGY_STORE);

    cli(temp_dir.path())
        .arg("--no-builtin")
        .arg("stores")
        .assert()
        .success()
        .stdout(predicate::str::contains("cardiology"))
        .stdout(predicate::str::contains("hematology").not());
}

#[test]
fn test_duplicate_store_name_fails() {
    let temp_dir = setup_test_dir();
    let duplicate = CARDIOLOGY_STORE.replace("\"cardiology\"", "\"hematology\"");
    write_store(temp_dir.path(), "hematology.json", &duplicate);

    cli(temp_dir.path()).arg("stores").assert().failure();
}

#[test]
fn test_invalid_store_file_fails() {
    let temp_dir = setup_test_dir();
    let invalid = CARDIOLOGY_STORE.replace("\"category\": \"arrhythmia\"", "\"category\": \"valvular\"");
    write_store(temp_dir.path(), "cardiology.json", &invalid);

    cli(temp_dir.path())
        .arg("stores")
        .assert()
        .failure()
        .stderr(predicate::str::contains("valvular"));
}

#[test]
fn test_related_lists_outgoing_and_incoming() {
    let temp_dir = setup_test_dir();
    cli(temp_dir.path())
        .args(["related", "hematology", "thrombotic-thrombocytopenic-purpura"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hematology/hemolytic-anemia-autoimmune"));

    cli(temp_dir.path())
        .args(["related", "hematology", "hemolytic-anemia-autoimmune"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hematology/thrombotic-thrombocytopenic-purpura"))
        .stdout(predicate::str::contains("electrolytes/hyperkalemia"));
}

#[test]
fn test_lint_builtin_is_clean() {
    let temp_dir = setup_test_dir();
    cli(temp_dir.path())
        .arg("lint")
        .assert()
        .success()
        .stdout(predicate::str::contains("No dangling cross-references"));
}

#[test]
fn test_lint_reports_dangling_reference() {
    let temp_dir = setup_test_dir();
    let dangling = CARDIOLOGY_STORE.replace("deep-vein-thrombosis", "mitral-stenosis");
    write_store(temp_dir.path(), "cardiology.json", &dangling);

    cli(temp_dir.path())
        .arg("lint")
        .assert()
        .failure()
        .stdout(predicate::str::contains("mitral-stenosis"));
}

#[test]
fn test_lint_logs_each_finding_once() {
    let temp_dir = setup_test_dir();
    let dangling = CARDIOLOGY_STORE.replace("deep-vein-thrombosis", "mitral-stenosis");
    write_store(temp_dir.path(), "cardiology.json", &dangling);

    let output = cli(temp_dir.path()).arg("lint").output().unwrap();
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(
        stderr.matches("target not found in any store").count(),
        1,
        "{}",
        stderr
    );
    assert!(!stderr.contains("lint finding(s)"), "{}", stderr);

    // Other commands still lint while loading
    cli(temp_dir.path())
        .arg("stores")
        .assert()
        .success()
        .stderr(predicate::str::contains("1 cross-reference lint finding(s)"));
}

#[test]
fn test_export_csv() {
    let temp_dir = setup_test_dir();
    let out = temp_dir.path().join("exports").join("hematology.csv");

    cli(temp_dir.path())
        .args(["export", "hematology", "--out"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported"));

    let csv_content = fs::read_to_string(&out).expect("Failed to read CSV");
    assert!(csv_content.starts_with("store,id,name,category"));
    assert!(csv_content.contains("sickle-cell-disease"));
}

#[test]
fn test_export_json_reloads_as_store() {
    let temp_dir = setup_test_dir();
    let out = temp_dir.path().join("electrolytes-copy.json");

    cli(temp_dir.path())
        .args(["export", "electrolytes", "--format", "json", "--out"])
        .arg(&out)
        .assert()
        .success();

    let document: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(document["name"], "electrolytes");
    assert_eq!(document["schema"], "tiered");

    // Loading the export next to the built-in store would duplicate its name
    write_store(
        temp_dir.path(),
        "copy.json",
        &fs::read_to_string(&out).unwrap(),
    );
    cli(temp_dir.path())
        .arg("--no-builtin")
        .args(["show", "electrolytes", "glomerulus", "--level", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Kf"));
}
