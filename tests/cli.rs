use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::path::Path;

fn bfq(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("bfquickload").unwrap();
    cmd.env("BFQUICKLOAD_HOME", home).env_remove("RUST_LOG");
    cmd
}

fn json_output(home: &Path, args: &[&str]) -> Value {
    let output = bfq(home).arg("--json").args(args).output().unwrap();
    assert!(
        output.status.success(),
        "command {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn ping_reports_name_and_version() {
    let temp_dir = tempfile::tempdir().unwrap();
    let ping = json_output(temp_dir.path(), &["ping"]);
    assert_eq!(ping["app_name"], "BFQuickLoad");
    assert_eq!(ping["version"], env!("CARGO_PKG_VERSION"));
}

#[test]
fn catalog_of_empty_store_is_empty() {
    let temp_dir = tempfile::tempdir().unwrap();
    let catalog = json_output(temp_dir.path(), &["catalog"]);
    assert_eq!(catalog["presets_metadata"], Value::Array(vec![]));
    assert_eq!(catalog["authors"], Value::Array(vec![]));
    assert_eq!(catalog["tags"], Value::Array(vec![]));
}

#[test]
fn create_then_catalog() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();

    let first = json_output(
        home,
        &["presets", "create", "--name", "A", "--author", "a", "-t", "x", "-t", "y"],
    );
    assert_eq!(first["id"], 1);
    json_output(
        home,
        &["presets", "create", "--name", "B", "--author", "b", "-t", "y", "-t", "z"],
    );

    let catalog = json_output(home, &["catalog"]);
    assert_eq!(catalog["authors"], serde_json::json!(["a", "b"]));
    assert_eq!(catalog["tags"], serde_json::json!(["x", "y", "z"]));
    assert_eq!(catalog["presets_metadata"][0]["id"], 1);
    assert_eq!(catalog["presets_metadata"][1]["id"], 2);
    assert!(catalog["presets_metadata"][0].get("content").is_none());
}

#[test]
fn created_preset_gets_defaults() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();

    let created = json_output(home, &["presets", "create"]);
    let fetched = json_output(home, &["presets", "get", "1"]);
    assert_eq!(created, fetched);
    assert_eq!(fetched["author"], "unknown");
    assert_eq!(fetched["tags"], Value::Array(vec![]));
    assert_eq!(fetched["name"], "");
    assert_eq!(fetched["content"], "");
}

#[test]
fn content_can_come_from_a_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();
    let content_file = home.join("aux.txt");
    std::fs::write(&content_file, "aux 0 0 0 1700 2100 0 0\naux 1 1 3 900 1700 0 0").unwrap();

    let created = json_output(
        home,
        &[
            "presets",
            "create",
            "--name",
            "Tiny Hoop Aux Mixes",
            "--content-file",
            content_file.to_str().unwrap(),
        ],
    );
    assert_eq!(
        created["content"],
        "aux 0 0 0 1700 2100 0 0\naux 1 1 3 900 1700 0 0"
    );
}

#[test]
fn missing_preset_fails_with_not_found() {
    let temp_dir = tempfile::tempdir().unwrap();
    bfq(temp_dir.path())
        .args(["presets", "get", "-1"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Preset not found: -1"));
}

#[test]
fn negative_limit_is_rejected() {
    let temp_dir = tempfile::tempdir().unwrap();
    bfq(temp_dir.path())
        .args(["presets", "list", "--limit", "-2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid input"));
}

#[test]
fn list_limit_caps_output() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();
    json_output(home, &["presets", "create", "--name", "one"]);
    json_output(home, &["presets", "create", "--name", "two"]);

    assert_eq!(json_output(home, &["presets", "list", "--limit", "0"]), Value::Array(vec![]));
    let one = json_output(home, &["presets", "list", "--limit", "1"]);
    assert_eq!(one.as_array().unwrap().len(), 1);
    assert_eq!(one[0]["name"], "one");
    let all = json_output(home, &["presets", "list"]);
    assert_eq!(all.as_array().unwrap().len(), 2);
}

#[test]
fn search_filters_round_trip() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();

    let created = json_output(
        home,
        &[
            "filters", "create", "--name", "Whoops", "--query", "tinywhoop", "--author", "Luki",
            "--tag", "throttle",
        ],
    );
    assert_eq!(created["id"], 1);
    assert_eq!(json_output(home, &["filters", "get", "1"]), created);
    assert_eq!(json_output(home, &["filters", "list"]), Value::Array(vec![created]));

    bfq(home)
        .args(["filters", "get", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Search filter not found: 2"));
}

#[test]
fn seed_fills_the_catalog() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();

    bfq(home)
        .arg("seed")
        .assert()
        .success()
        .stdout(predicate::str::contains("Seeded"))
        .stdout(predicate::str::contains("Dump Diff"));

    let catalog = json_output(home, &["catalog"]);
    assert_eq!(catalog["authors"], serde_json::json!(["BFQuickLoad", "Luki"]));
    let tags = catalog["tags"].as_array().unwrap();
    assert!(tags.contains(&Value::from("settings")));
}

#[test]
fn config_list_limit_applies_to_listing() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();

    bfq(home)
        .args(["config", "list-limit", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("list-limit set to 1"));
    json_output(home, &["presets", "create", "--name", "one"]);
    json_output(home, &["presets", "create", "--name", "two"]);

    assert_eq!(json_output(home, &["presets", "list"]).as_array().unwrap().len(), 1);
    assert_eq!(
        json_output(home, &["catalog"])["presets_metadata"]
            .as_array()
            .unwrap()
            .len(),
        1
    );
}

#[test]
fn leftover_lock_file_does_not_block_writes() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();
    let db = home.join("db");
    std::fs::create_dir_all(&db).unwrap();
    std::fs::write(db.join(".lock"), "").unwrap();

    bfq(home)
        .args(["presets", "create", "--name", "after crash"])
        .assert()
        .success();

    let presets = json_output(home, &["presets", "list"]);
    assert_eq!(presets[0]["name"], "after crash");
    assert_eq!(presets[0]["id"], 1);
}

#[test]
fn home_flag_overrides_environment() {
    let env_home = tempfile::tempdir().unwrap();
    let flag_home = tempfile::tempdir().unwrap();

    bfq(env_home.path())
        .args(["--home", flag_home.path().to_str().unwrap()])
        .args(["presets", "create", "--name", "flagged"])
        .assert()
        .success();

    assert!(flag_home.path().join("db").join("presets.json").exists());
    assert!(!env_home.path().join("db").exists());
}

#[test]
fn text_output_lists_presets() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();

    bfq(home)
        .args(["presets", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No presets found."));

    json_output(home, &["presets", "create", "--name", "Save Settings", "-t", "action"]);
    bfq(home)
        .args(["presets", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Save Settings").and(predicate::str::contains("action")));
}
