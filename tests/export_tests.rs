use predicates::str::contains;
use std::fs;

mod common;
use common::{dsp, init_store_with_data, setup_test_store, temp_out};

#[test]
fn test_export_markdown_document() {
    let store = setup_test_store("export_md");
    init_store_with_data(&store);
    let out = temp_out("export_md", "md");

    dsp()
        .args(["--data", &store, "export", "--file", &out])
        .assert()
        .success()
        .stdout(contains("Markdown export completed"));

    let md = fs::read_to_string(&out).unwrap();
    assert!(md.starts_with("# Sprint Logs Export\n"));
    assert!(md.contains("## Sprint: Auth Sprint"));
    assert!(md.contains("Goal: Ship the login flow"));
    assert!(md.contains("Duration: 2024-01-01 to 2024-01-11"));
    assert!(md.contains("### 2024-01-03"));
    assert!(md.contains("- wired OAuth callbacks"));
    assert!(md.contains("- staging env down"));
    // the second log has no blockers, so the fallback line must appear
    assert!(md.contains("- No blockers reported"));
    // ascending date order within the sprint
    let d1 = md.find("### 2024-01-03").unwrap();
    let d2 = md.find("### 2024-01-05").unwrap();
    assert!(d1 < d2);
}

#[test]
fn test_export_json_rows() {
    let store = setup_test_store("export_json");
    init_store_with_data(&store);
    let out = temp_out("export_json", "json");

    dsp()
        .args([
            "--data", &store, "export", "--format", "json", "--file", &out,
        ])
        .assert()
        .success()
        .stdout(contains("JSON export completed"));

    let rows: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["date"], "2024-01-03");
    assert_eq!(rows[0]["sprint_name"], "Auth Sprint");
    assert_eq!(
        rows[0]["tasks_completed"],
        "wired OAuth callbacks; added session storage"
    );
    assert_eq!(rows[1]["blockers"], "");
}

#[test]
fn test_export_csv_rows() {
    let store = setup_test_store("export_csv");
    init_store_with_data(&store);
    let out = temp_out("export_csv", "csv");

    dsp()
        .args([
            "--data", &store, "export", "--format", "csv", "--file", &out,
        ])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let csv_content = fs::read_to_string(&out).unwrap();
    let mut lines = csv_content.lines();
    let header = lines.next().unwrap();
    assert!(header.contains("sprint_name"));
    assert!(header.contains("tasks_completed"));
    assert_eq!(lines.count(), 2);
    assert!(csv_content.contains("2024-01-05"));
}

#[test]
fn test_export_refuses_relative_path() {
    let store = setup_test_store("export_relative");
    init_store_with_data(&store);

    dsp()
        .args(["--data", &store, "export", "--file", "relative.md"])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_export_force_overwrites_existing_file() {
    let store = setup_test_store("export_force");
    init_store_with_data(&store);
    let out = temp_out("export_force", "md");
    fs::write(&out, "old content").unwrap();

    dsp()
        .args(["--data", &store, "export", "--file", &out, "--force"])
        .assert()
        .success();

    let md = fs::read_to_string(&out).unwrap();
    assert!(md.starts_with("# Sprint Logs Export"));
}

#[test]
fn test_export_empty_store_warns_and_writes_nothing() {
    let store = setup_test_store("export_empty");
    dsp()
        .args(["--data", &store, "--test", "init"])
        .assert()
        .success();
    let out = temp_out("export_empty", "md");

    dsp()
        .args(["--data", &store, "export", "--file", &out])
        .assert()
        .success()
        .stdout(contains("No sprints or daily logs to export"));

    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn test_backup_copies_data_store() {
    let store = setup_test_store("backup_copy");
    init_store_with_data(&store);
    let out = temp_out("backup_copy", "json");

    dsp()
        .args(["--data", &store, "backup", "--file", &out])
        .assert()
        .success()
        .stdout(contains("Backup created"));

    assert_eq!(
        fs::read_to_string(&out).unwrap(),
        fs::read_to_string(&store).unwrap()
    );
}

#[test]
fn test_backup_compress_leaves_only_archive() {
    let store = setup_test_store("backup_zip");
    init_store_with_data(&store);
    let out = temp_out("backup_zip", "json");
    let archive = out.replace(".json", ".zip");
    fs::remove_file(&archive).ok();

    dsp()
        .args(["--data", &store, "backup", "--file", &out, "--compress"])
        .assert()
        .success()
        .stdout(contains("Compressed"));

    assert!(std::path::Path::new(&archive).exists());
    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn test_backup_missing_store_fails() {
    let store = setup_test_store("backup_missing");
    let out = temp_out("backup_missing", "json");

    dsp()
        .args(["--data", &store, "backup", "--file", &out])
        .assert()
        .failure()
        .stderr(contains("data store not found"));
}
