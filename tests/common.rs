#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn dsp() -> Command {
    cargo_bin_cmd!("devsprint")
}

/// Create a unique test data-store path inside the system temp dir and
/// remove any existing file
pub fn setup_test_store(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_devsprint.json", name));
    let store_path = path.to_string_lossy().to_string();
    fs::remove_file(&store_path).ok();
    store_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize a store and add a sprint plus two daily logs useful for many
/// tests. The sprint spans 2024-01-01..2024-01-11 and gets id "1".
pub fn init_store_with_data(store_path: &str) {
    dsp()
        .args(["--data", store_path, "--test", "init"])
        .assert()
        .success();

    dsp()
        .args([
            "--data",
            store_path,
            "sprint",
            "add",
            "Auth Sprint",
            "--goal",
            "Ship the login flow",
            "--start",
            "2024-01-01",
            "--end",
            "2024-01-11",
        ])
        .assert()
        .success();

    dsp()
        .args([
            "--data",
            store_path,
            "log",
            "add",
            "--sprint",
            "1",
            "--date",
            "2024-01-03",
            "--task",
            "wired OAuth callbacks",
            "--task",
            "added session storage",
            "--blocker",
            "staging env down",
            "--reflections",
            "Solid progress despite the staging outage.",
        ])
        .assert()
        .success();

    dsp()
        .args([
            "--data",
            store_path,
            "log",
            "add",
            "--sprint",
            "1",
            "--date",
            "2024-01-05",
            "--task",
            "token refresh handling",
            "--reflections",
            "Shorter day, but the refresh path works.",
        ])
        .assert()
        .success();
}
