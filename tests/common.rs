#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub const API_KEY_ENV: &str = "OPENROUTE_SERVICE_API_KEY";

/// Binary under test, isolated from the user's home and routing key.
pub fn eld() -> Command {
    let mut cmd = cargo_bin_cmd!("eldplanner");
    let home = test_home();
    cmd.env("HOME", &home)
        .env("USERPROFILE", &home)
        .env_remove(API_KEY_ENV);
    cmd
}

/// Throwaway home directory shared by CLI tests (config dir lands here).
pub fn test_home() -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push("eldplanner_test_home");
    fs::create_dir_all(&path).ok();
    path
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_eldplanner.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn init_db(db_path: &str) {
    eld()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Initialize DB and plan one trip with manual figures (2800 mi, 45 h, 5 days).
pub fn init_db_with_trip(db_path: &str) {
    init_db(db_path);

    eld()
        .args([
            "--db",
            db_path,
            "plan",
            "Chicago, IL",
            "Denver, CO",
            "Los Angeles, CA",
            "--cycle-used",
            "0",
            "--distance",
            "2800",
            "--duration",
            "45",
        ])
        .assert()
        .success();
}
