use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{eld, init_db, init_db_with_trip, setup_test_db, temp_out};

#[test]
fn test_init_creates_schema() {
    let db_path = setup_test_db("cli_init");

    eld()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    let tables: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master
             WHERE type = 'table' AND name IN ('trips', 'daily_logs', 'log')",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(tables, 3);
}

#[test]
fn test_plan_with_manual_figures() {
    let db_path = setup_test_db("cli_plan_manual");
    init_db(&db_path);

    eld()
        .args([
            "--db",
            &db_path,
            "plan",
            "Chicago, IL",
            "Denver, CO",
            "Los Angeles, CA",
            "--distance",
            "2800",
            "--duration",
            "45",
        ])
        .assert()
        .success()
        .stdout(contains("Trip #1"))
        .stdout(contains("manual"))
        .stdout(contains("Pickup location loading time (1h)"))
        .stdout(contains("Dropoff location unloading time (1h)"))
        .stdout(contains("5 daily logs"))
        .stdout(contains("fallback").not());
}

#[test]
fn test_plan_without_api_key_uses_fallback() {
    let db_path = setup_test_db("cli_plan_fallback");
    init_db(&db_path);

    eld()
        .args([
            "--db",
            &db_path,
            "plan",
            "Chicago, IL",
            "Denver, CO",
            "Los Angeles, CA",
            "--cycle-used",
            "10",
        ])
        .assert()
        .success()
        .stdout(contains("fallback"))
        .stdout(contains("OPENROUTE_SERVICE_API_KEY"));
}

#[test]
fn test_plan_rejects_cycle_out_of_range() {
    let db_path = setup_test_db("cli_plan_bad_cycle");
    init_db(&db_path);

    eld()
        .args([
            "--db",
            &db_path,
            "plan",
            "A",
            "B",
            "C",
            "--cycle-used",
            "75",
            "--distance",
            "100",
            "--duration",
            "2",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid cycle hours"));
}

#[test]
fn test_distance_requires_duration() {
    let db_path = setup_test_db("cli_plan_half_manual");
    init_db(&db_path);

    eld()
        .args(["--db", &db_path, "plan", "A", "B", "C", "--distance", "100"])
        .assert()
        .failure();
}

#[test]
fn test_list_trips_and_trip_logs() {
    let db_path = setup_test_db("cli_list");
    init_db_with_trip(&db_path);

    eld()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Chicago, IL"))
        .stdout(contains("Los Angeles, CA"));

    eld()
        .args(["--db", &db_path, "list", "--trip", "1"])
        .assert()
        .success()
        .stdout(contains("Regular driving day"))
        .stdout(contains("9:00"));

    eld()
        .args(["--db", &db_path, "list", "--trip", "1", "--details"])
        .assert()
        .success()
        .stdout(contains("DRIVER'S DAILY LOG"));
}

#[test]
fn test_list_unknown_trip_fails() {
    let db_path = setup_test_db("cli_list_unknown");
    init_db(&db_path);

    eld()
        .args(["--db", &db_path, "list", "--trip", "42"])
        .assert()
        .failure()
        .stderr(contains("Trip 42 not found"));
}

#[test]
fn test_replan_appends_logs() {
    let db_path = setup_test_db("cli_replan");
    init_db_with_trip(&db_path);

    eld()
        .args(["--db", &db_path, "replan", "1"])
        .assert()
        .success()
        .stdout(contains("5 daily logs added"));

    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    let n: i64 = conn
        .query_row("SELECT COUNT(*) FROM daily_logs WHERE trip_id = 1", [], |row| {
            row.get(0)
        })
        .unwrap();
    assert_eq!(n, 10);
}

#[test]
fn test_del_removes_trip_and_logs() {
    let db_path = setup_test_db("cli_del");
    init_db_with_trip(&db_path);

    eld()
        .args(["--db", &db_path, "del", "1", "--yes"])
        .assert()
        .success()
        .stdout(contains("Trip #1 deleted"));

    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    let n: i64 = conn
        .query_row("SELECT COUNT(*) FROM daily_logs", [], |row| row.get(0))
        .unwrap();
    assert_eq!(n, 0);

    eld()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("No trips stored yet"));
}

#[test]
fn test_del_without_confirmation_keeps_trip() {
    let db_path = setup_test_db("cli_del_cancel");
    init_db_with_trip(&db_path);

    eld()
        .args(["--db", &db_path, "del", "1"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Deletion cancelled"));

    eld()
        .args(["--db", &db_path, "list", "--trip", "1"])
        .assert()
        .success();
}

#[test]
fn test_log_print_records_operations() {
    let db_path = setup_test_db("cli_log");
    init_db_with_trip(&db_path);

    eld()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("trip #1"))
        .stdout(contains("5 daily logs generated"));
}

#[test]
fn test_db_info_and_check() {
    let db_path = setup_test_db("cli_db_info");
    init_db_with_trip(&db_path);

    eld()
        .args(["--db", &db_path, "db", "--info", "--check"])
        .assert()
        .success()
        .stdout(contains("Trips:"))
        .stdout(contains("Integrity check passed"));
}

#[test]
fn test_export_csv_and_json() {
    let db_path = setup_test_db("cli_export");
    init_db_with_trip(&db_path);

    let csv_out = temp_out("cli_export", "csv");
    eld()
        .args(["--db", &db_path, "export", "--format", "csv", "--file", &csv_out])
        .assert()
        .success();

    let content = fs::read_to_string(&csv_out).expect("read exported csv");
    assert!(content.contains("driving_hours"));
    assert_eq!(content.lines().count(), 6);

    let json_out = temp_out("cli_export", "json");
    eld()
        .args([
            "--db", &db_path, "export", "--format", "json", "--file", &json_out, "--trip", "1",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&json_out).expect("read exported json");
    let rows: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    assert_eq!(rows.as_array().map(|a| a.len()), Some(5));
}

#[test]
fn test_export_xlsx_and_relative_path_rejected() {
    let db_path = setup_test_db("cli_export_xlsx");
    init_db_with_trip(&db_path);

    let out = temp_out("cli_export_xlsx", "xlsx");
    eld()
        .args(["--db", &db_path, "export", "--format", "xlsx", "--file", &out])
        .assert()
        .success();
    assert!(fs::metadata(&out).map(|m| m.len() > 0).unwrap_or(false));

    eld()
        .args([
            "--db",
            &db_path,
            "export",
            "--format",
            "csv",
            "--file",
            "relative.csv",
        ])
        .assert()
        .failure();
}

#[test]
fn test_plan_rejects_oversized_manual_figures() {
    let db_path = setup_test_db("cli_plan_oversized");
    init_db(&db_path);

    eld()
        .args([
            "--db",
            &db_path,
            "plan",
            "A",
            "B",
            "C",
            "--distance",
            "1",
            "--duration",
            "1e12",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid route figures"));

    eld()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("No trips stored yet"));
}

#[test]
fn test_list_marks_fallback_trips() {
    let db_path = setup_test_db("cli_list_fallback");
    init_db(&db_path);

    eld()
        .args(["--db", &db_path, "plan", "Chicago, IL", "Denver, CO", "Los Angeles, CA"])
        .assert()
        .success();

    eld()
        .args(["--db", &db_path, "list", "--trip", "1"])
        .assert()
        .success()
        .stdout(contains("Totals are fallback estimates"));
}

#[test]
fn test_manual_trip_not_marked_as_fallback() {
    let db_path = setup_test_db("cli_list_manual");
    init_db_with_trip(&db_path);

    eld()
        .args(["--db", &db_path, "list", "--trip", "1"])
        .assert()
        .success()
        .stdout(contains("Totals are fallback estimates").not());
}
