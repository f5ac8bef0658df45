use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{}')", table))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Create the `trips` table (modern schema, including `route_source`).
fn create_trips_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS trips (
            id                 INTEGER PRIMARY KEY AUTOINCREMENT,
            current_location   TEXT NOT NULL,
            pickup_location    TEXT NOT NULL,
            dropoff_location   TEXT NOT NULL,
            current_cycle_used REAL NOT NULL DEFAULT 0,
            total_distance     REAL,
            total_duration     REAL,
            route_source       TEXT CHECK(route_source IN ('computed','fallback','manual')),
            created_at         TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Create the `daily_logs` table. Rows go away with their trip.
fn create_daily_logs_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS daily_logs (
            id             INTEGER PRIMARY KEY AUTOINCREMENT,
            trip_id        INTEGER NOT NULL REFERENCES trips(id) ON DELETE CASCADE,
            day_number     INTEGER NOT NULL CHECK(day_number >= 1),
            date           TEXT NOT NULL,
            driving_hours  REAL NOT NULL DEFAULT 0,
            on_duty_hours  REAL NOT NULL DEFAULT 0,
            off_duty_hours REAL NOT NULL DEFAULT 0,
            fuel_stops     INTEGER NOT NULL DEFAULT 0,
            notes          TEXT NOT NULL DEFAULT '',
            created_at     TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_daily_logs_trip_day ON daily_logs(trip_id, day_number);
        CREATE INDEX IF NOT EXISTS idx_daily_logs_date ON daily_logs(date);
        "#,
    )?;
    Ok(())
}

/// Databases created before route sources were tracked lack the column;
/// their trips keep a NULL source.
fn migrate_add_route_source(conn: &Connection) -> Result<()> {
    let version = "20250602_0002_add_route_source";

    if migration_applied(conn, version)? {
        return Ok(());
    }

    if !table_has_column(conn, "trips", "route_source")? {
        conn.execute(
            "ALTER TABLE trips ADD COLUMN route_source TEXT
             CHECK(route_source IN ('computed','fallback','manual'));",
            [],
        )?;
        success(format!(
            "Migration applied: {} → added 'route_source' to trips table",
            version
        ));
    }

    mark_applied(conn, version, "Added route_source to trips")?;
    Ok(())
}

/// Older `daily_logs` tables lack `fuel_stops`; existing rows keep 0.
fn migrate_add_fuel_stops(conn: &Connection) -> Result<()> {
    let version = "20250602_0003_add_fuel_stops";

    if migration_applied(conn, version)? {
        return Ok(());
    }

    if !table_has_column(conn, "daily_logs", "fuel_stops")? {
        conn.execute(
            "ALTER TABLE daily_logs ADD COLUMN fuel_stops INTEGER NOT NULL DEFAULT 0;",
            [],
        )?;
        success(format!(
            "Migration applied: {} → added 'fuel_stops' to daily_logs table",
            version
        ));
    }

    mark_applied(conn, version, "Added fuel_stops to daily_logs")?;
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Base tables
    if !table_exists(conn, "trips")? {
        create_trips_table(conn)?;
        success("Created trips table.");
    }

    if !table_exists(conn, "daily_logs")? {
        create_daily_logs_table(conn)?;
        success("Created daily_logs table.");
    }

    // 3) Column upgrades for older databases
    migrate_add_route_source(conn)?;
    migrate_add_fuel_stops(conn)?;

    Ok(())
}
