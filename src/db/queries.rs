use crate::errors::{AppError, AppResult};
use crate::models::daily_log::DailyLogEntry;
use crate::models::route_source::RouteSource;
use crate::models::trip::{NewTrip, Trip};
use chrono::{DateTime, Local, NaiveDate};
use rusqlite::params;
use rusqlite::{Connection, OptionalExtension, Result, Row};

const TRIP_COLUMNS: &str = "id, current_location, pickup_location, dropoff_location,
     current_cycle_used, total_distance, total_duration, route_source, created_at";

const LOG_COLUMNS: &str = "trip_id, day_number, date, driving_hours, on_duty_hours,
     off_duty_hours, fuel_stops, notes";

fn conversion_error(col: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(col, rusqlite::types::Type::Text, Box::new(err))
}

// ---------------------------
// Trips
// ---------------------------

pub fn insert_trip(conn: &Connection, trip: &NewTrip) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO trips (current_location, pickup_location, dropoff_location,
                            current_cycle_used, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            trip.current_location,
            trip.pickup_location,
            trip.dropoff_location,
            trip.current_cycle_used,
            trip.created_at.to_rfc3339(),
        ],
    )?;

    Ok(conn.last_insert_rowid())
}

/// Store the resolved route totals and where they came from.
pub fn update_trip_route(
    conn: &Connection,
    trip_id: i64,
    distance: f64,
    duration: f64,
    source: RouteSource,
) -> AppResult<()> {
    let changed = conn.execute(
        "UPDATE trips
         SET total_distance = ?1, total_duration = ?2, route_source = ?3
         WHERE id = ?4",
        params![distance, duration, source.to_db_str(), trip_id],
    )?;

    if changed == 0 {
        return Err(AppError::TripNotFound(trip_id));
    }
    Ok(())
}

pub fn load_trip(conn: &Connection, trip_id: i64) -> AppResult<Trip> {
    let sql = format!("SELECT {TRIP_COLUMNS} FROM trips WHERE id = ?1");

    conn.query_row(&sql, [trip_id], map_trip_row)
        .optional()?
        .ok_or(AppError::TripNotFound(trip_id))
}

pub fn load_trips(conn: &Connection) -> AppResult<Vec<Trip>> {
    let sql = format!("SELECT {TRIP_COLUMNS} FROM trips ORDER BY id ASC");
    let mut stmt = conn.prepare(&sql)?;

    let rows = stmt.query_map([], map_trip_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Delete a trip; its daily logs follow through ON DELETE CASCADE.
pub fn delete_trip(conn: &Connection, trip_id: i64) -> AppResult<()> {
    let changed = conn.execute("DELETE FROM trips WHERE id = ?1", [trip_id])?;

    if changed == 0 {
        return Err(AppError::TripNotFound(trip_id));
    }
    Ok(())
}

pub fn map_trip_row(row: &Row) -> Result<Trip> {
    let created_str: String = row.get("created_at")?;
    let created_at = DateTime::parse_from_rfc3339(&created_str)
        .map_err(|_| conversion_error(8, AppError::InvalidDate(created_str.clone())))?;

    let source_str: Option<String> = row.get("route_source")?;
    let route_source = match source_str {
        None => None,
        Some(s) => Some(RouteSource::from_db_str(&s).ok_or_else(|| {
            conversion_error(7, AppError::Other(format!("Invalid route source: {}", s)))
        })?),
    };

    Ok(Trip {
        id: row.get("id")?,
        current_location: row.get("current_location")?,
        pickup_location: row.get("pickup_location")?,
        dropoff_location: row.get("dropoff_location")?,
        current_cycle_used: row.get("current_cycle_used")?,
        total_distance: row.get("total_distance")?,
        total_duration: row.get("total_duration")?,
        route_source,
        created_at,
    })
}

// ---------------------------
// Daily logs
// ---------------------------

pub fn insert_daily_log(conn: &Connection, log: &DailyLogEntry) -> Result<i64> {
    let mut stmt = conn.prepare_cached(
        "INSERT INTO daily_logs (trip_id, day_number, date, driving_hours, on_duty_hours,
                                 off_duty_hours, fuel_stops, notes, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
    )?;

    stmt.execute(params![
        log.trip_id,
        log.day_number,
        log.date_str(),
        log.driving_hours,
        log.on_duty_hours,
        log.off_duty_hours,
        log.fuel_stops,
        log.notes,
        Local::now().to_rfc3339(),
    ])?;

    Ok(conn.last_insert_rowid())
}

pub fn load_daily_logs(conn: &Connection, trip_id: i64) -> AppResult<Vec<DailyLogEntry>> {
    let sql = format!(
        "SELECT {LOG_COLUMNS} FROM daily_logs
         WHERE trip_id = ?1
         ORDER BY day_number ASC, id ASC"
    );
    let mut stmt = conn.prepare(&sql)?;

    let rows = stmt.query_map([trip_id], map_log_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Logs filtered by trip and/or an inclusive date range, ordered for export.
pub fn load_daily_logs_filtered(
    conn: &Connection,
    trip_id: Option<i64>,
    bounds: Option<(NaiveDate, NaiveDate)>,
) -> AppResult<Vec<DailyLogEntry>> {
    let (start, end) = match bounds {
        Some((s, e)) => (
            Some(s.format("%Y-%m-%d").to_string()),
            Some(e.format("%Y-%m-%d").to_string()),
        ),
        None => (None, None),
    };

    let sql = format!(
        "SELECT {LOG_COLUMNS} FROM daily_logs
         WHERE (?1 IS NULL OR trip_id = ?1)
           AND (?2 IS NULL OR date BETWEEN ?2 AND ?3)
         ORDER BY trip_id ASC, day_number ASC, id ASC"
    );
    let mut stmt = conn.prepare(&sql)?;

    let rows = stmt.query_map(params![trip_id, start, end], map_log_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn count_daily_logs(conn: &Connection, trip_id: i64) -> AppResult<i64> {
    let n = conn.query_row(
        "SELECT COUNT(*) FROM daily_logs WHERE trip_id = ?1",
        [trip_id],
        |row| row.get(0),
    )?;
    Ok(n)
}

pub fn map_log_row(row: &Row) -> Result<DailyLogEntry> {
    let date_str: String = row.get("date")?;
    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
        .map_err(|_| conversion_error(2, AppError::InvalidDate(date_str.clone())))?;

    Ok(DailyLogEntry {
        trip_id: row.get("trip_id")?,
        day_number: row.get("day_number")?,
        date,
        driving_hours: row.get("driving_hours")?,
        on_duty_hours: row.get("on_duty_hours")?,
        off_duty_hours: row.get("off_duty_hours")?,
        fuel_stops: row.get("fuel_stops")?,
        notes: row.get("notes")?,
    })
}
