use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) COUNTS
    //
    let trips: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM trips", [], |row| row.get(0))?;
    let logs: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM daily_logs", [], |row| row.get(0))?;
    let fallback: i64 = pool.conn.query_row(
        "SELECT COUNT(*) FROM trips WHERE route_source = 'fallback'",
        [],
        |row| row.get(0),
    )?;

    println!("{}• Trips:{} {}{}{}", CYAN, RESET, GREEN, trips, RESET);
    println!("{}• Daily logs:{} {}{}{}", CYAN, RESET, GREEN, logs, RESET);
    println!(
        "{}• Trips on fallback route:{} {}{}{}",
        CYAN, RESET, YELLOW, fallback, RESET
    );

    //
    // 3) LOG DATE RANGE
    //
    let (first_date, last_date): (Option<String>, Option<String>) = pool
        .conn
        .query_row("SELECT MIN(date), MAX(date) FROM daily_logs", [], |row| {
            Ok((row.get(0)?, row.get(1)?))
        })
        .optional()?
        .unwrap_or((None, None));

    let fmt_first = first_date.unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last_date.unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Log date range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    //
    // 4) AVERAGE DAYS/TRIP
    //
    if trips > 0 {
        let avg = logs as f64 / trips as f64;
        println!("{}• Average days/trip:{} {:.2}", CYAN, RESET, avg);
    }

    println!();
    Ok(())
}
