use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::initialize::open_db;
use crate::db::queries::{count_daily_logs, load_daily_logs, load_trip, load_trips};
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::ui::report::{print_daily_table, print_log_sheet, print_trip_list, print_trip_overview};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { trip, details } = cmd {
        let pool = open_db(&cfg.database)?;

        match trip {
            Some(id) => {
                let trip = load_trip(&pool.conn, *id)?;
                let logs = load_daily_logs(&pool.conn, *id)?;

                print_trip_overview(&trip, logs.len());

                if logs.is_empty() {
                    info(format!("No daily logs stored for trip #{}.", id));
                    return Ok(());
                }

                if *details {
                    for log in &logs {
                        print_log_sheet(&trip, log);
                    }
                } else {
                    print_daily_table(&logs, &cfg.separator_char);
                }
            }
            None => {
                let trips = load_trips(&pool.conn)?;
                if trips.is_empty() {
                    info("No trips stored yet.");
                    return Ok(());
                }

                let mut rows = Vec::with_capacity(trips.len());
                for t in trips {
                    let n = count_daily_logs(&pool.conn, t.id)?;
                    rows.push((t, n));
                }
                print_trip_list(&rows, &cfg.separator_char);
            }
        }
    }

    Ok(())
}
