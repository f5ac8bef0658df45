use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::plan::PlanLogic;
use crate::db::initialize::open_db;
use crate::db::queries::{count_daily_logs, load_trip};
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { trip, yes } = cmd {
        let mut pool = open_db(&cfg.database)?;

        let t = load_trip(&pool.conn, *trip)?;
        let logs = count_daily_logs(&pool.conn, *trip)?;

        if !*yes
            && !ask_confirmation(&format!(
                "Delete trip #{} ({}) and its {} daily logs?",
                t.id,
                t.label(),
                logs
            ))
        {
            info("Deletion cancelled.");
            return Ok(());
        }

        PlanLogic::delete_trip(&mut pool, *trip)?;
        success(format!("Trip #{} deleted ({} daily logs removed).", trip, logs));
    }

    Ok(())
}
