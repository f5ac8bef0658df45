use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::open_db;
use crate::db::log::audit_or_warn;
use crate::errors::AppResult;
use crate::ui::messages::{header, info, success};

/// Handle the `init` command
///
/// Creates the config directory and file (skipped in test mode), then the
/// SQLite database with all pending migrations applied.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.clone(), cli.test)?;
    let db_path = cfg.database.clone();

    header("Initializing eldplanner");
    info(format!("Config file : {}", Config::config_file().display()));
    info(format!("Database    : {}", db_path));

    let pool = open_db(&db_path)?;

    audit_or_warn(
        &pool.conn,
        "init",
        "database",
        &format!("Database initialized at {}", db_path),
    );

    success(format!("Database initialized at {}", db_path));
    Ok(())
}
