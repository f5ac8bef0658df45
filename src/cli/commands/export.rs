use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::initialize::open_db;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        trip,
        range,
        force,
    } = cmd
    {
        let mut pool = open_db(&cfg.database)?;
        let rows = ExportLogic::export(&mut pool, *format, file, *trip, range, *force)?;
        if rows > 0 {
            info(format!("{} daily logs exported.", rows));
        }
    }
    Ok(())
}
