use crate::cli::commands::plan::print_planned;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::plan::PlanLogic;
use crate::db::initialize::open_db;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Replan { trip } = cmd {
        let mut pool = open_db(&cfg.database)?;
        let planned = PlanLogic::replan(&mut pool, *trip)?;

        print_planned(&planned, cfg);
        success(format!(
            "Trip #{} planned again: {} daily logs added.",
            planned.trip.id,
            planned.logs.len()
        ));
        info("Previously stored daily logs of this trip were kept.");
    }

    Ok(())
}
