use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::plan::{PlanLogic, PlannedTrip, RouteRequest};
use crate::core::route::RouteSummary;
use crate::db::initialize::open_db;
use crate::errors::AppResult;
use crate::models::trip::NewTrip;
use crate::ui::messages::{success, warning};
use crate::ui::report::{print_daily_table, print_trip_overview};

/// Handle the `plan` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Plan {
        current,
        pickup,
        dropoff,
        cycle_used,
        distance,
        duration,
    } = cmd
    {
        let cycle_used = cycle_used.unwrap_or(cfg.default_cycle_used);
        PlanLogic::validate_cycle_used(cycle_used)?;

        let request = match (distance, duration) {
            (Some(d), Some(h)) => RouteRequest::Manual(RouteSummary {
                distance_miles: *d,
                duration_hours: *h,
            }),
            _ => RouteRequest::Provider,
        };

        let mut pool = open_db(&cfg.database)?;
        let new_trip = NewTrip::now(current, pickup, dropoff, cycle_used);
        let planned = PlanLogic::create_trip(&mut pool, cfg, &new_trip, request)?;

        print_planned(&planned, cfg);
        success(format!(
            "Trip #{} planned: {} daily logs.",
            planned.trip.id,
            planned.logs.len()
        ));
    }

    Ok(())
}

/// Overview, fallback notice and daily table of a planning run.
pub fn print_planned(planned: &PlannedTrip, cfg: &Config) {
    print_trip_overview(&planned.trip, planned.logs.len());

    if let Some(reason) = &planned.fallback_reason {
        warning(format!(
            "Route figures are fallback estimates, not a computed route ({}).",
            reason
        ));
    }

    if !planned.logs.is_empty() {
        print_daily_table(&planned.logs, &cfg.separator_char);
    }
}
