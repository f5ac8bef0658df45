use crate::config::Config;
use crate::core::planner::{self, CYCLE_HOURS, MAX_PLAN_DAYS};
use crate::core::route::{
    self, FallbackPolicy, OpenRouteService, RouteOutcome, RouteSummary, TripStops,
};
use crate::db::log::audit_or_warn;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::daily_log::DailyLogEntry;
use crate::models::route_source::RouteSource;
use crate::models::trip::{NewTrip, Trip};
use crate::ui::messages::warning;
use rusqlite::Connection;

/// Upper bounds for route totals; anything above is a typo, not a trip.
pub const MAX_TRIP_DISTANCE_MILES: f64 = 25_000.0;
pub const MAX_TRIP_DURATION_HOURS: f64 = 1_000.0;

/// How the trip's totals are obtained.
pub enum RouteRequest {
    /// Figures supplied by the user; the provider is not contacted.
    Manual(RouteSummary),
    /// Ask the configured provider, falling back per config.
    Provider,
}

/// Result of a planning run.
pub struct PlannedTrip {
    pub trip: Trip,
    pub logs: Vec<DailyLogEntry>,
    /// Set when the provider failed and fallback figures were used.
    pub fallback_reason: Option<String>,
}

pub struct PlanLogic;

impl PlanLogic {
    pub fn validate_cycle_used(cycle_used: f64) -> AppResult<()> {
        if !cycle_used.is_finite() || !(0.0..=CYCLE_HOURS).contains(&cycle_used) {
            return Err(AppError::InvalidCycleHours(cycle_used));
        }
        Ok(())
    }

    /// Reject totals that are not finite or exceed the trip ceilings.
    /// Zero and negative figures pass: the planner turns them into an empty plan.
    pub fn validate_route(summary: &RouteSummary) -> AppResult<()> {
        let RouteSummary {
            distance_miles,
            duration_hours,
        } = *summary;

        if !distance_miles.is_finite() || distance_miles > MAX_TRIP_DISTANCE_MILES {
            return Err(AppError::InvalidRouteFigures(format!(
                "distance {} mi (max {} mi)",
                distance_miles, MAX_TRIP_DISTANCE_MILES
            )));
        }
        if !duration_hours.is_finite() || duration_hours > MAX_TRIP_DURATION_HOURS {
            return Err(AppError::InvalidRouteFigures(format!(
                "duration {} h (max {} h)",
                duration_hours, MAX_TRIP_DURATION_HOURS
            )));
        }
        Ok(())
    }

    /// Register a trip, resolve its route, then plan and store its logs.
    pub fn create_trip(
        pool: &mut DbPool,
        cfg: &Config,
        new_trip: &NewTrip,
        request: RouteRequest,
    ) -> AppResult<PlannedTrip> {
        Self::validate_cycle_used(new_trip.current_cycle_used)?;

        let stops = TripStops {
            current: &new_trip.current_location,
            pickup: &new_trip.pickup_location,
            dropoff: &new_trip.dropoff_location,
        };

        // Resolve before touching the DB: a hard routing failure leaves no trip behind.
        let (summary, source, fallback_reason) = match request {
            RouteRequest::Manual(summary) => (summary, RouteSource::Manual, None),
            RouteRequest::Provider => {
                let policy = FallbackPolicy::from_config(&cfg.routing);
                let provider = OpenRouteService::from_config(&cfg.routing);
                let outcome = route::resolve(provider, &stops, &policy)?;

                let reason = match &outcome {
                    RouteOutcome::Fallback { reason, .. } => {
                        warning(format!("Routing failed ({}), using fallback figures", reason));
                        Some(reason.clone())
                    }
                    RouteOutcome::Computed(_) => None,
                };
                (outcome.summary(), outcome.source(), reason)
            }
        };

        Self::validate_route(&summary)?;

        // trip, route totals and daily logs land together or not at all
        let tx = pool.conn.transaction()?;
        let trip_id = queries::insert_trip(&tx, new_trip)?;
        queries::update_trip_route(
            &tx,
            trip_id,
            summary.distance_miles,
            summary.duration_hours,
            source,
        )?;
        let trip = queries::load_trip(&tx, trip_id)?;
        let logs = Self::insert_plan(&tx, &trip)?;
        tx.commit()?;

        audit_or_warn(
            &pool.conn,
            "trip",
            &format!("trip #{}", trip_id),
            &format!(
                "{:.2} mi, {:.2} h ({})",
                summary.distance_miles,
                summary.duration_hours,
                source.to_db_str()
            ),
        );

        Self::audit_plan(&pool.conn, &trip, logs.len());

        Ok(PlannedTrip {
            trip,
            logs,
            fallback_reason,
        })
    }

    /// Plan a stored trip again from its saved totals.
    ///
    /// Entries are appended: the previous set is kept, so a trip planned twice
    /// holds two copies of each day.
    pub fn replan(pool: &mut DbPool, trip_id: i64) -> AppResult<PlannedTrip> {
        let trip = queries::load_trip(&pool.conn, trip_id)?;
        let logs = Self::store_plan(pool, &trip)?;

        Ok(PlannedTrip {
            trip,
            logs,
            fallback_reason: None,
        })
    }

    /// Run the planner on `trip` and persist every entry in one transaction.
    pub fn store_plan(pool: &mut DbPool, trip: &Trip) -> AppResult<Vec<DailyLogEntry>> {
        let tx = pool.conn.transaction()?;
        let logs = Self::insert_plan(&tx, trip)?;
        tx.commit()?;

        Self::audit_plan(&pool.conn, trip, logs.len());
        Ok(logs)
    }

    /// Plan `trip` and insert its entries on `conn`; the caller owns the transaction.
    fn insert_plan(conn: &Connection, trip: &Trip) -> AppResult<Vec<DailyLogEntry>> {
        let logs = planner::calculate_plan(&trip.plan_input());

        if logs.is_empty() {
            warning(format!(
                "Trip #{} needs positive distance/duration within {} days: no daily logs generated",
                trip.id, MAX_PLAN_DAYS
            ));
            return Ok(logs);
        }

        for log in &logs {
            queries::insert_daily_log(conn, log)?;
        }
        Ok(logs)
    }

    fn audit_plan(conn: &Connection, trip: &Trip, count: usize) {
        if count > 0 {
            audit_or_warn(
                conn,
                "plan",
                &format!("trip #{}", trip.id),
                &format!("{} daily logs generated", count),
            );
        }
    }

    pub fn delete_trip(pool: &mut DbPool, trip_id: i64) -> AppResult<()> {
        queries::delete_trip(&pool.conn, trip_id)?;
        audit_or_warn(
            &pool.conn,
            "del",
            &format!("trip #{}", trip_id),
            "Trip and daily logs deleted",
        );
        Ok(())
    }
}
