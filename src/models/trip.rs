use super::route_source::RouteSource;
use crate::core::planner::PlanInput;
use chrono::{DateTime, FixedOffset, Local, NaiveDate};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Trip {
    pub id: i64,
    pub current_location: String,  // ⇔ trips.current_location
    pub pickup_location: String,   // ⇔ trips.pickup_location
    pub dropoff_location: String,  // ⇔ trips.dropoff_location
    pub current_cycle_used: f64,   // ⇔ trips.current_cycle_used (hours)
    pub total_distance: Option<f64>, // ⇔ trips.total_distance (miles, NULL until routed)
    pub total_duration: Option<f64>, // ⇔ trips.total_duration (hours, NULL until routed)
    pub route_source: Option<RouteSource>,
    pub created_at: DateTime<FixedOffset>, // ⇔ trips.created_at (RFC 3339)
}

impl Trip {
    /// Day 1 of the log sequence.
    pub fn start_date(&self) -> NaiveDate {
        self.created_at.date_naive()
    }

    pub fn plan_input(&self) -> PlanInput {
        PlanInput {
            trip_id: self.id,
            total_distance: self.total_distance.unwrap_or(0.0),
            total_duration: self.total_duration.unwrap_or(0.0),
            cycle_used: self.current_cycle_used,
            start_date: self.start_date(),
        }
    }

    pub fn label(&self) -> String {
        format!(
            "{} → {} → {}",
            self.current_location, self.pickup_location, self.dropoff_location
        )
    }
}

/// Data needed to register a trip before its route is known.
#[derive(Debug, Clone)]
pub struct NewTrip {
    pub current_location: String,
    pub pickup_location: String,
    pub dropoff_location: String,
    pub current_cycle_used: f64,
    pub created_at: DateTime<FixedOffset>,
}

impl NewTrip {
    /// Trip created now, in local time.
    pub fn now(current: &str, pickup: &str, dropoff: &str, cycle_used: f64) -> Self {
        Self {
            current_location: current.trim().to_string(),
            pickup_location: pickup.trim().to_string(),
            dropoff_location: dropoff.trim().to_string(),
            current_cycle_used: cycle_used,
            created_at: Local::now().fixed_offset(),
        }
    }
}
