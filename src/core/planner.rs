//! Hours-of-service day planner.
//!
//! Splits a trip's total distance and driving time uniformly across the
//! number of days needed under the daily driving limit, the remaining 70h
//! cycle and the fuel-stop interval, then builds one log entry per day.

use crate::models::daily_log::DailyLogEntry;
use chrono::{Days, NaiveDate};

pub const MAX_DRIVING_HOURS: f64 = 11.0;
/// Declared limit. Allocation does not enforce it; it only drives display thresholds.
pub const MAX_DUTY_HOURS: f64 = 14.0;
pub const MIN_REST_BREAK: f64 = 0.5;
pub const DAILY_REST_HOURS: f64 = 10.0;
pub const CYCLE_HOURS: f64 = 70.0;
/// Miles between mandatory fuel stops.
pub const FUEL_STOP_INTERVAL: f64 = 1000.0;
pub const FUEL_STOP_DURATION: f64 = 1.0;
/// Longest log sequence the planner will produce.
pub const MAX_PLAN_DAYS: u32 = 1000;

/// Loading time on day 1 and unloading time on the last day.
const TERMINAL_DUTY_HOURS: f64 = 1.0;
/// Driving at or above this triggers the 30 min break.
const REST_BREAK_THRESHOLD: f64 = 8.0;
const HOURS_PER_DAY: f64 = 24.0;

const NOTE_PICKUP: &str = "Pickup location loading time (1h)";
const NOTE_DROPOFF: &str = "Dropoff location unloading time (1h)";
const NOTE_REGULAR: &str = "Regular driving day";

/// Aggregate trip figures the planner works on.
#[derive(Debug, Clone, Copy)]
pub struct PlanInput {
    pub trip_id: i64,
    /// Miles.
    pub total_distance: f64,
    /// Hours.
    pub total_duration: f64,
    /// Hours already used in the current cycle.
    pub cycle_used: f64,
    pub start_date: NaiveDate,
}

impl PlanInput {
    /// Positive totals that fit within [`MAX_PLAN_DAYS`].
    pub fn is_plannable(&self) -> bool {
        is_positive(self.total_distance)
            && is_positive(self.total_duration)
            && estimate_total_days(self.total_distance, self.total_duration, self.cycle_used)
                <= MAX_PLAN_DAYS
    }
}

/// Per-day share of the trip, identical for every day of a run.
#[derive(Debug, Clone, Copy)]
pub struct DailyShare {
    pub total_days: u32,
    pub distance: f64,
    pub driving: f64,
}

fn is_positive(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Driving hours still available in the 70h cycle.
pub fn available_cycle_hours(cycle_used: f64) -> f64 {
    (CYCLE_HOURS - cycle_used).max(0.0)
}

/// Whole days as u32, saturating at `u32::MAX`; NaN and negatives give 0.
fn saturating_days(days: f64) -> u32 {
    if days.is_nan() || days <= 0.0 {
        0
    } else if days >= f64::from(u32::MAX) {
        u32::MAX
    } else {
        days as u32
    }
}

/// Number of days the trip needs (always at least 1, saturating at `u32::MAX`).
pub fn estimate_total_days(total_distance: f64, total_duration: f64, cycle_used: f64) -> u32 {
    let effective_daily_cap = MAX_DRIVING_HOURS.min(available_cycle_hours(cycle_used));

    if effective_daily_cap <= 0.0 {
        return 1;
    }

    let days_by_driving = saturating_days((total_duration / effective_daily_cap).ceil());
    let days_by_fuel = saturating_days((total_distance / FUEL_STOP_INTERVAL).floor()).max(1);

    days_by_driving.max(days_by_fuel)
}

/// Build the full daily log sequence for a trip.
///
/// Returns an empty Vec when distance or duration is not a positive number,
/// or when the trip would need more than [`MAX_PLAN_DAYS`] days; callers
/// treat that as "nothing to plan", not as an error.
pub fn calculate_plan(input: &PlanInput) -> Vec<DailyLogEntry> {
    if !input.is_plannable() {
        return Vec::new();
    }

    let total_days =
        estimate_total_days(input.total_distance, input.total_duration, input.cycle_used).max(1);

    let share = DailyShare {
        total_days,
        distance: input.total_distance / f64::from(total_days),
        driving: input.total_duration / f64::from(total_days),
    };

    let mut cycle_used = input.cycle_used;
    let mut logs = Vec::with_capacity(total_days as usize);

    for day in 1..=total_days {
        // a start date near chrono's upper bound cannot hold the whole trip
        let Some((entry, driven)) = create_daily_log(input, day, &share, cycle_used) else {
            return Vec::new();
        };
        cycle_used += driven;
        logs.push(entry);
    }

    logs
}

/// Build the entry for `day_number`.
///
/// Returns the entry together with the unrounded driving hours, which the
/// caller adds to its cycle accumulator before the next day. `None` when the
/// day's date is out of chrono's range.
pub fn create_daily_log(
    input: &PlanInput,
    day_number: u32,
    share: &DailyShare,
    cycle_used: f64,
) -> Option<(DailyLogEntry, f64)> {
    let date = input
        .start_date
        .checked_add_days(Days::new(u64::from(day_number.saturating_sub(1))))?;

    let driving_hours = share
        .driving
        .min(MAX_DRIVING_HOURS)
        .min(available_cycle_hours(cycle_used));

    let mut on_duty_hours = driving_hours;

    if day_number == 1 {
        on_duty_hours += TERMINAL_DUTY_HOURS;
    }
    if day_number == share.total_days {
        on_duty_hours += TERMINAL_DUTY_HOURS;
    }

    let fuel_stops = (share.distance / FUEL_STOP_INTERVAL).floor() as u32;
    on_duty_hours += fuel_stops as f64 * FUEL_STOP_DURATION;

    let rest_break = if driving_hours >= REST_BREAK_THRESHOLD {
        MIN_REST_BREAK
    } else {
        0.0
    };
    let mut off_duty_hours = DAILY_REST_HOURS + rest_break;

    let total_hours = driving_hours + on_duty_hours + off_duty_hours;
    if total_hours > HOURS_PER_DAY {
        off_duty_hours = (off_duty_hours - (total_hours - HOURS_PER_DAY)).max(0.0);
    }

    let entry = DailyLogEntry {
        trip_id: input.trip_id,
        day_number,
        date,
        driving_hours: round2(driving_hours),
        on_duty_hours: round2(on_duty_hours),
        off_duty_hours: round2(off_duty_hours),
        fuel_stops,
        notes: generate_notes(day_number, fuel_stops, share.total_days),
    };

    Some((entry, driving_hours))
}

/// Narrative remarks for one day.
pub fn generate_notes(day_number: u32, fuel_stops: u32, total_days: u32) -> String {
    let mut notes: Vec<String> = Vec::new();

    if day_number == 1 {
        notes.push(NOTE_PICKUP.to_string());
    }
    if day_number == total_days {
        notes.push(NOTE_DROPOFF.to_string());
    }
    if fuel_stops > 0 {
        notes.push(format!(
            "Fuel stop(s): {} x {}h",
            fuel_stops, FUEL_STOP_DURATION
        ));
    }

    if notes.is_empty() {
        return NOTE_REGULAR.to_string();
    }

    notes.join("; ")
}
