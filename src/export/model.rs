// src/export/model.rs

use crate::models::daily_log::DailyLogEntry;
use serde::Serialize;

/// Flat daily log row for export.
#[derive(Serialize, Clone, Debug)]
pub struct DailyLogExport {
    pub trip_id: i64,
    pub day_number: u32,
    pub date: String,
    pub driving_hours: f64,
    pub on_duty_hours: f64,
    pub off_duty_hours: f64,
    pub fuel_stops: u32,
    pub notes: String,
}

impl From<&DailyLogEntry> for DailyLogExport {
    fn from(e: &DailyLogEntry) -> Self {
        Self {
            trip_id: e.trip_id,
            day_number: e.day_number,
            date: e.date_str(),
            driving_hours: e.driving_hours,
            on_duty_hours: e.on_duty_hours,
            off_duty_hours: e.off_duty_hours,
            fuel_stops: e.fuel_stops,
            notes: e.notes.clone(),
        }
    }
}

/// Headers for XLSX (CSV/JSON take them from serde).
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "trip_id",
        "day_number",
        "date",
        "driving_hours",
        "on_duty_hours",
        "off_duty_hours",
        "fuel_stops",
        "notes",
    ]
}

pub(crate) fn log_to_row(e: &DailyLogExport) -> Vec<String> {
    vec![
        e.trip_id.to_string(),
        e.day_number.to_string(),
        e.date.clone(),
        format!("{:.2}", e.driving_hours),
        format!("{:.2}", e.on_duty_hours),
        format!("{:.2}", e.off_duty_hours),
        e.fuel_stops.to_string(),
        e.notes.clone(),
    ]
}
