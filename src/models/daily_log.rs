use chrono::NaiveDate;
use serde::Serialize;

/// One calendar day of a trip's hours-of-service log.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyLogEntry {
    pub trip_id: i64,
    pub day_number: u32,
    pub date: NaiveDate,
    pub driving_hours: f64,
    pub on_duty_hours: f64,
    pub off_duty_hours: f64,
    pub fuel_stops: u32,
    pub notes: String,
}

impl DailyLogEntry {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn total_hours(&self) -> f64 {
        self.driving_hours + self.on_duty_hours + self.off_duty_hours
    }
}
