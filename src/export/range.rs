// src/export/range.rs

use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

/// Parse `--range` into inclusive date bounds.
///
/// Supports:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - YYYY:YYYY
/// - YYYY-MM:YYYY-MM
/// - YYYY-MM-DD:YYYY-MM-DD
pub fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let (start, end) = match r.split_once(':') {
        Some((s, e)) => {
            let (s, e) = (s.trim(), e.trim());
            if s.len() != e.len() {
                return Err(range_error("start and end must have same format"));
            }
            (period_bounds(s)?.0, period_bounds(e)?.1)
        }
        None => period_bounds(r.trim())?,
    };

    if start > end {
        return Err(range_error("start date is after end date"));
    }

    Ok((start, end))
}

/// First and last day covered by a single period expression.
fn period_bounds(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    match p.len() {
        // YYYY
        4 => {
            let y: i32 = p.parse().map_err(|_| range_error("invalid year"))?;
            Ok((ymd(y, 1, 1)?, ymd(y, 12, 31)?))
        }
        // YYYY-MM
        7 => {
            let first = NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d")
                .map_err(|_| range_error("invalid month"))?;
            let next_month = first
                .checked_add_months(chrono::Months::new(1))
                .ok_or_else(|| range_error("invalid month"))?;
            let last = next_month
                .pred_opt()
                .ok_or_else(|| range_error("invalid month"))?;
            Ok((first, last))
        }
        // YYYY-MM-DD
        10 => {
            let d = NaiveDate::parse_from_str(p, "%Y-%m-%d")
                .map_err(|_| range_error("invalid date"))?;
            Ok((d, d))
        }
        _ => Err(range_error("unsupported --range format")),
    }
}

fn ymd(y: i32, m: u32, d: u32) -> AppResult<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d).ok_or_else(|| range_error("invalid date"))
}

fn range_error(msg: &str) -> AppError {
    AppError::InvalidDate(msg.to_string())
}
