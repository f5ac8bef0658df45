// src/export/logic.rs

use crate::db::log::audit_or_warn;
use crate::db::pool::DbPool;
use crate::db::queries::{load_daily_logs_filtered, load_trip};
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::DailyLogExport;
use crate::export::range::parse_range;
use crate::export::xlsx::export_xlsx;
use crate::ui::messages::warning;
use crate::utils::path::absolute_output_path;
use chrono::NaiveDate;

/// High-level export of stored daily logs.
pub struct ExportLogic;

impl ExportLogic {
    /// Export daily logs.
    ///
    /// - `format`: csv | json | xlsx
    /// - `file`: absolute output path (`~/` is expanded)
    /// - `trip`: only logs of this trip
    /// - `range`: `None`, `"all"` or one of:
    ///   - `YYYY`
    ///   - `YYYY-MM`
    ///   - `YYYY-MM-DD`
    ///   - `YYYY:YYYY`
    ///   - `YYYY-MM:YYYY-MM`
    ///   - `YYYY-MM-DD:YYYY-MM-DD`
    ///
    /// Returns the number of exported rows.
    pub fn export(
        pool: &mut DbPool,
        format: ExportFormat,
        file: &str,
        trip: Option<i64>,
        range: &Option<String>,
        force: bool,
    ) -> AppResult<usize> {
        let path = absolute_output_path(file)?;

        // fail early on an unknown trip instead of exporting nothing
        if let Some(id) = trip {
            load_trip(&pool.conn, id)?;
        }

        let date_bounds: Option<(NaiveDate, NaiveDate)> = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_range(r)?),
        };

        let logs: Vec<DailyLogExport> = load_daily_logs_filtered(&pool.conn, trip, date_bounds)?
            .iter()
            .map(DailyLogExport::from)
            .collect();

        if logs.is_empty() {
            warning("No daily logs found for the selected filters.");
            return Ok(0);
        }

        ensure_writable(&path, force)?;

        match format {
            ExportFormat::Csv => export_csv(&logs, &path)?,
            ExportFormat::Json => export_json(&logs, &path)?,
            ExportFormat::Xlsx => export_xlsx(&logs, &path)?,
        }

        audit_or_warn(
            &pool.conn,
            "export",
            format.as_str(),
            &format!("{} daily logs → {}", logs.len(), path.display()),
        );

        Ok(logs.len())
    }
}
