//! Human-readable trip and daily log output.

use crate::core::planner::{MAX_DRIVING_HOURS, MAX_DUTY_HOURS};
use crate::models::daily_log::DailyLogEntry;
use crate::models::trip::Trip;
use crate::utils::colors::{RESET, color_for_source, color_for_usage, colorize_optional};
use crate::utils::formatting::{bold, day_bar, miles2readable};
use crate::utils::hours2readable;
use crate::utils::table::{Cell, Column, Table};

const SHEET_BAR_WIDTH: usize = 24;

fn source_label(trip: &Trip) -> String {
    trip.route_source
        .map(|s| s.to_db_str().to_string())
        .unwrap_or_else(|| "--".to_string())
}

pub fn print_trip_overview(trip: &Trip, days: usize) {
    let source = source_label(trip);

    println!("\n{}", bold(&format!("Trip #{}", trip.id)));
    println!("  Route     : {}", trip.label());
    println!("  Created   : {}", trip.created_at.format("%Y-%m-%d %H:%M"));
    println!("  Cycle used: {}", hours2readable(trip.current_cycle_used));
    println!("  Distance  : {}", colorize_optional(&miles2readable(trip.total_distance)));
    println!(
        "  Duration  : {}",
        colorize_optional(
            &trip
                .total_duration
                .map(hours2readable)
                .unwrap_or_else(|| "--".to_string())
        )
    );
    println!(
        "  Source    : {}{}{}",
        color_for_source(&source),
        source,
        RESET
    );
    println!("  Trip days : {}", days);

    if trip.route_source.is_some_and(|s| s.is_fallback()) {
        println!(
            "  {}Totals are fallback estimates; the route was not computed.{}",
            color_for_source(&source),
            RESET
        );
    }
}

pub fn print_daily_table(logs: &[DailyLogEntry], separator_char: &str) {
    let mut table = Table::new(
        vec![
            Column::right("Day"),
            Column::left("Date"),
            Column::right("Driving"),
            Column::right("On-duty"),
            Column::right("Off-duty"),
            Column::right("Fuel"),
            Column::left("Notes"),
        ],
        separator_char,
    );

    for log in logs {
        table.add_row(vec![
            log.day_number.to_string().into(),
            log.date_str().into(),
            Cell::colored(
                hours2readable(log.driving_hours),
                color_for_usage(log.driving_hours, MAX_DRIVING_HOURS),
            ),
            Cell::colored(
                hours2readable(log.on_duty_hours),
                color_for_usage(log.on_duty_hours, MAX_DUTY_HOURS),
            ),
            hours2readable(log.off_duty_hours).into(),
            log.fuel_stops.to_string().into(),
            log.notes.clone().into(),
        ]);
    }

    println!();
    print!("{}", table.render());

    let driving: f64 = logs.iter().map(|l| l.driving_hours).sum();
    let on_duty: f64 = logs.iter().map(|l| l.on_duty_hours).sum();
    println!(
        "\nTotal driving: {} | Total on-duty: {}",
        hours2readable(driving),
        hours2readable(on_duty)
    );
}

/// Driver's daily log sheet for one day.
pub fn print_log_sheet(trip: &Trip, log: &DailyLogEntry) {
    println!(
        "\n{}",
        bold(&format!(
            "DRIVER'S DAILY LOG: day {} ({})",
            log.day_number,
            log.date.format("%A %Y-%m-%d")
        ))
    );
    println!("Trip #{}: {}", trip.id, trip.label());
    println!();

    let rows = [
        ("Off duty", log.off_duty_hours, None),
        ("Driving", log.driving_hours, Some(MAX_DRIVING_HOURS)),
        ("On duty", log.on_duty_hours, Some(MAX_DUTY_HOURS)),
    ];

    for (label, hours, limit) in rows {
        let color = limit.map(|l| color_for_usage(hours, l)).unwrap_or(RESET);
        println!(
            "  {:<9} {}{:>6}{}  {}",
            label,
            color,
            hours2readable(hours),
            RESET,
            day_bar(hours, SHEET_BAR_WIDTH)
        );
    }

    println!("  {:<9} {:>6}", "Total", hours2readable(log.total_hours()));
    println!(
        "  Driving {:.1}/{:.1} h | Fuel stops: {}",
        log.driving_hours, MAX_DRIVING_HOURS, log.fuel_stops
    );
    println!("  Remarks: {}", log.notes);
}

/// One row per trip, with its stored log count.
pub fn print_trip_list(trips: &[(Trip, i64)], separator_char: &str) {
    let mut table = Table::new(
        vec![
            Column::right("ID"),
            Column::left("Created"),
            Column::left("From"),
            Column::left("Pickup"),
            Column::left("Dropoff"),
            Column::right("Distance"),
            Column::right("Duration"),
            Column::left("Source"),
            Column::right("Logs"),
        ],
        separator_char,
    );

    for (trip, logs) in trips {
        let source = source_label(trip);
        table.add_row(vec![
            trip.id.to_string().into(),
            trip.created_at.format("%Y-%m-%d").to_string().into(),
            trip.current_location.as_str().into(),
            trip.pickup_location.as_str().into(),
            trip.dropoff_location.as_str().into(),
            miles2readable(trip.total_distance).into(),
            trip.total_duration
                .map(hours2readable)
                .unwrap_or_else(|| "--".to_string())
                .into(),
            Cell::colored(source.clone(), color_for_source(&source)),
            logs.to_string().into(),
        ]);
    }

    print!("{}", table.render());
}
