use chrono::NaiveDate;
use eldplanner::core::planner::{
    CYCLE_HOURS, MAX_DRIVING_HOURS, MAX_PLAN_DAYS, PlanInput, calculate_plan,
    estimate_total_days, generate_notes,
};

fn input(distance: f64, duration: f64, cycle_used: f64) -> PlanInput {
    PlanInput {
        trip_id: 1,
        total_distance: distance,
        total_duration: duration,
        cycle_used,
        start_date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
    }
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 0.011
}

#[test]
fn test_estimate_total_days_long_haul() {
    // driving bound: ceil(45 / 11) = 5, fuel bound: floor(2800 / 1000) = 2
    assert_eq!(estimate_total_days(2800.0, 45.0, 0.0), 5);
}

#[test]
fn test_estimate_total_days_fuel_bound() {
    assert_eq!(estimate_total_days(3000.0, 10.0, 0.0), 3);
}

#[test]
fn test_estimate_total_days_never_zero() {
    assert_eq!(estimate_total_days(100.0, 1.0, 0.0), 1);
    assert_eq!(estimate_total_days(0.0, 0.0, 0.0), 1);
    assert_eq!(estimate_total_days(2800.0, 45.0, CYCLE_HOURS), 1);
}

#[test]
fn test_estimate_total_days_cycle_limited() {
    // only 5 hours left in the cycle
    assert_eq!(estimate_total_days(500.0, 20.0, 65.0), 4);
}

#[test]
fn test_long_haul_plan_days_and_totals() {
    let logs = calculate_plan(&input(2800.0, 45.0, 0.0));

    assert!((4..=7).contains(&logs.len()));
    assert_eq!(logs.len(), 5);

    let driving: f64 = logs.iter().map(|l| l.driving_hours).sum();
    assert!((driving - 45.0).abs() <= 5.0);

    for log in &logs {
        assert!(log.driving_hours <= MAX_DRIVING_HOURS);
        assert!(approx(log.driving_hours, 9.0));
        assert_eq!(log.fuel_stops, 0);
        assert_eq!(log.notes.contains("Fuel stop"), log.fuel_stops > 0);
    }
}

#[test]
fn test_days_and_dates_are_contiguous() {
    let logs = calculate_plan(&input(2800.0, 45.0, 0.0));
    let start = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();

    for (i, log) in logs.iter().enumerate() {
        assert_eq!(log.day_number as usize, i + 1);
        assert_eq!(log.date, start + chrono::Days::new(i as u64));
        assert_eq!(log.trip_id, 1);
    }
}

#[test]
fn test_terminal_days_carry_loading_time() {
    let logs = calculate_plan(&input(2800.0, 45.0, 0.0));
    let last = logs.len() - 1;

    assert!(approx(logs[0].on_duty_hours, 10.0));
    assert!(approx(logs[2].on_duty_hours, 9.0));
    assert!(approx(logs[last].on_duty_hours, 10.0));

    assert_eq!(logs[0].notes, "Pickup location loading time (1h)");
    assert_eq!(logs[2].notes, "Regular driving day");
    assert_eq!(logs[last].notes, "Dropoff location unloading time (1h)");
}

#[test]
fn test_off_duty_trimmed_to_fit_the_day() {
    let logs = calculate_plan(&input(2800.0, 45.0, 0.0));

    // 9 driving + 10 on-duty + 10.5 off-duty overflows 24h by 5.5
    assert!(approx(logs[0].off_duty_hours, 5.0));
    assert!(approx(logs[2].off_duty_hours, 6.0));

    for log in &logs {
        assert!(log.off_duty_hours >= 0.0);
    }
}

#[test]
fn test_single_day_trip_has_pickup_and_dropoff() {
    let logs = calculate_plan(&input(300.0, 5.0, 10.0));

    assert_eq!(logs.len(), 1);
    let day = &logs[0];
    assert!(approx(day.driving_hours, 5.0));
    assert!(approx(day.on_duty_hours, 7.0));
    assert!(approx(day.off_duty_hours, 10.0));
    assert_eq!(
        day.notes,
        "Pickup location loading time (1h); Dropoff location unloading time (1h)"
    );
}

#[test]
fn test_fuel_stops_are_noted() {
    let logs = calculate_plan(&input(3000.0, 10.0, 0.0));

    assert_eq!(logs.len(), 3);
    for log in &logs {
        assert_eq!(log.fuel_stops, 1);
        assert!(log.notes.contains("Fuel stop(s): 1 x 1h"));
        assert_eq!(log.notes.contains("Fuel stop"), log.fuel_stops > 0);
    }
    assert!(logs[0].notes.starts_with("Pickup location loading time (1h)"));
    assert_eq!(logs[1].notes, "Fuel stop(s): 1 x 1h");
}

#[test]
fn test_driving_never_exceeds_remaining_cycle() {
    let cycle_used = 65.0;
    let logs = calculate_plan(&input(500.0, 20.0, cycle_used));

    assert_eq!(logs.len(), 4);
    let driving: f64 = logs.iter().map(|l| l.driving_hours).sum();
    assert!(driving <= CYCLE_HOURS - cycle_used + 0.01);

    assert!(approx(logs[0].driving_hours, 5.0));
    assert!(logs[1..].iter().all(|l| l.driving_hours == 0.0));
}

#[test]
fn test_exhausted_cycle_yields_single_idle_day() {
    let logs = calculate_plan(&input(2800.0, 45.0, CYCLE_HOURS));

    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].driving_hours, 0.0);
    assert!(approx(logs[0].on_duty_hours, 2.0));
}

#[test]
fn test_invalid_inputs_produce_no_logs() {
    assert!(calculate_plan(&input(0.0, 45.0, 0.0)).is_empty());
    assert!(calculate_plan(&input(2800.0, 0.0, 0.0)).is_empty());
    assert!(calculate_plan(&input(-10.0, 5.0, 0.0)).is_empty());
    assert!(calculate_plan(&input(f64::NAN, 5.0, 0.0)).is_empty());
}

#[test]
fn test_generate_notes_combinations() {
    assert_eq!(generate_notes(2, 0, 3), "Regular driving day");
    assert_eq!(
        generate_notes(3, 2, 3),
        "Dropoff location unloading time (1h); Fuel stop(s): 2 x 1h"
    );
}

#[test]
fn test_off_duty_clamped_at_zero() {
    // 11 driving + 14 on-duty (11 + load + unload + 1 fuel stop) + 10.5 off-duty
    let logs = calculate_plan(&input(1500.0, 11.0, 0.0));

    assert_eq!(logs.len(), 1);
    let day = &logs[0];
    assert!(approx(day.driving_hours, 11.0));
    assert!(approx(day.on_duty_hours, 14.0));
    assert_eq!(day.fuel_stops, 1);
    assert_eq!(day.off_duty_hours, 0.0);
}

#[test]
fn test_plan_length_matches_estimate() {
    let cases = [
        (2800.0, 45.0, 0.0),
        (3000.0, 10.0, 0.0),
        (500.0, 20.0, 65.0),
        (300.0, 5.0, 10.0),
        (1500.0, 11.0, 0.0),
        (12_000.0, 180.0, 30.0),
        (2800.0, 45.0, CYCLE_HOURS),
        (650.0, 11.5, 59.5),
    ];

    for (distance, duration, cycle_used) in cases {
        let logs = calculate_plan(&input(distance, duration, cycle_used));
        assert_eq!(
            logs.len() as u32,
            estimate_total_days(distance, duration, cycle_used),
            "{} mi, {} h, cycle {}",
            distance,
            duration,
            cycle_used
        );

        let mut cycle = cycle_used;
        for log in &logs {
            assert!(log.driving_hours <= MAX_DRIVING_HOURS);
            assert!(log.driving_hours <= (CYCLE_HOURS - cycle).max(0.0) + 0.05);
            assert!(log.off_duty_hours >= 0.0);
            assert_eq!(log.notes.contains("Fuel stop"), log.fuel_stops > 0);
            cycle += log.driving_hours;
        }
    }
}

#[test]
fn test_huge_totals_saturate_and_plan_nothing() {
    assert_eq!(estimate_total_days(1.0, 1e12, 0.0), u32::MAX);
    assert_eq!(estimate_total_days(1e15, 1.0, 0.0), u32::MAX);

    assert!(calculate_plan(&input(1.0, 1e12, 0.0)).is_empty());
    assert!(calculate_plan(&input(f64::MAX, 1.0, 0.0)).is_empty());
}

#[test]
fn test_plan_horizon_is_bounded() {
    // 0.01 h of cycle left per day would need 200 000 days
    assert!(calculate_plan(&input(2000.0, 2000.0, 69.99)).is_empty());

    let longest = calculate_plan(&input(1000.0, 11.0 * MAX_PLAN_DAYS as f64, 0.0));
    assert_eq!(longest.len() as u32, MAX_PLAN_DAYS);
}

#[test]
fn test_start_date_near_calendar_end_plans_nothing() {
    let mut near_end = input(2800.0, 45.0, 0.0);
    near_end.start_date = NaiveDate::MAX;

    assert!(calculate_plan(&near_end).is_empty());
}
