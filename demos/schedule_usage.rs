//! Example demonstrating the Schedule module's capabilities.
//!
//! Run with: `RUST_LOG=debug cargo run --example schedule_usage`

use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use protoschedule::{Schedule, ScheduleConfig};

const PLANT_FLOOR: &str = r#"{
    "description": "Plant floor",
    "schedule": {
        "mon": [
            {"start": "0600", "duration": "8h", "label": "early"},
            {"start": "1400", "duration": "8h", "label": "late"},
            {"start": "1000", "duration": "2h", "label": "inspection"}
        ],
        "tue": [{"start": "0600", "duration": "8h", "label": "early"}],
        "wed": [{"start": "0600", "duration": "8h", "label": "early"}],
        "thu": [{"start": "0600", "duration": "8h", "label": "early"}],
        "fri": [
            {"start": "0600", "duration": "8h", "label": "early"},
            {"start": "2200", "duration": "10h", "label": "overnight"}
        ]
    }
}"#;

fn main() {
    env_logger::init();
    println!("=== Schedule Module Usage Example ===\n");

    let now = Utc.with_ymd_and_hms(2026, 10, 14, 12, 0, 0).unwrap();
    let mut schedule = match Schedule::new_from_time(PLANT_FLOOR, &now) {
        Ok(schedule) => schedule,
        Err(e) => {
            eprintln!("Failed to build schedule: {}", e);
            return;
        }
    };
    print!("{}", schedule);

    println!("\n--- Overlapping Intervals ---");
    let intervals = schedule.intervals();
    for (i, a) in intervals.iter().enumerate() {
        for b in intervals[i + 1..].iter().filter(|b| a.overlaps(*b)) {
            println!("{} overlaps {}", a.label(), b.label());
        }
    }

    println!("\n--- Coverage Queries ---");
    let monday = Utc.with_ymd_and_hms(2026, 10, 12, 0, 0, 0).unwrap();
    for (label, t) in [
        ("Monday 05:30", monday + TimeDelta::minutes(330)),
        ("Monday 10:30", monday + TimeDelta::minutes(630)),
        ("Saturday 03:00", monday + TimeDelta::hours(5 * 24 + 3)),
        ("Sunday 12:00", monday + TimeDelta::hours(6 * 24 + 12)),
    ] {
        report(&mut schedule, label, &t);
    }

    println!("\n--- Next Month ---");
    let later = monday + TimeDelta::weeks(4) + TimeDelta::minutes(630);
    report(&mut schedule, "Monday 10:30, four weeks on", &later);
    if let Some(anchor) = schedule.week_anchor() {
        println!("Cached week now starts {}", anchor);
    }

    println!("\n--- Read-only Matching ---");
    let config = ScheduleConfig::default().with_refresh_matching(false);
    match Schedule::with_config(PLANT_FLOOR, &now, config) {
        Ok(mut read_only) => match read_only.matching_intervals(&later) {
            Ok(found) => println!("Without refresh: {} match(es) four weeks on", found.len()),
            Err(e) => println!("Error: {}", e),
        },
        Err(e) => println!("Error: {}", e),
    }

    println!("\n--- Normalized Definition ---");
    match schedule.definition().to_json() {
        Ok(json) => println!("{}", json),
        Err(e) => println!("Error: {}", e),
    }

    println!("\n--- Malformed Definitions ---");
    for text in [
        r#"{"schedule": {"mon": [{"start": "6am", "duration": "8h"}]}}"#,
        r#"{"schedule": {"mon": [{"start": "0600", "duration": "eight"}]}}"#,
        r#"{"schedule": {}}"#,
        r#"{"schedule": "#,
    ] {
        match Schedule::new_from_time(text, &now) {
            Ok(_) => println!("Unexpectedly accepted {}", text),
            Err(e) => println!("Rejected: {}", e),
        }
    }
}

fn report(schedule: &mut Schedule<Utc>, label: &str, t: &DateTime<Utc>) {
    match schedule.within(t) {
        Ok(true) => {
            let names: Vec<_> = schedule
                .cached_matches(t)
                .unwrap_or_default()
                .iter()
                .map(|iv| iv.label().to_string())
                .collect();
            println!("{}: covered by {}", label, names.join(", "));
        }
        Ok(false) => println!("{}: not covered", label),
        Err(e) => println!("{}: {}", label, e),
    }
}
