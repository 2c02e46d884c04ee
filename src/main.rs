#[macro_use]
extern crate rust_i18n;

use serde::Serialize;
use tracing::info;
use workhours::config::Config;
use workhours::schedule::{
    calculate_availability, convert_schedule_to_timezone, AvailabilityResult, ConvertedSchedule,
};
use workhours::startup;
use workhours::timezones::display_name;

// Initialize i18n
i18n!("locales", fallback = "en");

/// One evaluation, rendered either as text or as JSON with `--json`
#[derive(Serialize)]
struct Report {
    availability: AvailabilityResult,
    converted_schedule: Option<ConvertedSchedule>,
    manager_location: Option<String>,
}

fn main() -> miette::Result<()> {
    // Initialize logging
    startup::init_logging()?;

    // Load configuration
    let config = startup::load_config()?;

    info!(
        "Evaluating availability for {} ({} - {})",
        config.user_timezone, config.start_time, config.end_time
    );

    let report = build_report(&config)?;

    if std::env::args().any(|arg| arg == "--json") {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).map_err(workhours::error::Error::from)?
        );
    } else {
        print_report(&config, &report);
    }

    Ok(())
}

fn build_report(config: &Config) -> miette::Result<Report> {
    let schedule = config.schedule();
    let manager_tz = config.manager_timezone.as_deref();

    let availability = calculate_availability(&schedule, &config.user_timezone, manager_tz)?;
    let converted_schedule = match manager_tz {
        Some(tz) => Some(convert_schedule_to_timezone(
            &schedule,
            &config.user_timezone,
            tz,
        )?),
        None => None,
    };

    Ok(Report {
        availability,
        converted_schedule,
        manager_location: manager_tz.map(display_name),
    })
}

fn print_report(config: &Config, report: &Report) {
    let availability = &report.availability;

    println!("{}", availability.message);
    println!(
        "{}: {}",
        t!("label_your_time"),
        availability.current_local_time
    );
    println!(
        "{}: {} - {}",
        t!("label_work_hours"),
        config.start_time,
        config.end_time
    );

    if let (Some(manager_time), Some(location)) = (
        availability.current_manager_time.as_deref(),
        report.manager_location.as_deref(),
    ) {
        println!("{}: {}", t!("label_manager_time", city = location), manager_time);
    }

    if let Some(converted) = &report.converted_schedule {
        println!(
            "{}: {} - {}",
            t!("label_hours_there"),
            converted.start_time,
            converted.end_time
        );
    }

    if let Some(next) = availability.next_available.as_deref() {
        println!("{}: {}", t!("label_next_available"), next);
    }
}
