use chrono::{NaiveDate, TimeZone, Utc};
use workhours::schedule::{
    calculate_availability, calculate_availability_at, convert_schedule_on_date, WorkSchedule,
};
use workhours::timezones::{display_name, search_cities};

/// Full evaluation with a manager timezone: both clocks rendered from the
/// same captured instant, converted window surfaced alongside
#[test]
fn test_evaluation_with_manager() {
    let schedule = WorkSchedule::new("09:00", "17:00");
    // 2023-01-16 12:00 in New York, 02:00 next day in Tokyo
    let now = Utc.with_ymd_and_hms(2023, 1, 16, 17, 0, 0).unwrap();

    let result =
        calculate_availability_at(&schedule, "America/New_York", Some("Asia/Tokyo"), now).unwrap();

    assert!(result.is_available);
    assert_eq!(result.message, "Available now");
    assert_eq!(result.current_local_time, "12:00:00 PM EST");
    assert_eq!(result.current_manager_time.as_deref(), Some("02:00:00 AM JST"));
    assert!(result.next_available.is_none());
}

/// A New York 09:00-17:00 day is an overnight 23:00-07:00 window in
/// Tokyo's frame
#[test]
fn test_converted_window_matches_evaluation() {
    let schedule = WorkSchedule::new("09:00", "17:00");
    let reference = NaiveDate::from_ymd_opt(2023, 1, 16).unwrap();

    let converted =
        convert_schedule_on_date(&schedule, "America/New_York", "Asia/Tokyo", reference).unwrap();

    assert_eq!(converted.start_time, "23:00");
    assert_eq!(converted.end_time, "07:00");
    assert!(converted.as_schedule().is_overnight().unwrap());
}

/// Without a manager timezone the result still reports the user's own
/// clock and status, with manager fields absent
#[test]
fn test_evaluation_without_manager() {
    let schedule = WorkSchedule::new("09:00", "17:00");
    let now = Utc.with_ymd_and_hms(2023, 1, 17, 1, 0, 0).unwrap(); // 20:00 EST Jan 16

    let result = calculate_availability_at(&schedule, "America/New_York", None, now).unwrap();

    assert!(!result.is_available);
    assert!(result.current_manager_time.is_none());
    assert_eq!(result.next_available.as_deref(), Some("Tomorrow at 09:00 AM"));
}

/// Overnight schedule evaluated across the midnight wrap
#[test]
fn test_overnight_schedule_evaluation() {
    let schedule = WorkSchedule::new("22:00", "06:00");

    // 23:30 EST: inside the wrapped window
    let now = Utc.with_ymd_and_hms(2023, 1, 17, 4, 30, 0).unwrap();
    let result = calculate_availability_at(&schedule, "America/New_York", None, now).unwrap();
    assert!(result.is_available);

    // 12:00 EST: outside, next start is tonight
    let now = Utc.with_ymd_and_hms(2023, 1, 16, 17, 0, 0).unwrap();
    let result = calculate_availability_at(&schedule, "America/New_York", None, now).unwrap();
    assert!(!result.is_available);
    assert_eq!(result.next_available.as_deref(), Some("Today at 10:00 PM"));
}

/// Malformed input never yields a partial result
#[test]
fn test_error_taxonomy() {
    let bad_time = WorkSchedule::new("25:00", "17:00");
    assert!(calculate_availability(&bad_time, "America/New_York", None).is_err());

    let schedule = WorkSchedule::new("09:00", "17:00");
    assert!(calculate_availability(&schedule, "Mars/Phobos", None).is_err());
    assert!(calculate_availability(&schedule, "America/New_York", Some("Mars/Phobos")).is_err());
}

/// Reference data: curated entries and the mechanical fallback
#[test]
fn test_reference_data_lookup() {
    assert_eq!(display_name("America/New_York"), "New York (United States)");
    assert_eq!(display_name("Antarctica/South_Pole"), "South Pole");

    let hits = search_cities("new york");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].timezone, "America/New_York");
}
