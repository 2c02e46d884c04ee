use crate::error::{invalid_time_error, AppResult};
use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use chrono_tz::Tz;

/// Parse time string in HH:MM format.
///
/// Both fields must be exactly two ASCII digits, so shorthand like "17:5"
/// or signed values like "+1:05" are rejected rather than coerced.
pub fn parse_time(time_str: &str) -> Option<(u32, u32)> {
    let parts: Vec<&str> = time_str.split(':').collect();
    if parts.len() != 2 {
        return None;
    }
    if parts
        .iter()
        .any(|part| part.len() != 2 || !part.bytes().all(|b| b.is_ascii_digit()))
    {
        return None;
    }
    let hour = parts[0].parse::<u32>().ok()?;
    let minute = parts[1].parse::<u32>().ok()?;
    if hour > 23 || minute > 59 {
        return None;
    }
    Some((hour, minute))
}

/// Parse time string in HH:MM format, failing with `InvalidTimeFormat`
pub fn parse_time_strict(time_str: &str) -> AppResult<(u32, u32)> {
    parse_time(time_str).ok_or_else(|| invalid_time_error(time_str))
}

/// Minutes since local midnight for an HH:MM string
pub fn minutes_of_day(time_str: &str) -> AppResult<u32> {
    let (hour, minute) = parse_time_strict(time_str)?;
    Ok(hour * 60 + minute)
}

/// Anchor a wall-clock time to a calendar date in the given timezone.
///
/// Times skipped by a DST spring-forward gap resolve to one hour later;
/// ambiguous times during fall-back take the earlier offset.
pub fn resolve_local(date: NaiveDate, hour: u32, minute: u32, tz: Tz) -> Option<DateTime<Tz>> {
    let naive = date.and_hms_opt(hour, minute, 0)?;
    match tz.from_local_datetime(&naive) {
        chrono::LocalResult::Single(dt) => Some(dt),
        chrono::LocalResult::Ambiguous(earliest, _) => Some(earliest),
        chrono::LocalResult::None => {
            let shifted = naive.checked_add_signed(Duration::hours(1))?;
            tz.from_local_datetime(&shifted).earliest()
        }
    }
}

/// Format a time-of-day for display (12-hour clock, e.g. "09:00 AM")
pub fn format_display_time(time_str: &str) -> AppResult<String> {
    let (hour, minute) = parse_time_strict(time_str)?;
    let time = NaiveTime::from_hms_opt(hour, minute, 0)
        .ok_or_else(|| invalid_time_error(time_str))?;
    Ok(time.format("%I:%M %p").to_string())
}

/// Calculate the next instant at which local wall-clock time equals `time_str`
pub fn next_occurrence(now_local: &DateTime<Tz>, time_str: &str) -> AppResult<NaiveDateTime> {
    let (hour, minute) = parse_time_strict(time_str)?;

    // Create a datetime for today at the specified time
    let mut next_time = now_local
        .date_naive()
        .and_hms_opt(hour, minute, 0)
        .ok_or_else(|| invalid_time_error(time_str))?;

    // If the time has already passed today, schedule for tomorrow
    if now_local.naive_local() >= next_time {
        next_time = next_time
            .checked_add_signed(Duration::days(1))
            .ok_or_else(|| invalid_time_error(time_str))?;
    }

    Ok(next_time)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use chrono_tz::America::New_York;

    #[test]
    fn test_parse_time() {
        // Valid cases
        assert_eq!(parse_time("00:00"), Some((0, 0)));
        assert_eq!(parse_time("12:30"), Some((12, 30)));
        assert_eq!(parse_time("23:59"), Some((23, 59)));

        // Invalid cases
        assert_eq!(parse_time("24:00"), None); // Hour out of range
        assert_eq!(parse_time("12:60"), None); // Minute out of range
        assert_eq!(parse_time("12:30:45"), None); // Too many parts
        assert_eq!(parse_time("12"), None); // Too few parts
        assert_eq!(parse_time("12:ab"), None); // Invalid minute
        assert_eq!(parse_time("ab:30"), None); // Invalid hour
    }

    #[test]
    fn test_parse_time_requires_two_digit_fields() {
        assert_eq!(parse_time("17:5"), None); // Shorthand minute
        assert_eq!(parse_time("9:30"), None); // Shorthand hour
        assert_eq!(parse_time("007:09"), None); // Extra digits
        assert_eq!(parse_time("+1:05"), None); // Sign accepted by u32::parse
        assert_eq!(parse_time(" 9:30"), None); // Leading whitespace
    }

    #[test]
    fn test_minutes_of_day() {
        assert_eq!(minutes_of_day("00:00").unwrap(), 0);
        assert_eq!(minutes_of_day("09:00").unwrap(), 540);
        assert_eq!(minutes_of_day("23:59").unwrap(), 1439);
        assert!(minutes_of_day("25:00").is_err());
    }

    #[test]
    fn test_resolve_local_dst_gap() {
        // US spring-forward 2023-03-12: 02:30 does not exist in New York
        let date = NaiveDate::from_ymd_opt(2023, 3, 12).unwrap();
        let resolved = resolve_local(date, 2, 30, New_York).unwrap();
        assert_eq!(resolved.format("%H:%M").to_string(), "03:30");
    }

    #[test]
    fn test_format_display_time() {
        assert_eq!(format_display_time("09:00").unwrap(), "09:00 AM");
        assert_eq!(format_display_time("17:30").unwrap(), "05:30 PM");
        assert_eq!(format_display_time("00:15").unwrap(), "12:15 AM");
        assert!(format_display_time("9am").is_err());
    }

    #[test]
    fn test_next_occurrence() {
        // 2023-06-01 10:00 New York
        let now = Utc
            .with_ymd_and_hms(2023, 6, 1, 14, 0, 0)
            .unwrap()
            .with_timezone(&New_York);

        // Time later today
        let next = next_occurrence(&now, "15:30").unwrap();
        assert_eq!(next.format("%Y-%m-%d %H:%M").to_string(), "2023-06-01 15:30");

        // Time earlier today rolls to tomorrow
        let next = next_occurrence(&now, "09:00").unwrap();
        assert_eq!(next.format("%Y-%m-%d %H:%M").to_string(), "2023-06-02 09:00");

        // Exactly now rolls to tomorrow
        let next = next_occurrence(&now, "10:00").unwrap();
        assert_eq!(next.format("%Y-%m-%d %H:%M").to_string(), "2023-06-02 10:00");

        // Invalid time
        assert!(next_occurrence(&now, "25:00").is_err());
    }
}
