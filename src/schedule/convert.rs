use super::time::{parse_time_strict, resolve_local};
use super::{resolve_timezone, WorkSchedule};
use crate::error::{invalid_time_error, AppResult};
use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// A work schedule re-expressed in another timezone.
///
/// The day-offset fields record how many calendar days each endpoint shifted
/// relative to the source reference date (-1, 0, or +1), so a caller can
/// tell "your hours there start tomorrow" apart from "same day".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertedSchedule {
    pub start_time: String,
    pub end_time: String,
    pub start_day_offset: i32,
    pub end_day_offset: i32,
}

impl ConvertedSchedule {
    /// The converted window as a plain schedule, dropping day offsets
    pub fn as_schedule(&self) -> WorkSchedule {
        WorkSchedule::new(self.start_time.clone(), self.end_time.clone())
    }
}

/// Convert a work-hours window from one timezone to another, anchored to
/// today's date in the source timezone.
///
/// Uses the UTC offsets in effect at the resolved instants, so DST rules
/// active on that date in either zone are honored.
pub fn convert_schedule_to_timezone(
    schedule: &WorkSchedule,
    source_tz: &str,
    target_tz: &str,
) -> AppResult<ConvertedSchedule> {
    let source = resolve_timezone(source_tz)?;
    let reference = Utc::now().with_timezone(&source).date_naive();
    convert_schedule_on_date(schedule, source_tz, target_tz, reference)
}

/// Convert a work-hours window anchored to an explicit reference date in the
/// source timezone. Pinning the date makes the conversion deterministic.
pub fn convert_schedule_on_date(
    schedule: &WorkSchedule,
    source_tz: &str,
    target_tz: &str,
    reference: NaiveDate,
) -> AppResult<ConvertedSchedule> {
    let source = resolve_timezone(source_tz)?;
    let target = resolve_timezone(target_tz)?;

    let (start_time, start_day_offset) =
        convert_endpoint(&schedule.start_time, reference, source, target)?;
    let (end_time, end_day_offset) =
        convert_endpoint(&schedule.end_time, reference, source, target)?;

    Ok(ConvertedSchedule {
        start_time,
        end_time,
        start_day_offset,
        end_day_offset,
    })
}

/// Convert a single HH:MM endpoint, returning the target-zone wall-clock
/// time and the calendar-day shift relative to the reference date
fn convert_endpoint(
    time_str: &str,
    reference: NaiveDate,
    source: Tz,
    target: Tz,
) -> AppResult<(String, i32)> {
    let (hour, minute) = parse_time_strict(time_str)?;

    let instant = resolve_local(reference, hour, minute, source)
        .ok_or_else(|| invalid_time_error(time_str))?;
    let in_target = instant.with_timezone(&target);

    let day_offset = in_target
        .date_naive()
        .signed_duration_since(reference)
        .num_days() as i32;

    Ok((in_target.format("%H:%M").to_string(), day_offset))
}
