use super::time::{format_display_time, minutes_of_day, next_occurrence};
use super::{resolve_timezone, WorkSchedule};
use crate::error::AppResult;
use chrono::{DateTime, Timelike, Utc};
use chrono_tz::Tz;
use rust_i18n::t;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Snapshot of the user's availability at a single instant.
///
/// Produced fresh on every evaluation and never mutated; callers re-invoke
/// the evaluator on whatever refresh cadence they control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityResult {
    pub is_available: bool,
    pub message: String,
    pub current_local_time: String,
    pub current_manager_time: Option<String>,
    pub next_available: Option<String>,
}

/// Evaluate availability against the current wall-clock time.
///
/// "Now" is captured once; every derived rendering uses that same instant.
pub fn calculate_availability(
    schedule: &WorkSchedule,
    user_tz: &str,
    manager_tz: Option<&str>,
) -> AppResult<AvailabilityResult> {
    calculate_availability_at(schedule, user_tz, manager_tz, Utc::now())
}

/// Evaluate availability at an explicit instant
pub fn calculate_availability_at(
    schedule: &WorkSchedule,
    user_tz: &str,
    manager_tz: Option<&str>,
    now: DateTime<Utc>,
) -> AppResult<AvailabilityResult> {
    // Validate all inputs up front so no partial result can be produced
    let start = minutes_of_day(&schedule.start_time)?;
    let end = minutes_of_day(&schedule.end_time)?;
    let user = resolve_timezone(user_tz)?;
    let manager = manager_tz.map(resolve_timezone).transpose()?;

    let local = now.with_timezone(&user);
    let current_local_time = format_clock(&local);
    let current_manager_time = manager.map(|tz| format_clock(&now.with_timezone(&tz)));

    let minute_of_day = local.hour() * 60 + local.minute();
    let is_available = window_contains(minute_of_day, start, end);

    debug!(
        user_tz,
        minute_of_day, start, end, is_available, "evaluated availability window"
    );

    let next_available = if is_available {
        None
    } else {
        let next = next_occurrence(&local, &schedule.start_time)?;
        let start_display = format_display_time(&schedule.start_time)?;
        let text = if next.date() == local.date_naive() {
            t!("next_available_today", time = start_display)
        } else {
            t!("next_available_tomorrow", time = start_display)
        };
        Some(text.to_string())
    };

    let message = if is_available {
        t!("status_available").to_string()
    } else {
        t!("status_unavailable").to_string()
    };

    Ok(AvailabilityResult {
        is_available,
        message,
        current_local_time,
        current_manager_time,
        next_available,
    })
}

/// Whether a minute-of-day falls inside the work window.
///
/// Start is inclusive, end exclusive. A window whose end is numerically
/// before its start wraps past midnight; equal endpoints are a zero-length
/// window that contains nothing.
pub fn window_contains(t: u32, start: u32, end: u32) -> bool {
    if end < start {
        t >= start || t < end
    } else {
        t >= start && t < end
    }
}

fn format_clock(instant: &DateTime<Tz>) -> String {
    instant.format("%I:%M:%S %p %Z").to_string()
}
