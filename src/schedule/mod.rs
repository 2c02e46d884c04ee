pub mod availability;
pub mod convert;
pub mod time;

pub use availability::{calculate_availability, calculate_availability_at, AvailabilityResult};
pub use convert::{convert_schedule_on_date, convert_schedule_to_timezone, ConvertedSchedule};

use crate::error::{unknown_timezone_error, AppResult};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// A daily work-hours window in local wall-clock time.
///
/// Both fields are 24-hour `HH:MM` strings carrying no date component. An
/// end time earlier than the start time means the window spans midnight
/// (overnight shift); equal start and end is a zero-length window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkSchedule {
    pub start_time: String,
    pub end_time: String,
}

impl WorkSchedule {
    /// Create a new work schedule
    pub fn new(start_time: impl Into<String>, end_time: impl Into<String>) -> Self {
        Self {
            start_time: start_time.into(),
            end_time: end_time.into(),
        }
    }

    /// Validate both fields against the HH:MM format
    pub fn validate(&self) -> AppResult<()> {
        time::parse_time_strict(&self.start_time)?;
        time::parse_time_strict(&self.end_time)?;
        Ok(())
    }

    /// Whether the window wraps past midnight
    pub fn is_overnight(&self) -> AppResult<bool> {
        let start = time::minutes_of_day(&self.start_time)?;
        let end = time::minutes_of_day(&self.end_time)?;
        Ok(end < start)
    }
}

impl Default for WorkSchedule {
    fn default() -> Self {
        Self::new("09:00", "17:00")
    }
}

/// Resolve a timezone identifier against the IANA database
pub fn resolve_timezone(identifier: &str) -> AppResult<Tz> {
    identifier
        .parse::<Tz>()
        .map_err(|_| unknown_timezone_error(identifier))
}
