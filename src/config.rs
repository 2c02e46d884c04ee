use crate::error::AppResult;
use crate::schedule::{resolve_timezone, WorkSchedule};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;

/// Default work window start
pub const DEFAULT_START_TIME: &str = "09:00";
/// Default work window end
pub const DEFAULT_END_TIME: &str = "17:00";
/// Default display locale
pub const DEFAULT_LOCALE: &str = "en";

/// Main configuration structure for the CLI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Work window start, HH:MM in the user's local time
    pub start_time: String,
    /// Work window end, HH:MM in the user's local time
    pub end_time: String,
    /// User's timezone identifier
    pub user_timezone: String,
    /// Manager's timezone identifier, when one is selected
    pub manager_timezone: Option<String>,
    /// Locale for status messages
    pub locale: String,
}

/// Optional settings file, merged under environment variables
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    start_time: Option<String>,
    end_time: Option<String>,
    user_timezone: Option<String>,
    manager_timezone: Option<String>,
    locale: Option<String>,
}

impl Config {
    /// Load configuration from environment and config file
    pub fn load() -> AppResult<Self> {
        // Load .env file if it exists
        dotenv().ok();

        // Load settings file if it exists; env vars take precedence
        let file = Self::load_file("config/workhours.toml");

        let start_time = env::var("WORK_START_TIME")
            .ok()
            .or(file.start_time)
            .unwrap_or_else(|| String::from(DEFAULT_START_TIME));
        let end_time = env::var("WORK_END_TIME")
            .ok()
            .or(file.end_time)
            .unwrap_or_else(|| String::from(DEFAULT_END_TIME));
        let user_timezone = env::var("USER_TIMEZONE")
            .ok()
            .or(file.user_timezone)
            .unwrap_or_else(|| String::from("UTC"));
        let manager_timezone = env::var("MANAGER_TIMEZONE").ok().or(file.manager_timezone);
        let locale = env::var("LOCALE")
            .ok()
            .or(file.locale)
            .unwrap_or_else(|| String::from(DEFAULT_LOCALE));

        let config = Config {
            start_time,
            end_time,
            user_timezone,
            manager_timezone,
            locale,
        };
        config.validate()?;
        Ok(config)
    }

    fn load_file(path: &str) -> FileConfig {
        match fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).unwrap_or_default(),
            Err(_) => FileConfig::default(),
        }
    }

    /// Reject malformed times and unresolvable timezones before any use
    pub fn validate(&self) -> AppResult<()> {
        self.schedule().validate()?;
        resolve_timezone(&self.user_timezone)?;
        if let Some(tz) = &self.manager_timezone {
            resolve_timezone(tz)?;
        }
        Ok(())
    }

    /// The configured work window as a schedule value
    pub fn schedule(&self) -> WorkSchedule {
        WorkSchedule::new(self.start_time.clone(), self.end_time.clone())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            start_time: String::from(DEFAULT_START_TIME),
            end_time: String::from(DEFAULT_END_TIME),
            user_timezone: String::from("UTC"),
            manager_timezone: None,
            locale: String::from(DEFAULT_LOCALE),
        }
    }
}
