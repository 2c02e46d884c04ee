#[macro_use]
extern crate rust_i18n;

pub mod config;
pub mod error;
pub mod schedule;
pub mod startup;
pub mod timezones;

// Initialize i18n
i18n!("locales", fallback = "en");
