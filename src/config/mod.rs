//! Restriction calendar configuration.
//!
//! This module holds the [`CalendarConfiguration`] registry of weekday
//! schedules and month exemptions, and the [`ConfigLoader`] that builds one
//! from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use parking_meter::config::ConfigLoader;
//!
//! let calendar = ConfigLoader::load("./config/default.yaml").unwrap();
//! println!("{} weekday schedules", calendar.day_schedules().count());
//! ```

mod calendar;
mod loader;
mod types;

pub use calendar::CalendarConfiguration;
pub use loader::ConfigLoader;
pub use types::{CalendarFile, DayScheduleEntry, WeekdayName, WindowEntry};
