//! Configuration file types for restriction calendars.
//!
//! These structures mirror the YAML layout and are deserialized before being
//! validated into a [`CalendarConfiguration`](super::CalendarConfiguration).

use chrono::Weekday;
use serde::Deserialize;

/// Day of the week as written in configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeekdayName {
    /// Monday.
    Monday,
    /// Tuesday.
    Tuesday,
    /// Wednesday.
    Wednesday,
    /// Thursday.
    Thursday,
    /// Friday.
    Friday,
    /// Saturday.
    Saturday,
    /// Sunday.
    Sunday,
}

impl From<WeekdayName> for Weekday {
    fn from(name: WeekdayName) -> Self {
        match name {
            WeekdayName::Monday => Weekday::Mon,
            WeekdayName::Tuesday => Weekday::Tue,
            WeekdayName::Wednesday => Weekday::Wed,
            WeekdayName::Thursday => Weekday::Thu,
            WeekdayName::Friday => Weekday::Fri,
            WeekdayName::Saturday => Weekday::Sat,
            WeekdayName::Sunday => Weekday::Sun,
        }
    }
}

/// Raw window bounds, validated when the calendar is assembled.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct WindowEntry {
    /// First charged hour.
    pub start: i32,
    /// Hour at which charging stops.
    pub end: i32,
}

/// One weekday's windows.
#[derive(Debug, Clone, Deserialize)]
pub struct DayScheduleEntry {
    /// The weekday the windows apply to.
    pub weekday: WeekdayName,
    /// Candidate windows; overlapping entries are merged.
    #[serde(default)]
    pub windows: Vec<WindowEntry>,
}

/// Top-level calendar file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct CalendarFile {
    /// Enforcement windows per weekday.
    pub day_schedules: Vec<DayScheduleEntry>,
    /// Months (1 = January) during which parking is free.
    #[serde(default)]
    pub free_months: Vec<u32>,
}
