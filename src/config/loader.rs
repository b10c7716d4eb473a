//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading restriction
//! calendars from YAML files.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{ParkingError, ParkingResult};
use crate::models::{DaySchedule, Interval, MonthExemption};

use super::calendar::CalendarConfiguration;
use super::types::CalendarFile;

/// Loads restriction calendars from YAML.
///
/// # File Layout
///
/// ```text
/// day_schedules:
///   - weekday: monday
///     windows:
///       - { start: 8, end: 12 }
///       - { start: 14, end: 18 }
/// free_months: [8]
/// ```
///
/// # Example
///
/// ```no_run
/// use parking_meter::config::ConfigLoader;
///
/// let calendar = ConfigLoader::load("./config/default.yaml")?;
/// assert!(calendar.has_enforceable_window());
/// # Ok::<(), parking_meter::error::ParkingError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads a calendar from the YAML file at `path`.
    ///
    /// # Errors
    ///
    /// - [`ParkingError::ConfigNotFound`] if the file cannot be read
    /// - [`ParkingError::ConfigParseError`] if the YAML is malformed
    /// - any validation error raised while assembling the calendar
    ///   (invalid window bounds, invalid month, duplicate rule)
    pub fn load<P: AsRef<Path>>(path: P) -> ParkingResult<CalendarConfiguration> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| ParkingError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::from_yaml_str(&content, &path_str)
    }

    /// Parses a calendar from YAML text.
    ///
    /// `origin` names the source in error messages.
    pub fn from_yaml_str(yaml: &str, origin: &str) -> ParkingResult<CalendarConfiguration> {
        let file: CalendarFile =
            serde_yaml::from_str(yaml).map_err(|e| ParkingError::ConfigParseError {
                path: origin.to_string(),
                message: e.to_string(),
            })?;

        let calendar = Self::assemble(file)?;
        info!(
            origin = %origin,
            day_schedules = calendar.day_schedules().count(),
            free_months = calendar.month_exemptions().count(),
            "Loaded restriction calendar"
        );
        Ok(calendar)
    }

    /// Validates the raw file into a calendar.
    fn assemble(file: CalendarFile) -> ParkingResult<CalendarConfiguration> {
        let mut calendar = CalendarConfiguration::new();

        for entry in file.day_schedules {
            let windows = entry
                .windows
                .iter()
                .map(|window| Interval::new(window.start, window.end))
                .collect::<ParkingResult<Vec<_>>>()?;
            calendar.add_day_schedule(DaySchedule::new(entry.weekday.into(), windows))?;
        }

        for month in file.free_months {
            calendar.add_month_exemption(MonthExemption::new(month)?)?;
        }

        Ok(calendar)
    }
}
