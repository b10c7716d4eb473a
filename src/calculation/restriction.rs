//! Restriction status queries.
//!
//! This module answers "is parking charged at this instant?" and "when is the
//! next charged window?" for a [`CalendarConfiguration`], taking public
//! holidays and month exemptions into account.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::config::CalendarConfiguration;
use crate::error::{ParkingError, ParkingResult};
use crate::models::{DaySchedule, Interval, MonthExemption};

use super::holidays::is_holiday;

/// Days examined by the forward search: the starting day plus a full week.
const MAX_DAY_PROBES: usize = 8;

/// Stateless restriction predicates over a borrowed calendar.
///
/// # Example
///
/// ```
/// use parking_meter::calculation::RestrictionQuery;
/// use parking_meter::config::CalendarConfiguration;
/// use parking_meter::models::{DaySchedule, Interval};
/// use chrono::{NaiveDateTime, Weekday};
///
/// let calendar = CalendarConfiguration::new()
///     .with_day_schedule(DaySchedule::new(Weekday::Mon, [Interval::new(16, 18)?]))?;
/// let query = RestrictionQuery::new(&calendar);
///
/// // 2015-02-20 is a Friday; the next window opens on Monday at 16:00.
/// let friday = NaiveDateTime::parse_from_str("2015-02-20 00:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(
///     query.next_restriction_start(friday)?.to_string(),
///     "2015-02-23 16:00:00"
/// );
/// # Ok::<(), parking_meter::error::ParkingError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RestrictionQuery<'a> {
    calendar: &'a CalendarConfiguration,
}

impl<'a> RestrictionQuery<'a> {
    /// Creates a query over `calendar`.
    pub fn new(calendar: &'a CalendarConfiguration) -> Self {
        Self { calendar }
    }

    /// Returns true if a month exemption covers `instant`.
    pub fn is_free_month(&self, instant: NaiveDateTime) -> bool {
        self.calendar
            .month_exemptions()
            .any(|exemption| exemption.applies_to(instant.date()))
    }

    /// Returns true if `instant` is on a public holiday or on a weekday with
    /// no schedule.
    pub fn is_free_day(&self, instant: NaiveDateTime) -> bool {
        is_holiday(instant.date()) || self.schedule_for(instant.date()).is_none()
    }

    /// Returns true if no window of the day contains the time of day.
    pub fn is_free_time_period(&self, instant: NaiveDateTime) -> bool {
        !self.is_restricted_time_period(instant)
    }

    /// Returns true if a window of the day's schedule contains the time of day.
    ///
    /// Holidays and month exemptions are not considered here; see
    /// [`is_restricted_instant`](Self::is_restricted_instant).
    pub fn is_restricted_time_period(&self, instant: NaiveDateTime) -> bool {
        self.containing_window(instant).is_some()
    }

    /// Returns true if purchased time is consumed at `instant`: it lies in an
    /// enforcement window, on a day that is neither a holiday nor in an
    /// exempt month.
    pub fn is_restricted_instant(&self, instant: NaiveDateTime) -> bool {
        self.is_restricted_time_period(instant)
            && !self.is_free_day(instant)
            && !self.is_free_month(instant)
    }

    /// Returns the window containing `instant`.
    ///
    /// # Errors
    ///
    /// Returns [`ParkingError::PreconditionViolation`] unless
    /// [`is_restricted_time_period`](Self::is_restricted_time_period) holds.
    pub fn matching_window(&self, instant: NaiveDateTime) -> ParkingResult<&'a Interval> {
        self.containing_window(instant)
            .ok_or_else(|| ParkingError::PreconditionViolation {
                message: format!("{} is not inside an enforcement window", instant),
            })
    }

    /// Returns the exemption covering `instant`'s month.
    ///
    /// # Errors
    ///
    /// Returns [`ParkingError::PreconditionViolation`] unless
    /// [`is_free_month`](Self::is_free_month) holds.
    pub fn matching_month_exemption(
        &self,
        instant: NaiveDateTime,
    ) -> ParkingResult<&'a MonthExemption> {
        self.calendar
            .month_exemption(instant.month())
            .ok_or_else(|| ParkingError::PreconditionViolation {
                message: format!("{} is not in an exempt month", instant),
            })
    }

    /// Returns the window `instant` is in, or else the next one to open.
    ///
    /// # Errors
    ///
    /// Returns [`ParkingError::EmptyConfiguration`] if no weekday has a
    /// non-empty window.
    pub fn next_matching_window(&self, instant: NaiveDateTime) -> ParkingResult<&'a Interval> {
        if let Some(window) = self.containing_window(instant) {
            return Ok(window);
        }
        self.find_next_window(instant).map(|(_, window)| window)
    }

    /// Returns the instant the next window opens, searching forward from
    /// `instant`.
    ///
    /// # Errors
    ///
    /// Returns [`ParkingError::EmptyConfiguration`] if no weekday has a
    /// non-empty window.
    pub fn next_restriction_start(&self, instant: NaiveDateTime) -> ParkingResult<NaiveDateTime> {
        let (date, window) = self.find_next_window(instant)?;
        Ok(at_hour(date, window.start_hour()))
    }

    fn schedule_for(&self, date: NaiveDate) -> Option<&'a DaySchedule> {
        self.calendar.day_schedule(date.weekday())
    }

    fn containing_window(&self, instant: NaiveDateTime) -> Option<&'a Interval> {
        self.schedule_for(instant.date())
            .and_then(|schedule| schedule.window_containing(instant.time()))
    }

    /// Walks forward day by day until a schedule has a window starting at or
    /// after the probe hour. The first probe uses `from`'s hour, later probes
    /// start at midnight.
    fn find_next_window(&self, from: NaiveDateTime) -> ParkingResult<(NaiveDate, &'a Interval)> {
        let mut date = from.date();
        let mut hour = from.hour();

        for _ in 0..MAX_DAY_PROBES {
            let window = self
                .schedule_for(date)
                .and_then(|schedule| schedule.first_window_starting_from(hour));
            if let Some(window) = window {
                return Ok((date, window));
            }

            date = next_day(date)?;
            hour = 0;
        }

        Err(ParkingError::EmptyConfiguration {
            message: format!("no enforcement window within a week of {}", from),
        })
    }
}

/// `date` at the given whole hour; 24 is midnight of the following day.
pub(crate) fn at_hour(date: NaiveDate, hour: u32) -> NaiveDateTime {
    date.and_time(NaiveTime::default()) + Duration::hours(i64::from(hour))
}

/// Midnight at the start of the day after `instant`.
pub(crate) fn start_of_next_day(instant: NaiveDateTime) -> ParkingResult<NaiveDateTime> {
    next_day(instant.date()).map(|date| date.and_time(NaiveTime::default()))
}

fn next_day(date: NaiveDate) -> ParkingResult<NaiveDate> {
    date.succ_opt().ok_or_else(|| ParkingError::DateOutOfRange {
        message: format!("day after {}", date),
    })
}
