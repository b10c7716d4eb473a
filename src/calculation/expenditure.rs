//! Purchased-time expenditure.
//!
//! Given a starting instant and an amount of purchased parking time, this
//! module walks a cursor forward through the restriction calendar, spending
//! the time only while parking is charged, and reports the instant at which
//! the purchase runs out.

use std::fmt;
use std::sync::Arc;

use chrono::{Duration, NaiveDateTime};
use tracing::{debug, trace};

use crate::clock::Clock;
use crate::config::CalendarConfiguration;
use crate::error::{ParkingError, ParkingResult};

use super::restriction::{RestrictionQuery, at_hour, start_of_next_day};

/// Computes when purchased parking time is used up.
///
/// The engine holds a frozen calendar snapshot and a clock. Every call works
/// on its own cursor, so one engine can serve any number of computations.
///
/// # Example
///
/// ```
/// use parking_meter::calculation::ExpenditureEngine;
/// use parking_meter::clock::FixedClock;
/// use parking_meter::config::CalendarConfiguration;
/// use parking_meter::models::{DaySchedule, Interval};
/// use chrono::{Duration, NaiveDateTime, Weekday};
///
/// let calendar = CalendarConfiguration::new()
///     .with_day_schedule(DaySchedule::new(Weekday::Mon, [Interval::new(10, 11)?]))?;
/// let start = NaiveDateTime::parse_from_str("2015-02-23 10:30:00", "%Y-%m-%d %H:%M:%S").unwrap();
///
/// let engine = ExpenditureEngine::builder()
///     .calendar(calendar)
///     .clock(FixedClock::new(start))
///     .build()?;
///
/// // Half an hour is left today; the remaining hour is spent next Monday.
/// let end = engine.compute_ending_instant(start, Duration::minutes(90))?;
/// assert_eq!(end.to_string(), "2015-03-02 11:00:00");
/// # Ok::<(), parking_meter::error::ParkingError>(())
/// ```
#[derive(Clone)]
pub struct ExpenditureEngine {
    calendar: Arc<CalendarConfiguration>,
    clock: Arc<dyn Clock>,
}

/// Assembles an [`ExpenditureEngine`], validating its inputs.
#[derive(Default)]
pub struct ExpenditureEngineBuilder {
    calendar: Option<Arc<CalendarConfiguration>>,
    clock: Option<Arc<dyn Clock>>,
}

impl ExpenditureEngineBuilder {
    /// Sets the restriction calendar.
    pub fn calendar(mut self, calendar: impl Into<Arc<CalendarConfiguration>>) -> Self {
        self.calendar = Some(calendar.into());
        self
    }

    /// Sets the time source.
    pub fn clock<C: Clock + 'static>(mut self, clock: C) -> Self {
        self.clock = Some(Arc::new(clock));
        self
    }

    /// Sets a time source the caller keeps a handle to.
    pub fn shared_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Builds the engine.
    ///
    /// # Errors
    ///
    /// - [`ParkingError::MissingClock`] if no clock was set
    /// - [`ParkingError::EmptyConfiguration`] if no calendar was set or if no
    ///   weekday has a non-empty window
    pub fn build(self) -> ParkingResult<ExpenditureEngine> {
        let clock = self.clock.ok_or(ParkingError::MissingClock)?;
        let calendar = self
            .calendar
            .ok_or_else(|| ParkingError::EmptyConfiguration {
                message: "no calendar was supplied".to_string(),
            })?;

        if !calendar.has_enforceable_window() {
            return Err(ParkingError::EmptyConfiguration {
                message: "the calendar should contain at least one enforcement window".to_string(),
            });
        }

        Ok(ExpenditureEngine { calendar, clock })
    }
}

impl ExpenditureEngine {
    /// Starts building an engine.
    pub fn builder() -> ExpenditureEngineBuilder {
        ExpenditureEngineBuilder::default()
    }

    /// The calendar this engine spends time against.
    pub fn calendar(&self) -> &CalendarConfiguration {
        &self.calendar
    }

    /// The current instant according to the engine's clock.
    pub fn now(&self) -> NaiveDateTime {
        self.clock.now()
    }

    /// Restriction predicates over this engine's calendar.
    pub fn restrictions(&self) -> RestrictionQuery<'_> {
        RestrictionQuery::new(&self.calendar)
    }

    /// Spends `duration` of charged time from the clock's current instant.
    pub fn compute_ending_instant_from_now(&self, duration: Duration) -> ParkingResult<NaiveDateTime> {
        self.compute_ending_instant(self.now(), duration)
    }

    /// Returns the instant at which `duration` of charged time, spent from
    /// `start`, runs out.
    ///
    /// Whenever the cursor is outside every window it skips, once each and in
    /// this order, a free month, a free day and the gap to the next window,
    /// consuming nothing. A cursor already inside a window is charged as is,
    /// even on a holiday or in an exempt month. With a zero duration the
    /// result is `start` itself if it lies in a window, else the instant the
    /// skips land on.
    ///
    /// # Errors
    ///
    /// Returns [`ParkingError::NegativeDuration`] for negative durations and
    /// propagates calendar range errors.
    pub fn compute_ending_instant(
        &self,
        start: NaiveDateTime,
        duration: Duration,
    ) -> ParkingResult<NaiveDateTime> {
        if duration < Duration::zero() {
            return Err(ParkingError::NegativeDuration {
                minutes: duration.num_minutes(),
            });
        }

        let query = self.restrictions();
        let mut cursor = start;
        let mut remaining = duration;

        loop {
            cursor = advance_to_restriction(&query, cursor)?;
            if remaining.is_zero() {
                break;
            }

            let window = query.next_matching_window(cursor)?;
            let to_period_end = window.time_to_period_end(cursor.time())?;

            if remaining >= to_period_end {
                cursor = at_hour(cursor.date(), window.end_hour());
                remaining = remaining - to_period_end;
            } else {
                cursor = cursor.checked_add_signed(remaining).ok_or_else(|| {
                    ParkingError::DateOutOfRange {
                        message: format!("{} plus {} minutes", cursor, remaining.num_minutes()),
                    }
                })?;
                remaining = Duration::zero();
            }

            trace!(
                cursor = %cursor,
                window = %window,
                remaining_seconds = remaining.num_seconds(),
                "Spent charged time"
            );

            if remaining.is_zero() {
                break;
            }
        }

        debug!(
            start = %start,
            duration_minutes = duration.num_minutes(),
            ending = %cursor,
            "Computed ending instant"
        );
        Ok(cursor)
    }
}

impl fmt::Debug for ExpenditureEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExpenditureEngine")
            .field("calendar", &self.calendar)
            .finish_non_exhaustive()
    }
}

/// Moves `from` to the start of the next enforcement window, unless it is
/// already inside one.
///
/// Free month, free day and free hours are each checked once, in that order,
/// against the cursor left by the previous check.
fn advance_to_restriction(
    query: &RestrictionQuery<'_>,
    from: NaiveDateTime,
) -> ParkingResult<NaiveDateTime> {
    if query.is_restricted_time_period(from) {
        return Ok(from);
    }

    let mut cursor = from;

    if query.is_free_month(cursor) {
        let exemption = query.matching_month_exemption(cursor)?;
        cursor = exemption.next_restricted_instant(cursor.date())?;
        trace!(cursor = %cursor, month = exemption.month(), "Skipped free month");
    }

    if query.is_free_day(cursor) {
        cursor = start_of_next_day(cursor)?;
        trace!(cursor = %cursor, "Skipped free day");
    }

    if query.is_free_time_period(cursor) {
        cursor = query.next_restriction_start(cursor)?;
        trace!(cursor = %cursor, "Skipped to next enforcement window");
    }

    Ok(cursor)
}
