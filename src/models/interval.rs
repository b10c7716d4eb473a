//! Hour-of-day enforcement window.
//!
//! This module defines the [`Interval`] type, a half-open `[start, end)` range
//! of whole hours used to describe when parking fees apply within a day.

use std::fmt;

use chrono::{Duration, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{ParkingError, ParkingResult};

/// Number of hours in a day; the largest valid bound.
pub const HOURS_PER_DAY: i32 = 24;

/// A half-open range of hours `[start, end)` within a single day.
///
/// A time of day `t` is contained iff `start <= t < end`, where `t` is measured
/// in fractional hours since midnight. An end of 24 reaches midnight of the
/// following day.
///
/// # Example
///
/// ```
/// use parking_meter::models::Interval;
/// use chrono::NaiveTime;
///
/// let morning = Interval::new(8, 12).unwrap();
/// assert!(morning.contains(NaiveTime::from_hms_opt(11, 59, 59).unwrap()));
/// assert!(!morning.contains(NaiveTime::from_hms_opt(12, 0, 0).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "IntervalBounds", into = "IntervalBounds")]
pub struct Interval {
    start: u32,
    end: u32,
}

/// Unvalidated interval bounds as they appear on the wire.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct IntervalBounds {
    start: i32,
    end: i32,
}

impl TryFrom<IntervalBounds> for Interval {
    type Error = ParkingError;

    fn try_from(bounds: IntervalBounds) -> ParkingResult<Self> {
        Interval::new(bounds.start, bounds.end)
    }
}

impl From<Interval> for IntervalBounds {
    fn from(interval: Interval) -> Self {
        IntervalBounds {
            start: interval.start as i32,
            end: interval.end as i32,
        }
    }
}

impl Interval {
    /// Creates a new interval, validating both bounds.
    ///
    /// # Errors
    ///
    /// Returns [`ParkingError::InvalidRange`] if either bound lies outside
    /// `0..=24` or if `end < start`.
    pub fn new(start: i32, end: i32) -> ParkingResult<Self> {
        let invalid = |reason: &str| ParkingError::InvalidRange {
            start,
            end,
            reason: reason.to_string(),
        };

        if !(0..=HOURS_PER_DAY).contains(&start) {
            return Err(invalid("start is not a valid hour of the day"));
        }
        if !(0..=HOURS_PER_DAY).contains(&end) {
            return Err(invalid("end is not a valid hour of the day"));
        }
        if end < start {
            return Err(invalid("end hour is before start hour"));
        }

        Ok(Self {
            start: start as u32,
            end: end as u32,
        })
    }

    /// The first hour of the window (inclusive).
    pub fn start_hour(&self) -> u32 {
        self.start
    }

    /// The hour the window closes (exclusive).
    pub fn end_hour(&self) -> u32 {
        self.end
    }

    /// The length of the window.
    pub fn length(&self) -> Duration {
        Duration::hours(i64::from(self.end - self.start))
    }

    /// Returns true if the window contains no instant at all.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns true if `time` falls within `[start, end)`.
    pub fn contains(&self, time: NaiveTime) -> bool {
        let offset = since_midnight(time);
        offset >= self.start_offset() && offset < self.end_offset()
    }

    /// Returns the time left between `time` and the end of the window.
    ///
    /// # Errors
    ///
    /// Returns [`ParkingError::PreconditionViolation`] if `time` is not inside
    /// the window.
    pub fn time_to_period_end(&self, time: NaiveTime) -> ParkingResult<Duration> {
        if !self.contains(time) {
            return Err(ParkingError::PreconditionViolation {
                message: format!("{} is not part of the period {}", time, self),
            });
        }

        Ok(self.end_offset() - since_midnight(time))
    }

    /// Returns true if the two windows share any hour or touch at a bound.
    ///
    /// Touching windows such as `[1, 2)` and `[2, 3)` count as overlapping so
    /// that adjacent windows coalesce when merged.
    pub fn overlaps_with(&self, other: &Interval) -> bool {
        self.encloses(other)
            || other.encloses(self)
            || self.shares_bound_with(other)
            || self.starts_inside(other)
            || other.starts_inside(self)
    }

    /// Returns the smallest window covering both.
    ///
    /// Only meaningful for overlapping windows; merging disjoint windows also
    /// covers the gap between them.
    pub fn merge_with(&self, other: &Interval) -> Interval {
        Interval {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    fn start_offset(&self) -> Duration {
        Duration::hours(i64::from(self.start))
    }

    fn end_offset(&self) -> Duration {
        Duration::hours(i64::from(self.end))
    }

    fn encloses(&self, other: &Interval) -> bool {
        self.start <= other.start && self.end >= other.end
    }

    fn shares_bound_with(&self, other: &Interval) -> bool {
        self.start == other.start
            || self.start == other.end
            || self.end == other.start
            || self.end == other.end
    }

    fn starts_inside(&self, other: &Interval) -> bool {
        self.start > other.start && self.start < other.end
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:02}h, {:02}h)", self.start, self.end)
    }
}

/// Time elapsed since midnight, with sub-second precision.
fn since_midnight(time: NaiveTime) -> Duration {
    time.signed_duration_since(NaiveTime::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interval(start: i32, end: i32) -> Interval {
        Interval::new(start, end).unwrap()
    }

    fn time(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    #[test]
    fn test_new_accepts_full_day() {
        let day = interval(0, 24);
        assert_eq!(day.start_hour(), 0);
        assert_eq!(day.end_hour(), 24);
        assert_eq!(day.length(), Duration::hours(24));
    }

    #[test]
    fn test_new_rejects_negative_start() {
        let err = Interval::new(-1, 5).unwrap_err();
        assert!(matches!(err, ParkingError::InvalidRange { start: -1, end: 5, .. }));
    }

    #[test]
    fn test_new_rejects_start_after_midnight() {
        assert!(matches!(
            Interval::new(25, 25),
            Err(ParkingError::InvalidRange { start: 25, .. })
        ));
    }

    #[test]
    fn test_new_rejects_end_out_of_range() {
        assert!(Interval::new(2, 25).is_err());
        assert!(Interval::new(0, -3).is_err());
    }

    #[test]
    fn test_new_rejects_reversed_bounds() {
        let err = Interval::new(12, 8).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid interval [12, 8): end hour is before start hour"
        );
    }

    #[test]
    fn test_empty_interval_contains_nothing() {
        let empty = interval(5, 5);
        assert!(empty.is_empty());
        assert!(!empty.contains(time(5, 0)));
    }

    #[test]
    fn test_contains_is_half_open() {
        let window = interval(10, 11);
        assert!(window.contains(time(10, 0)));
        assert!(window.contains(time(10, 59)));
        assert!(!window.contains(time(11, 0)));
        assert!(!window.contains(time(9, 59)));
    }

    #[test]
    fn test_contains_until_end_of_day() {
        let evening = interval(22, 24);
        assert!(evening.contains(NaiveTime::from_hms_opt(23, 59, 59).unwrap()));
    }

    #[test]
    fn test_time_to_period_end() {
        let window = interval(10, 11);
        assert_eq!(
            window.time_to_period_end(time(10, 30)).unwrap(),
            Duration::minutes(30)
        );
        assert_eq!(
            window.time_to_period_end(time(10, 0)).unwrap(),
            Duration::hours(1)
        );
    }

    #[test]
    fn test_time_to_period_end_outside_period_is_precondition_violation() {
        let err = interval(10, 11).time_to_period_end(time(12, 0)).unwrap_err();
        assert!(err.is_precondition_violation());
    }

    #[test]
    fn test_touching_intervals_overlap() {
        assert!(interval(1, 2).overlaps_with(&interval(2, 3)));
        assert!(interval(2, 3).overlaps_with(&interval(1, 2)));
    }

    #[test]
    fn test_nested_intervals_overlap() {
        assert!(interval(1, 10).overlaps_with(&interval(3, 4)));
        assert!(interval(3, 4).overlaps_with(&interval(1, 10)));
    }

    #[test]
    fn test_partially_overlapping_intervals() {
        assert!(interval(1, 5).overlaps_with(&interval(3, 8)));
        assert!(interval(3, 8).overlaps_with(&interval(1, 5)));
    }

    #[test]
    fn test_disjoint_intervals_do_not_overlap() {
        assert!(!interval(1, 2).overlaps_with(&interval(3, 4)));
        assert!(!interval(3, 4).overlaps_with(&interval(1, 2)));
    }

    #[test]
    fn test_merge_with_spans_both() {
        assert_eq!(interval(1, 4).merge_with(&interval(2, 5)), interval(1, 5));
        assert_eq!(interval(2, 5).merge_with(&interval(1, 4)), interval(1, 5));
    }

    #[test]
    fn test_merge_with_self_is_identity() {
        let window = interval(8, 12);
        assert_eq!(window.merge_with(&window), window);
    }

    #[test]
    fn test_merge_disjoint_covers_gap() {
        assert_eq!(interval(1, 2).merge_with(&interval(5, 6)), interval(1, 6));
    }

    #[test]
    fn test_display() {
        assert_eq!(interval(8, 12).to_string(), "[08h, 12h)");
    }

    #[test]
    fn test_serialization_round_trip() {
        let window = interval(14, 18);
        let json = serde_json::to_string(&window).unwrap();
        assert_eq!(json, r#"{"start":14,"end":18}"#);

        let deserialized: Interval = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, window);
    }

    #[test]
    fn test_deserialization_rejects_invalid_bounds() {
        let result: Result<Interval, _> = serde_json::from_str(r#"{"start":18,"end":14}"#);
        assert!(result.is_err());
    }
}
