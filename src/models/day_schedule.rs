//! Per-weekday enforcement schedule.
//!
//! A [`DaySchedule`] ties a weekday to the set of hour windows during which
//! parking is charged. Overlapping or touching windows are merged when the
//! schedule is built, and the result is frozen.

use chrono::{NaiveTime, Weekday};

use super::interval::Interval;

/// The enforcement windows for one day of the week.
///
/// Windows are pairwise non-overlapping and sorted by start hour.
///
/// # Example
///
/// ```
/// use parking_meter::models::{DaySchedule, Interval};
/// use chrono::Weekday;
///
/// let schedule = DaySchedule::new(
///     Weekday::Mon,
///     [
///         Interval::new(1, 2).unwrap(),
///         Interval::new(3, 4).unwrap(),
///         Interval::new(2, 5).unwrap(),
///         Interval::new(22, 24).unwrap(),
///     ],
/// );
/// assert_eq!(
///     schedule.windows(),
///     &[Interval::new(1, 5).unwrap(), Interval::new(22, 24).unwrap()]
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySchedule {
    weekday: Weekday,
    windows: Vec<Interval>,
}

impl DaySchedule {
    /// Builds a schedule by inserting each candidate window in turn.
    pub fn new<I>(weekday: Weekday, candidates: I) -> Self
    where
        I: IntoIterator<Item = Interval>,
    {
        let mut windows = Vec::new();
        for candidate in candidates {
            insert_merging(&mut windows, candidate);
        }
        windows.sort_by_key(|window| (window.start_hour(), window.end_hour()));

        Self { weekday, windows }
    }

    /// The weekday this schedule applies to.
    pub fn weekday(&self) -> Weekday {
        self.weekday
    }

    /// The merged windows, earliest first.
    pub fn windows(&self) -> &[Interval] {
        &self.windows
    }

    /// Returns the window containing `time`, if any.
    pub fn window_containing(&self, time: NaiveTime) -> Option<&Interval> {
        self.windows.iter().find(|window| window.contains(time))
    }

    /// Returns the earliest non-empty window starting at or after `hour`.
    pub fn first_window_starting_from(&self, hour: u32) -> Option<&Interval> {
        self.windows
            .iter()
            .find(|window| !window.is_empty() && window.start_hour() >= hour)
    }

    /// Returns true if at least one window can contain an instant.
    pub fn has_enforceable_window(&self) -> bool {
        self.windows.iter().any(|window| !window.is_empty())
    }
}

/// Folds `candidate` into `windows`, absorbing every window it overlaps.
fn insert_merging(windows: &mut Vec<Interval>, candidate: Interval) {
    let mut merged = candidate;

    // Absorbing a window can widen `merged` enough to reach another one, so
    // keep scanning until nothing but an identical window overlaps.
    while let Some(position) = windows
        .iter()
        .position(|window| window.overlaps_with(&merged) && *window != merged)
    {
        let absorbed = windows.remove(position);
        merged = merged.merge_with(&absorbed);
    }

    if !windows.contains(&merged) {
        windows.push(merged);
    }
}
