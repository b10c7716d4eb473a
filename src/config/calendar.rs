//! The restriction calendar registry.

use std::collections::{BTreeMap, HashMap};

use chrono::Weekday;

use crate::error::{ParkingError, ParkingResult, RuleKey};
use crate::models::{DaySchedule, MonthExemption};

/// Registry of weekday schedules and month exemptions.
///
/// Holds at most one [`DaySchedule`] per weekday and at most one
/// [`MonthExemption`] per month. Registering a second rule for the same key
/// fails and leaves the existing rule in place.
///
/// # Example
///
/// ```
/// use parking_meter::config::CalendarConfiguration;
/// use parking_meter::models::{DaySchedule, Interval, MonthExemption};
/// use chrono::Weekday;
///
/// let calendar = CalendarConfiguration::new()
///     .with_day_schedule(DaySchedule::new(Weekday::Mon, [Interval::new(10, 11)?]))?
///     .with_month_exemption(MonthExemption::new(8)?)?;
///
/// assert!(calendar.day_schedule(Weekday::Mon).is_some());
/// assert!(calendar.day_schedule(Weekday::Tue).is_none());
/// assert!(calendar.month_exemption(8).is_some());
/// # Ok::<(), parking_meter::error::ParkingError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct CalendarConfiguration {
    day_schedules: HashMap<Weekday, DaySchedule>,
    month_exemptions: BTreeMap<u32, MonthExemption>,
}

impl CalendarConfiguration {
    /// Creates an empty calendar.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the schedule for its weekday.
    ///
    /// # Errors
    ///
    /// Returns [`ParkingError::DuplicateRule`] if that weekday already has a
    /// schedule.
    pub fn add_day_schedule(&mut self, schedule: DaySchedule) -> ParkingResult<()> {
        let weekday = schedule.weekday();
        if self.day_schedules.contains_key(&weekday) {
            return Err(ParkingError::DuplicateRule {
                key: RuleKey::Weekday(weekday),
            });
        }

        self.day_schedules.insert(weekday, schedule);
        Ok(())
    }

    /// Registers a month exemption.
    ///
    /// # Errors
    ///
    /// Returns [`ParkingError::DuplicateRule`] if that month is already exempt.
    pub fn add_month_exemption(&mut self, exemption: MonthExemption) -> ParkingResult<()> {
        let month = exemption.month();
        if self.month_exemptions.contains_key(&month) {
            return Err(ParkingError::DuplicateRule {
                key: RuleKey::Month(month),
            });
        }

        self.month_exemptions.insert(month, exemption);
        Ok(())
    }

    /// Builder form of [`add_day_schedule`](Self::add_day_schedule).
    pub fn with_day_schedule(mut self, schedule: DaySchedule) -> ParkingResult<Self> {
        self.add_day_schedule(schedule)?;
        Ok(self)
    }

    /// Builder form of [`add_month_exemption`](Self::add_month_exemption).
    pub fn with_month_exemption(mut self, exemption: MonthExemption) -> ParkingResult<Self> {
        self.add_month_exemption(exemption)?;
        Ok(self)
    }

    /// Returns the schedule registered for `weekday`.
    pub fn day_schedule(&self, weekday: Weekday) -> Option<&DaySchedule> {
        self.day_schedules.get(&weekday)
    }

    /// Iterates over every registered schedule, in no particular order.
    pub fn day_schedules(&self) -> impl Iterator<Item = &DaySchedule> {
        self.day_schedules.values()
    }

    /// Returns the exemption registered for `month`.
    pub fn month_exemption(&self, month: u32) -> Option<&MonthExemption> {
        self.month_exemptions.get(&month)
    }

    /// Iterates over every exemption, January first.
    pub fn month_exemptions(&self) -> impl Iterator<Item = &MonthExemption> {
        self.month_exemptions.values()
    }

    /// Returns true if some weekday has a window that can contain an instant.
    pub fn has_enforceable_window(&self) -> bool {
        self.day_schedules
            .values()
            .any(DaySchedule::has_enforceable_window)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Interval;

    fn monday_schedule() -> DaySchedule {
        DaySchedule::new(Weekday::Mon, [Interval::new(10, 11).unwrap()])
    }

    #[test]
    fn test_add_day_schedule() {
        let mut calendar = CalendarConfiguration::new();
        calendar.add_day_schedule(monday_schedule()).unwrap();

        assert_eq!(calendar.day_schedule(Weekday::Mon), Some(&monday_schedule()));
        assert_eq!(calendar.day_schedules().count(), 1);
    }

    #[test]
    fn test_duplicate_day_schedule_is_rejected_without_overwrite() {
        let mut calendar = CalendarConfiguration::new();
        calendar.add_day_schedule(monday_schedule()).unwrap();

        let other = DaySchedule::new(Weekday::Mon, [Interval::new(14, 18).unwrap()]);
        let err = calendar.add_day_schedule(other).unwrap_err();

        assert!(matches!(
            err,
            ParkingError::DuplicateRule {
                key: RuleKey::Weekday(Weekday::Mon)
            }
        ));
        assert_eq!(calendar.day_schedule(Weekday::Mon), Some(&monday_schedule()));
    }

    #[test]
    fn test_duplicate_month_exemption_is_rejected() {
        let mut calendar = CalendarConfiguration::new();
        calendar
            .add_month_exemption(MonthExemption::new(8).unwrap())
            .unwrap();

        let err = calendar
            .add_month_exemption(MonthExemption::new(8).unwrap())
            .unwrap_err();
        assert_eq!(err.to_string(), "A rule already exists for month 8");
        assert_eq!(calendar.month_exemptions().count(), 1);
    }

    #[test]
    fn test_builder_chain() {
        let calendar = CalendarConfiguration::new()
            .with_day_schedule(monday_schedule())
            .unwrap()
            .with_month_exemption(MonthExemption::new(12).unwrap())
            .unwrap()
            .with_month_exemption(MonthExemption::new(8).unwrap())
            .unwrap();

        let months: Vec<u32> = calendar.month_exemptions().map(|m| m.month()).collect();
        assert_eq!(months, vec![8, 12]);
    }

    #[test]
    fn test_empty_calendar_has_no_enforceable_window() {
        assert!(!CalendarConfiguration::new().has_enforceable_window());
    }

    #[test]
    fn test_schedule_without_windows_is_not_enforceable() {
        let calendar = CalendarConfiguration::new()
            .with_day_schedule(DaySchedule::new(Weekday::Mon, Vec::<Interval>::new()))
            .unwrap();
        assert!(!calendar.has_enforceable_window());
    }
}
