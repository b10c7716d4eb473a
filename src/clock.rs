//! Time source abstraction.
//!
//! The engine never reads the system time directly; it asks an injected
//! [`Clock`]. [`FixedClock`] makes every computation reproducible in tests.

use std::sync::RwLock;

use chrono::{Duration, Local, NaiveDate, NaiveDateTime};

/// A source of the current local instant.
pub trait Clock: Send + Sync {
    /// The current instant.
    fn now(&self) -> NaiveDateTime;

    /// The current date, with the time of day dropped.
    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// Reads the machine's local wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock frozen at a chosen instant until moved explicitly.
///
/// # Example
///
/// ```
/// use parking_meter::clock::{Clock, FixedClock};
/// use chrono::{Duration, NaiveDate};
///
/// let start = NaiveDate::from_ymd_opt(2015, 2, 23).unwrap().and_hms_opt(10, 30, 0).unwrap();
/// let clock = FixedClock::new(start);
/// assert_eq!(clock.now(), start);
///
/// clock.advance(Duration::minutes(30));
/// assert_eq!(clock.now().to_string(), "2015-02-23 11:00:00");
/// ```
#[derive(Debug)]
pub struct FixedClock {
    now: RwLock<NaiveDateTime>,
}

impl FixedClock {
    /// Creates a clock reading `now`.
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            now: RwLock::new(now),
        }
    }

    /// Moves the clock to `now`.
    pub fn set(&self, now: NaiveDateTime) {
        *self.now.write().unwrap_or_else(|poisoned| poisoned.into_inner()) = now;
    }

    /// Moves the clock forward by `by`.
    pub fn advance(&self, by: Duration) {
        let mut now = self.now.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        *now += by;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        *self.now.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    #[test]
    fn test_fixed_clock_reports_its_instant() {
        let clock = FixedClock::new(make_datetime("2015-02-23", "10:30:00"));
        assert_eq!(clock.now(), make_datetime("2015-02-23", "10:30:00"));
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2015, 2, 23).unwrap());
    }

    #[test]
    fn test_fixed_clock_set_and_advance() {
        let clock = FixedClock::new(make_datetime("2015-02-23", "10:30:00"));
        clock.set(make_datetime("2015-02-24", "08:00:00"));
        clock.advance(Duration::hours(1));
        assert_eq!(clock.now(), make_datetime("2015-02-24", "09:00:00"));
    }

    #[test]
    fn test_clocks_are_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SystemClock>();
        assert_send_sync::<FixedClock>();
    }
}
