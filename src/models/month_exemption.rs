//! Month-long enforcement exemptions.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{ParkingError, ParkingResult};

/// A calendar month during which parking is free all month long.
///
/// # Example
///
/// ```
/// use parking_meter::models::MonthExemption;
/// use chrono::NaiveDate;
///
/// let august = MonthExemption::new(8).unwrap();
/// let date = NaiveDate::from_ymd_opt(2014, 8, 12).unwrap();
/// assert!(august.applies_to(date));
/// assert_eq!(
///     august.next_restricted_instant(date).unwrap(),
///     NaiveDate::from_ymd_opt(2014, 9, 1).unwrap().and_hms_opt(0, 0, 0).unwrap()
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthExemption {
    month: u32,
}

impl MonthExemption {
    /// Creates an exemption for `month` (1 = January).
    ///
    /// # Errors
    ///
    /// Returns [`ParkingError::InvalidMonth`] if `month` is not in `1..=12`.
    pub fn new(month: u32) -> ParkingResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(ParkingError::InvalidMonth { month });
        }
        Ok(Self { month })
    }

    /// The exempt month (1 = January).
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Returns true if `date` falls in the exempt month.
    pub fn applies_to(&self, date: NaiveDate) -> bool {
        date.month() == self.month
    }

    /// Midnight on the first day of the month following the exemption.
    ///
    /// The year is taken from `date`; a December exemption rolls over into
    /// January of the following year.
    pub fn next_restricted_instant(&self, date: NaiveDate) -> ParkingResult<NaiveDateTime> {
        let (year, month) = if self.month == 12 {
            (date.year() + 1, 1)
        } else {
            (date.year(), self.month + 1)
        };

        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|first| first.and_time(NaiveTime::default()))
            .ok_or_else(|| ParkingError::DateOutOfRange {
                message: format!("first day of month {} in year {}", month, year),
            })
    }
}
