//! Public holiday computation.
//!
//! Parking is free on French public holidays. Eight of them fall on a fixed
//! date every year; the other three are offsets from Easter Sunday.

use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;

const FIRST_GREGORIAN_YEAR: i32 = 1583;

/// A holiday falling on the same month and day every year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedHoliday {
    /// Month of the year (1 = January).
    pub month: u32,
    /// Day of the month.
    pub day: u32,
    /// Holiday name.
    pub name: &'static str,
}

/// Holidays with a fixed calendar date.
pub const FIXED_HOLIDAYS: [FixedHoliday; 8] = [
    FixedHoliday { month: 1, day: 1, name: "New Year's Day" },
    FixedHoliday { month: 5, day: 1, name: "Labour Day" },
    FixedHoliday { month: 5, day: 8, name: "Victory in Europe Day" },
    FixedHoliday { month: 7, day: 14, name: "Bastille Day" },
    FixedHoliday { month: 8, day: 15, name: "Assumption" },
    FixedHoliday { month: 11, day: 1, name: "All Saints' Day" },
    FixedHoliday { month: 11, day: 11, name: "Armistice Day" },
    FixedHoliday { month: 12, day: 25, name: "Christmas Day" },
];

/// Holidays defined as a number of days after Easter Sunday.
pub const EASTER_OFFSET_HOLIDAYS: [(u64, &str); 3] = [
    (1, "Easter Monday"),
    (39, "Ascension Day"),
    (50, "Whit Monday"),
];

/// A concrete holiday in a given year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Holiday {
    /// The date of the holiday.
    pub date: NaiveDate,
    /// The name of the holiday.
    pub name: &'static str,
}

/// Computes the date of Easter Sunday in the Gregorian calendar.
///
/// Uses the integer-only century/Golden-number method. Returns `None` for
/// years before the Gregorian reform (1583) and for unrepresentable dates.
///
/// # Example
///
/// ```
/// use parking_meter::calculation::easter_date;
/// use chrono::NaiveDate;
///
/// assert_eq!(easter_date(2014), NaiveDate::from_ymd_opt(2014, 4, 20));
/// assert_eq!(easter_date(2015), NaiveDate::from_ymd_opt(2015, 4, 5));
/// ```
pub fn easter_date(year: i32) -> Option<NaiveDate> {
    if year < FIRST_GREGORIAN_YEAR {
        return None;
    }

    let century = year / 100;
    let golden = year - 19 * (year / 19);
    let k = (century - 17) / 25;

    let mut i = century - century / 4 - (century - k) / 3 + 19 * golden + 15;
    i -= 30 * (i / 30);
    i -= (i / 28) * (1 - (i / 28) * (29 / (i + 1)) * ((21 - golden) / 11));

    let mut j = year + year / 4 + i + 2 - century + century / 4;
    j -= 7 * (j / 7);

    let l = i - j;
    let month = 3 + (l + 40) / 44;
    let day = l + 28 - 31 * (month / 4);

    NaiveDate::from_ymd_opt(year, u32::try_from(month).ok()?, u32::try_from(day).ok()?)
}

/// Returns the eleven public holidays of `year`, ordered by date.
///
/// # Example
///
/// ```
/// use parking_meter::calculation::holidays_in_year;
/// use chrono::NaiveDate;
///
/// let holidays = holidays_in_year(2014);
/// assert_eq!(holidays.len(), 11);
/// assert!(holidays.iter().any(|h| h.date == NaiveDate::from_ymd_opt(2014, 6, 9).unwrap()));
/// ```
pub fn holidays_in_year(year: i32) -> Vec<Holiday> {
    let fixed = FIXED_HOLIDAYS.iter().filter_map(|holiday| {
        NaiveDate::from_ymd_opt(year, holiday.month, holiday.day).map(|date| Holiday {
            date,
            name: holiday.name,
        })
    });

    let easter = easter_date(year);
    let moveable = EASTER_OFFSET_HOLIDAYS.iter().filter_map(|&(offset, name)| {
        easter
            .and_then(|easter| easter.checked_add_days(Days::new(offset)))
            .map(|date| Holiday { date, name })
    });

    let mut holidays: Vec<Holiday> = fixed.chain(moveable).collect();
    holidays.sort_by_key(|holiday| holiday.date);
    holidays
}

/// Returns true if `date` is a public holiday.
pub fn is_holiday(date: NaiveDate) -> bool {
    let fixed = FIXED_HOLIDAYS
        .iter()
        .any(|holiday| holiday.month == date.month() && holiday.day == date.day());

    fixed
        || easter_date(date.year()).is_some_and(|easter| {
            EASTER_OFFSET_HOLIDAYS
                .iter()
                .any(|&(offset, _)| easter.checked_add_days(Days::new(offset)) == Some(date))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_easter_before_gregorian_reform_is_undefined() {
        assert_eq!(easter_date(1582), None);
        assert_eq!(easter_date(-40), None);
        assert!(!is_holiday(make_date("1500-04-20")));
        assert_eq!(holidays_in_year(1500).len(), 8);
    }

    #[test]
    fn test_easter_known_years() {
        assert_eq!(easter_date(2000), Some(make_date("2000-04-23")));
        assert_eq!(easter_date(2014), Some(make_date("2014-04-20")));
        assert_eq!(easter_date(2015), Some(make_date("2015-04-05")));
        assert_eq!(easter_date(2019), Some(make_date("2019-04-21")));
        assert_eq!(easter_date(2024), Some(make_date("2024-03-31")));
        assert_eq!(easter_date(2038), Some(make_date("2038-04-25")));
        assert_eq!(easter_date(2285), Some(make_date("2285-03-22")));
    }

    #[test]
    fn test_easter_is_always_a_sunday() {
        for year in 1583..2500 {
            let easter = easter_date(year).unwrap();
            assert_eq!(easter.weekday(), chrono::Weekday::Sun, "year {}", year);
        }
    }

    #[test]
    fn test_holidays_2014() {
        let dates: Vec<NaiveDate> = holidays_in_year(2014).iter().map(|h| h.date).collect();
        let expected: Vec<NaiveDate> = [
            "2014-01-01",
            "2014-04-21",
            "2014-05-01",
            "2014-05-08",
            "2014-05-29",
            "2014-06-09",
            "2014-07-14",
            "2014-08-15",
            "2014-11-01",
            "2014-11-11",
            "2014-12-25",
        ]
        .iter()
        .map(|d| make_date(d))
        .collect();

        assert_eq!(dates, expected);
    }

    #[test]
    fn test_holiday_names() {
        let holidays = holidays_in_year(2015);
        let whit_monday = holidays.iter().find(|h| h.name == "Whit Monday").unwrap();
        assert_eq!(whit_monday.date, make_date("2015-05-25"));
    }

    #[test]
    fn test_is_holiday() {
        assert!(is_holiday(make_date("2014-12-25")));
        assert!(is_holiday(make_date("2014-04-21")));
        assert!(!is_holiday(make_date("2014-12-26")));
        assert!(!is_holiday(make_date("2014-04-20")));
    }
}
