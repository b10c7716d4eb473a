//! Error types for the parking meter engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while building a restriction
//! calendar, querying it, or spending purchased time against it.

use std::fmt;

use chrono::Weekday;
use rust_decimal::Decimal;
use thiserror::Error;

/// Identifies the registry slot a calendar rule occupies.
///
/// Used to report which weekday or month a duplicate rule was registered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKey {
    /// A weekday schedule slot.
    Weekday(Weekday),
    /// A month exemption slot (1 = January).
    Month(u32),
}

impl fmt::Display for RuleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleKey::Weekday(weekday) => write!(f, "weekday {}", weekday),
            RuleKey::Month(month) => write!(f, "month {}", month),
        }
    }
}

/// The main error type for the parking meter engine.
///
/// # Example
///
/// ```
/// use parking_meter::error::ParkingError;
///
/// let error = ParkingError::InvalidMonth { month: 13 };
/// assert_eq!(error.to_string(), "13 is not a valid month of the year");
/// ```
#[derive(Debug, Error)]
pub enum ParkingError {
    /// Interval bounds are outside `0..=24` or reversed.
    #[error("Invalid interval [{start}, {end}): {reason}")]
    InvalidRange {
        /// The requested start hour.
        start: i32,
        /// The requested end hour.
        end: i32,
        /// Which bound rule was broken.
        reason: String,
    },

    /// A month number outside `1..=12`.
    #[error("{month} is not a valid month of the year")]
    InvalidMonth {
        /// The rejected month number.
        month: u32,
    },

    /// A second rule was registered for an occupied weekday or month.
    #[error("A rule already exists for {key}")]
    DuplicateRule {
        /// The weekday or month that was already registered.
        key: RuleKey,
    },

    /// The calendar cannot ever consume purchased time.
    #[error("Empty configuration: {message}")]
    EmptyConfiguration {
        /// Why the configuration is unusable.
        message: String,
    },

    /// The engine was built without a time source.
    #[error("No clock was supplied")]
    MissingClock,

    /// An internal query was made outside its precondition.
    ///
    /// This indicates a caller bug rather than bad user input.
    #[error("Precondition violated: {message}")]
    PreconditionViolation {
        /// The violated precondition.
        message: String,
    },

    /// A coin value the meter does not accept.
    #[error("{value} is not a valid coin value")]
    InvalidCoin {
        /// The rejected coin value.
        value: Decimal,
    },

    /// A pricing table that cannot be evaluated.
    #[error("Invalid pricing table: {message}")]
    InvalidPricing {
        /// What is wrong with the table.
        message: String,
    },

    /// A negative amount of time was asked to be spent.
    #[error("Cannot spend a negative duration ({minutes} minutes)")]
    NegativeDuration {
        /// The requested duration in minutes.
        minutes: i64,
    },

    /// A date computation left the representable calendar range.
    #[error("Date out of range: {message}")]
    DateOutOfRange {
        /// The computation that overflowed.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

impl ParkingError {
    /// Returns true for errors that signal a caller bug rather than bad input.
    pub fn is_precondition_violation(&self) -> bool {
        matches!(self, ParkingError::PreconditionViolation { .. })
    }
}

/// A type alias for Results that return ParkingError.
pub type ParkingResult<T> = Result<T, ParkingError>;
