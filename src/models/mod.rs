//! Core data models for the parking meter engine.
//!
//! This module contains the calendar building blocks (enforcement windows,
//! weekday schedules, month exemptions) and the meter's coin and ticket types.

mod coin;
mod day_schedule;
mod interval;
mod month_exemption;
mod ticket;

pub use coin::Coin;
pub use day_schedule::DaySchedule;
pub use interval::{HOURS_PER_DAY, Interval};
pub use month_exemption::MonthExemption;
pub use ticket::ParkingTicket;
