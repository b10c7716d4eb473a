//! The coin-operated meter façade.
//!
//! A [`ParkingMeter`] accumulates coins, prices them into charged parking
//! time and asks the [`ExpenditureEngine`](crate::calculation::ExpenditureEngine)
//! when that time runs out.

mod parking_meter;

pub use parking_meter::ParkingMeter;
