//! Parking meter restriction calendar engine.
//!
//! This crate models when on-street parking is charged (per-weekday hour
//! windows, exempt months and public holidays) and computes the instant at
//! which purchased parking time runs out once the free gaps between windows
//! are skipped.
//! A coin-operated [`meter::ParkingMeter`] sits on top of the engine.

#![warn(missing_docs)]

pub mod calculation;
pub mod clock;
pub mod config;
pub mod error;
pub mod meter;
pub mod models;
