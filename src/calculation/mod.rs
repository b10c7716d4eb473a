//! Calculation logic for the parking meter engine.
//!
//! This module contains the public holiday calendar, the restriction status
//! queries over a [`CalendarConfiguration`](crate::config::CalendarConfiguration),
//! the purchased-time expenditure engine, and the money to time pricing table.

mod expenditure;
mod holidays;
mod pricing;
mod restriction;

pub use expenditure::{ExpenditureEngine, ExpenditureEngineBuilder};
pub use holidays::{
    EASTER_OFFSET_HOLIDAYS, FIXED_HOLIDAYS, FixedHoliday, Holiday, easter_date, holidays_in_year,
    is_holiday,
};
pub use pricing::{PriceTier, PricingTable};
pub use restriction::RestrictionQuery;
