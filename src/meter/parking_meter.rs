//! Coin accumulation and ticket issuing.

use chrono::{Duration, NaiveDateTime};
use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::calculation::{ExpenditureEngine, PricingTable};
use crate::error::ParkingResult;
use crate::models::{Coin, ParkingTicket};

/// A parking meter taking coins for one purchase at a time.
///
/// # Example
///
/// ```
/// use parking_meter::calculation::ExpenditureEngine;
/// use parking_meter::clock::FixedClock;
/// use parking_meter::config::CalendarConfiguration;
/// use parking_meter::meter::ParkingMeter;
/// use parking_meter::models::{DaySchedule, Interval};
/// use chrono::{NaiveDateTime, Weekday};
/// use rust_decimal::Decimal;
///
/// let calendar = CalendarConfiguration::new()
///     .with_day_schedule(DaySchedule::new(Weekday::Mon, [Interval::new(8, 18)?]))?;
/// let now = NaiveDateTime::parse_from_str("2015-02-23 10:30:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let engine = ExpenditureEngine::builder()
///     .calendar(calendar)
///     .clock(FixedClock::new(now))
///     .build()?;
///
/// let mut meter = ParkingMeter::new(engine);
/// meter.insert_coin(Decimal::new(2, 0))?;
/// assert_eq!(meter.parking_limit()?.to_string(), "2015-02-23 11:30:00");
/// # Ok::<(), parking_meter::error::ParkingError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ParkingMeter {
    engine: ExpenditureEngine,
    pricing: PricingTable,
    total: Decimal,
}

impl ParkingMeter {
    /// Creates a meter using the standard tariff.
    pub fn new(engine: ExpenditureEngine) -> Self {
        Self::with_pricing(engine, PricingTable::standard())
    }

    /// Creates a meter using a custom tariff.
    pub fn with_pricing(engine: ExpenditureEngine, pricing: PricingTable) -> Self {
        Self {
            engine,
            pricing,
            total: Decimal::ZERO,
        }
    }

    /// The engine computing expiry instants.
    pub fn engine(&self) -> &ExpenditureEngine {
        &self.engine
    }

    /// The tariff in use.
    pub fn pricing(&self) -> &PricingTable {
        &self.pricing
    }

    /// Accepts a coin of face value `value`.
    ///
    /// # Errors
    ///
    /// Returns [`ParkingError::InvalidCoin`](crate::error::ParkingError::InvalidCoin)
    /// if `value` is not an accepted denomination. The total is unchanged.
    pub fn insert_coin(&mut self, value: Decimal) -> ParkingResult<Coin> {
        let coin = Coin::try_from(value).inspect_err(|_| {
            warn!(value = %value, "Rejected coin");
        })?;

        self.total += coin.value();
        info!(coin = ?coin, total = %self.total, "Accepted coin");
        Ok(coin)
    }

    /// Money inserted since the last reset.
    pub fn total_amount(&self) -> Decimal {
        self.total
    }

    /// Charged time the current total buys.
    pub fn purchased_duration(&self) -> Duration {
        self.pricing.duration_for_amount(self.total)
    }

    /// The instant at which the purchased time, spent from now, runs out.
    ///
    /// # Errors
    ///
    /// Propagates errors from
    /// [`ExpenditureEngine::compute_ending_instant`].
    pub fn parking_limit(&self) -> ParkingResult<NaiveDateTime> {
        self.engine
            .compute_ending_instant_from_now(self.purchased_duration())
    }

    /// Issues a ticket for the current purchase.
    ///
    /// The accumulated total is left untouched; call [`reset`](Self::reset)
    /// to start the next purchase.
    pub fn issue_ticket(&self) -> ParkingResult<ParkingTicket> {
        let issued_at = self.engine.now();
        let purchased = self.purchased_duration();
        let expires_at = self.engine.compute_ending_instant(issued_at, purchased)?;

        let ticket = ParkingTicket {
            issued_at,
            amount_paid: self.total,
            purchased_minutes: purchased.num_minutes(),
            expires_at,
        };
        info!(
            issued_at = %ticket.issued_at,
            amount_paid = %ticket.amount_paid,
            expires_at = %ticket.expires_at,
            "Issued parking ticket"
        );
        Ok(ticket)
    }

    /// Clears the accumulated total, returning what it was.
    pub fn reset(&mut self) -> Decimal {
        std::mem::take(&mut self.total)
    }
}
