//! Parking ticket issued by the meter.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The outcome of a parking purchase.
///
/// Records what was paid, how much enforced time it bought, and the instant
/// at which that time runs out once the free gaps between windows are skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParkingTicket {
    /// When the ticket was issued.
    pub issued_at: NaiveDateTime,
    /// Total money inserted.
    pub amount_paid: Decimal,
    /// Enforced minutes bought by `amount_paid`.
    pub purchased_minutes: i64,
    /// When the purchased time is used up.
    pub expires_at: NaiveDateTime,
}
