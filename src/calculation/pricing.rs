//! Money to parking time conversion.
//!
//! Amounts are converted greedily: the largest tier not exceeding the
//! remaining amount is taken repeatedly until what is left cannot buy the
//! cheapest tier.

use chrono::Duration;
use rust_decimal::Decimal;

use crate::error::{ParkingError, ParkingResult};

/// One purchasable block of time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceTier {
    /// Price of the block.
    pub amount: Decimal,
    /// Charged time it buys.
    pub duration: Duration,
}

impl PriceTier {
    /// Creates a tier.
    pub fn new(amount: Decimal, duration: Duration) -> Self {
        Self { amount, duration }
    }
}

/// A pricing table, tiers held most expensive first.
///
/// # Example
///
/// ```
/// use parking_meter::calculation::PricingTable;
/// use chrono::Duration;
/// use rust_decimal::Decimal;
///
/// let table = PricingTable::standard();
/// assert_eq!(table.duration_for_amount(Decimal::new(10, 0)), Duration::hours(25));
/// assert_eq!(table.duration_for_amount(Decimal::new(16, 0)), Duration::hours(48));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricingTable {
    tiers: Vec<PriceTier>,
}

impl PricingTable {
    /// Builds a table from arbitrary tiers.
    ///
    /// # Errors
    ///
    /// Returns [`ParkingError::InvalidPricing`] if `tiers` is empty, if an
    /// amount is not strictly positive, or if a duration is negative.
    pub fn new(tiers: impl IntoIterator<Item = PriceTier>) -> ParkingResult<Self> {
        let mut tiers: Vec<PriceTier> = tiers.into_iter().collect();

        if tiers.is_empty() {
            return Err(ParkingError::InvalidPricing {
                message: "at least one tier is required".to_string(),
            });
        }
        if let Some(tier) = tiers.iter().find(|tier| tier.amount <= Decimal::ZERO) {
            return Err(ParkingError::InvalidPricing {
                message: format!("tier amount {} is not positive", tier.amount),
            });
        }
        if let Some(tier) = tiers.iter().find(|tier| tier.duration < Duration::zero()) {
            return Err(ParkingError::InvalidPricing {
                message: format!("tier {} buys a negative duration", tier.amount),
            });
        }

        tiers.sort_by(|a, b| b.amount.cmp(&a.amount));
        Ok(Self { tiers })
    }

    /// The standard meter tariff.
    ///
    /// | Amount | Time       |
    /// |--------|------------|
    /// | 1      | 20 minutes |
    /// | 2      | 1 hour     |
    /// | 3      | 2 hours    |
    /// | 5      | 12 hours   |
    /// | 8      | 24 hours   |
    pub fn standard() -> Self {
        let tiers = vec![
            PriceTier::new(Decimal::new(8, 0), Duration::hours(24)),
            PriceTier::new(Decimal::new(5, 0), Duration::hours(12)),
            PriceTier::new(Decimal::new(3, 0), Duration::hours(2)),
            PriceTier::new(Decimal::new(2, 0), Duration::hours(1)),
            PriceTier::new(Decimal::ONE, Duration::minutes(20)),
        ];
        Self { tiers }
    }

    /// The tiers, most expensive first.
    pub fn tiers(&self) -> &[PriceTier] {
        &self.tiers
    }

    /// The cheapest tier's price; smaller amounts buy nothing.
    pub fn minimum_amount(&self) -> Decimal {
        self.tiers
            .last()
            .map(|tier| tier.amount)
            .unwrap_or(Decimal::ZERO)
    }

    /// Returns the charged time `amount` buys.
    pub fn duration_for_amount(&self, amount: Decimal) -> Duration {
        let mut remaining = amount;
        let mut total = Duration::zero();

        while let Some(tier) = self.tiers.iter().find(|tier| tier.amount <= remaining) {
            total = total + tier.duration;
            remaining -= tier.amount;
        }

        total
    }
}

impl Default for PricingTable {
    fn default() -> Self {
        Self::standard()
    }
}
