//! Accepted coin denominations.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{ParkingError, ParkingResult};

/// A coin the meter accepts.
///
/// # Example
///
/// ```
/// use parking_meter::models::Coin;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let coin = Coin::try_from(Decimal::from_str("0.5").unwrap()).unwrap();
/// assert_eq!(coin, Coin::FiftyCents);
/// assert!(Coin::try_from(Decimal::from_str("0.1").unwrap()).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Coin {
    /// 0.20
    TwentyCents,
    /// 0.50
    FiftyCents,
    /// 1.00
    OneEuro,
    /// 2.00
    TwoEuros,
}

impl Coin {
    /// Every accepted coin, smallest first.
    pub const ALL: [Coin; 4] = [
        Coin::TwentyCents,
        Coin::FiftyCents,
        Coin::OneEuro,
        Coin::TwoEuros,
    ];

    /// The face value of the coin.
    pub fn value(self) -> Decimal {
        match self {
            Coin::TwentyCents => Decimal::new(2, 1),
            Coin::FiftyCents => Decimal::new(5, 1),
            Coin::OneEuro => Decimal::ONE,
            Coin::TwoEuros => Decimal::new(2, 0),
        }
    }
}

impl TryFrom<Decimal> for Coin {
    type Error = ParkingError;

    fn try_from(value: Decimal) -> ParkingResult<Self> {
        // Decimal equality ignores scale, so 0.50 matches 0.5.
        Coin::ALL
            .into_iter()
            .find(|coin| coin.value() == value)
            .ok_or(ParkingError::InvalidCoin { value })
    }
}
