//! Currency registry and money rounding.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Every amount in the workspace is a `rust_decimal::Decimal`.

use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of decimal places for monetary amounts.
///
/// Both supported currencies subdivide into hundredths (cents).
pub const MONEY_DP: u32 = 2;

/// A currency code outside the recognized set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid currency: {0}")]
pub struct InvalidCurrency(pub String);

/// ISO 4217 currency codes supported by the system.
///
/// The registry is closed: wallets and prices can only refer to one of these
/// codes, so an unrecognized currency is caught at the string boundary
/// (`FromStr`, deserialization) and never deeper in the money logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Euro
    Eur,
    /// US Dollar
    Usd,
}

impl Currency {
    /// All recognized currencies, in code order.
    pub const ALL: [Self; 2] = [Self::Eur, Self::Usd];

    /// The ISO 4217 code for this currency.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Eur => "EUR",
            Self::Usd => "USD",
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Currency {
    type Err = InvalidCurrency;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "EUR" => Ok(Self::Eur),
            "USD" => Ok(Self::Usd),
            _ => Err(InvalidCurrency(s.to_string())),
        }
    }
}

/// Rounds a monetary value to [`MONEY_DP`] decimal places.
///
/// Uses `RoundingStrategy::MidpointAwayFromZero`, the usual arithmetic
/// rounding of retail amounts: 0.005 rounds to 0.01.
#[must_use]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(MONEY_DP, RoundingStrategy::MidpointAwayFromZero)
}
