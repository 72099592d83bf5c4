//! Single-currency wallet with hard balance validation.
//!
//! A wallet holds a balance in exactly one currency and the balance can
//! never go negative. Every mutation validates its argument up front, so a
//! failed operation leaves the wallet untouched.

pub mod error;

#[cfg(test)]
mod props;

pub use error::WalletError;

use cagnotte_shared::Currency;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single-currency balance holder.
///
/// Constructed empty; funds move only through the validated operations, and
/// deserialization runs through the same validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "WalletRepr")]
pub struct Wallet {
    currency: Currency,
    balance: Decimal,
}

/// Raw wallet shape used to validate incoming data.
#[derive(Debug, Deserialize)]
struct WalletRepr {
    currency: Currency,
    balance: Decimal,
}

impl TryFrom<WalletRepr> for Wallet {
    type Error = WalletError;

    fn try_from(repr: WalletRepr) -> Result<Self, Self::Error> {
        let mut wallet = Self::new(repr.currency);
        wallet.set_balance(repr.balance)?;
        Ok(wallet)
    }
}

impl Wallet {
    /// Creates an empty wallet in the given currency.
    #[must_use]
    pub const fn new(currency: Currency) -> Self {
        Self {
            currency,
            balance: Decimal::ZERO,
        }
    }

    /// The wallet's currency.
    #[must_use]
    pub const fn currency(&self) -> Currency {
        self.currency
    }

    /// The current balance.
    #[must_use]
    pub const fn balance(&self) -> Decimal {
        self.balance
    }

    /// Returns true if the balance is strictly positive.
    #[must_use]
    pub fn has_funds(&self) -> bool {
        self.balance > Decimal::ZERO
    }

    /// Replaces the balance with an exact value.
    ///
    /// # Errors
    ///
    /// Returns [`WalletError::InvalidBalance`] if `balance` is negative.
    pub fn set_balance(&mut self, balance: Decimal) -> Result<(), WalletError> {
        if balance < Decimal::ZERO {
            return Err(WalletError::InvalidBalance(balance));
        }
        self.balance = balance;
        Ok(())
    }

    /// Adds a non-negative amount to the balance.
    ///
    /// # Errors
    ///
    /// Returns [`WalletError::InvalidAmount`] if `amount` is negative.
    pub fn add_funds(&mut self, amount: Decimal) -> Result<(), WalletError> {
        if amount < Decimal::ZERO {
            return Err(WalletError::InvalidAmount(amount));
        }
        self.balance += amount;
        Ok(())
    }

    /// Removes a non-negative amount from the balance.
    ///
    /// # Errors
    ///
    /// Returns [`WalletError::InvalidAmount`] if `amount` is negative, or
    /// [`WalletError::InsufficientFunds`] if `amount` exceeds the balance.
    pub fn remove_funds(&mut self, amount: Decimal) -> Result<(), WalletError> {
        if amount < Decimal::ZERO {
            return Err(WalletError::InvalidAmount(amount));
        }
        if amount > self.balance {
            return Err(WalletError::InsufficientFunds {
                requested: amount,
                available: self.balance,
            });
        }
        self.balance -= amount;
        Ok(())
    }
}
