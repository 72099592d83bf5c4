//! Wallet error types.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised by wallet balance operations.
///
/// Every variant is a precondition violation: the operation aborts before
/// any mutation, so a failed call leaves the wallet exactly as it was.
#[derive(Debug, Error)]
pub enum WalletError {
    /// Attempt to set a negative balance directly.
    #[error("Invalid balance: {0}")]
    InvalidBalance(Decimal),

    /// Negative amount passed to an add or remove operation.
    #[error("Invalid amount: {0}")]
    InvalidAmount(Decimal),

    /// Remove amount exceeds the current balance.
    #[error("Insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds {
        /// Amount the caller tried to remove.
        requested: Decimal,
        /// Balance available at the time of the call.
        available: Decimal,
    },
}
