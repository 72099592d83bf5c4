//! Person error types.

use cagnotte_shared::Currency;
use thiserror::Error;

use crate::wallet::WalletError;

/// Errors raised by person-level money movements.
#[derive(Debug, Error)]
pub enum PersonError {
    /// Transfer between wallets holding different currencies.
    #[error("Can't give money with different currencies: {from} vs {to}")]
    TransferCurrencyMismatch {
        /// Currency of the sending wallet.
        from: Currency,
        /// Currency of the receiving wallet.
        to: Currency,
    },

    /// Purchase attempt in a currency the product is not priced in.
    #[error("Can't buy product with this wallet currency: {0}")]
    PurchaseCurrencyMismatch(Currency),

    /// Underlying wallet failure.
    #[error(transparent)]
    Wallet(#[from] WalletError),
}
