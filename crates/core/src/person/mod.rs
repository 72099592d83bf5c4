//! Persons owning wallets and moving money between them.
//!
//! A person owns exactly one wallet. Cross-entity movements (transfers,
//! divisions, purchases) are orchestrated here: currency compatibility is
//! checked first, then wallets are mutated through their validated
//! operations, so a failed movement never leaves partial state behind.

pub mod error;

#[cfg(test)]
mod props;

pub use error::PersonError;

use cagnotte_shared::Currency;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::allocation::split_equal;
use crate::product::Product;
use crate::wallet::Wallet;

/// A wallet owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    name: String,
    wallet: Wallet,
}

impl Person {
    /// Creates a person with an empty wallet in the given currency.
    #[must_use]
    pub fn new(name: String, currency: Currency) -> Self {
        Self {
            name,
            wallet: Wallet::new(currency),
        }
    }

    /// The person's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Read access to the owned wallet.
    #[must_use]
    pub fn wallet(&self) -> &Wallet {
        &self.wallet
    }

    /// Mutable access to the owned wallet, for direct funding.
    pub fn wallet_mut(&mut self) -> &mut Wallet {
        &mut self.wallet
    }

    /// Returns true if the wallet holds a strictly positive balance.
    #[must_use]
    pub fn has_funds(&self) -> bool {
        self.wallet.has_funds()
    }

    /// Moves `amount` from this person's wallet to `recipient`'s wallet.
    ///
    /// Both wallets must hold the same currency. The amount is removed
    /// first; its validation guarantees the matching deposit cannot fail, so
    /// the two balances change together or not at all.
    ///
    /// # Errors
    ///
    /// Returns [`PersonError::TransferCurrencyMismatch`] if the wallet
    /// currencies differ, or propagates the wallet failure if `amount` is
    /// negative or exceeds the available balance.
    pub fn transfer_funds(
        &mut self,
        amount: Decimal,
        recipient: &mut Person,
    ) -> Result<(), PersonError> {
        if self.wallet.currency() != recipient.wallet.currency() {
            return Err(PersonError::TransferCurrencyMismatch {
                from: self.wallet.currency(),
                to: recipient.wallet.currency(),
            });
        }

        self.wallet.remove_funds(amount)?;
        recipient.wallet.add_funds(amount)?;

        debug!(
            from = %self.name,
            to = %recipient.name,
            %amount,
            currency = %self.wallet.currency(),
            "transferred funds"
        );
        Ok(())
    }

    /// Splits this person's entire balance among `recipients`.
    ///
    /// Recipients whose wallet currency differs are skipped and receive
    /// nothing. Matching recipients each get an equal cent-rounded share;
    /// the first one also absorbs the rounding remainder, so the
    /// distributed total equals the source balance exactly. The source
    /// balance is zeroed afterwards, even when no recipient matched (that
    /// path discards the funds and is logged as a warning).
    ///
    /// # Errors
    ///
    /// Propagates the wallet failure when a degenerate split pushes the
    /// first share below zero (sub-cent totals over many recipients); no
    /// balance changes in that case.
    pub fn divide_wallet(&mut self, recipients: &mut [Person]) -> Result<(), PersonError> {
        let currency = self.wallet.currency();
        let total = self.wallet.balance();

        let eligible: Vec<usize> = recipients
            .iter()
            .enumerate()
            .filter(|(_, person)| person.wallet.currency() == currency)
            .map(|(index, _)| index)
            .collect();

        if eligible.is_empty() {
            warn!(
                person = %self.name,
                %total,
                %currency,
                "no recipient matches the wallet currency, balance is discarded"
            );
            self.wallet.set_balance(Decimal::ZERO)?;
            return Ok(());
        }

        let shares = split_equal(total, eligible.len());
        for (index, share) in eligible.into_iter().zip(shares) {
            recipients[index].wallet.add_funds(share)?;
        }
        self.wallet.set_balance(Decimal::ZERO)?;

        debug!(person = %self.name, %total, %currency, "divided wallet");
        Ok(())
    }

    /// Buys `product`, deducting its listed price for the wallet currency.
    ///
    /// The deducted amount is the listed price exactly; the category tax
    /// rate stays a separately queryable fact and is not compounded in.
    ///
    /// # Errors
    ///
    /// Returns [`PersonError::PurchaseCurrencyMismatch`] if the product is
    /// not priced in the wallet's currency, or propagates the wallet
    /// failure when the balance cannot cover the price.
    pub fn buy_product(&mut self, product: &Product) -> Result<(), PersonError> {
        let currency = self.wallet.currency();
        let price = product
            .price(currency)
            .map_err(|_| PersonError::PurchaseCurrencyMismatch(currency))?;

        self.wallet.remove_funds(price)?;

        debug!(
            person = %self.name,
            product = product.name(),
            %price,
            %currency,
            "bought product"
        );
        Ok(())
    }
}
