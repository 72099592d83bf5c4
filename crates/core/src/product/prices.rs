//! Filtered currency-to-price mapping.
//!
//! A price list keeps only entries naming a recognized currency with a
//! strictly positive value. Anything else is dropped silently: malformed
//! entries in an input mapping are ignored, never rejected. This is the one
//! place in the system where validation filters instead of failing.

use std::collections::BTreeMap;
use std::str::FromStr;

use cagnotte_shared::Currency;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// Price list for a product, at most one price per currency.
///
/// The filtering rule is applied on every way in, including
/// deserialization, so a constructed list is always clean.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Prices(BTreeMap<Currency, Decimal>);

impl Prices {
    /// Builds a price list from typed entries, dropping non-positive values.
    #[must_use]
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Currency, Decimal)>,
    {
        Self(
            entries
                .into_iter()
                .filter(|(_, value)| *value > Decimal::ZERO)
                .collect(),
        )
    }

    /// Builds a price list from string-coded entries.
    ///
    /// Entries with an unrecognized currency code are dropped, along with
    /// non-positive values.
    #[must_use]
    pub fn from_code_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, Decimal)>,
    {
        Self::from_entries(
            entries
                .into_iter()
                .filter_map(|(code, value)| Currency::from_str(code).ok().map(|c| (c, value))),
        )
    }

    /// Currencies with a price on this list, in code order.
    #[must_use]
    pub fn currencies(&self) -> Vec<Currency> {
        self.0.keys().copied().collect()
    }

    /// Looks up the price for a currency.
    #[must_use]
    pub fn get(&self, currency: Currency) -> Option<Decimal> {
        self.0.get(&currency).copied()
    }

    /// Returns true if the list has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of priced currencies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl FromIterator<(Currency, Decimal)> for Prices {
    fn from_iter<I: IntoIterator<Item = (Currency, Decimal)>>(iter: I) -> Self {
        Self::from_entries(iter)
    }
}

impl<'de> Deserialize<'de> for Prices {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = BTreeMap::<String, Decimal>::deserialize(deserializer)?;
        Ok(Self::from_code_entries(
            raw.iter().map(|(code, value)| (code.as_str(), *value)),
        ))
    }
}
