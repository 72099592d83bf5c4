//! Products priced per currency with category tax rates.
//!
//! A product carries a name, a category, and a filtered price list. The
//! category binds it to a fixed tax rate; prices are looked up per currency
//! and never converted.

pub mod error;
pub mod prices;

pub use error::ProductError;
pub use prices::Prices;

use cagnotte_shared::{Currency, round_money};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Product categories, each bound to a fixed tax rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Food, reduced rate.
    Food,
    /// Tech goods, standard rate.
    Tech,
    /// Alcohol, standard rate.
    Alcohol,
    /// Anything else, standard rate.
    Other,
}

impl Category {
    /// All recognized categories.
    pub const ALL: [Self; 4] = [Self::Food, Self::Tech, Self::Alcohol, Self::Other];

    /// The tax rate for this category.
    ///
    /// Food carries the reduced 10% rate; every other category carries the
    /// standard 20% rate.
    #[must_use]
    pub fn tax_rate(self) -> Decimal {
        match self {
            Self::Food => Decimal::new(10, 2),
            Self::Tech | Self::Alcohol | Self::Other => Decimal::new(20, 2),
        }
    }

    /// The lowercase label for this category.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Tech => "tech",
            Self::Alcohol => "alcohol",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Category {
    type Err = ProductError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "food" => Ok(Self::Food),
            "tech" => Ok(Self::Tech),
            "alcohol" => Ok(Self::Alcohol),
            "other" => Ok(Self::Other),
            _ => Err(ProductError::InvalidType(s.to_string())),
        }
    }
}

/// A named, categorized product priced in one or more currencies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    name: String,
    category: Category,
    prices: Prices,
}

impl Product {
    /// Creates a product from a name, a filtered price list, and a category.
    #[must_use]
    pub fn new(name: String, prices: Prices, category: Category) -> Self {
        Self {
            name,
            category,
            prices,
        }
    }

    /// The product's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The product's category.
    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    /// The filtered price list.
    #[must_use]
    pub fn prices(&self) -> &Prices {
        &self.prices
    }

    /// Replaces the price list; the same filtering rule applies on the way
    /// in via [`Prices`] construction.
    pub fn set_prices(&mut self, prices: Prices) {
        self.prices = prices;
    }

    /// The tax rate derived from the product category.
    #[must_use]
    pub fn tax_rate(&self) -> Decimal {
        self.category.tax_rate()
    }

    /// Currencies this product is priced in, in code order.
    #[must_use]
    pub fn currencies(&self) -> Vec<Currency> {
        self.prices.currencies()
    }

    /// The listed price for a currency, tax not included.
    ///
    /// # Errors
    ///
    /// Returns [`ProductError::CurrencyNotAvailable`] if this product has no
    /// price entry for `currency`.
    pub fn price(&self, currency: Currency) -> Result<Decimal, ProductError> {
        self.prices
            .get(currency)
            .ok_or(ProductError::CurrencyNotAvailable(currency))
    }

    /// The listed price for a currency with the category tax applied, at
    /// cent precision.
    ///
    /// # Errors
    ///
    /// Returns [`ProductError::CurrencyNotAvailable`] if this product has no
    /// price entry for `currency`.
    pub fn price_with_tax(&self, currency: Currency) -> Result<Decimal, ProductError> {
        let base = self.price(currency)?;
        Ok(round_money(base * (Decimal::ONE + self.tax_rate())))
    }
}
