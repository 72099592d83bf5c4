//! Common types used across the application.

pub mod money;

pub use money::{Currency, InvalidCurrency, MONEY_DP, round_money};
