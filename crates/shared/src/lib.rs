//! Shared money types for Cagnotte.
//!
//! This crate provides the foundational types used across all other crates:
//! - The closed currency registry
//! - Money rounding at cent precision

pub mod types;

pub use types::{Currency, InvalidCurrency, MONEY_DP, round_money};
