//! Core ledger logic for Cagnotte.
//!
//! This crate contains pure business logic with ZERO web or database
//! dependencies. All domain types, validation rules, and money movements
//! live here.
//!
//! # Modules
//!
//! - `wallet` - Single-currency balance holder with hard validation
//! - `product` - Priced goods with category tax rates and price filtering
//! - `person` - Wallet owners orchestrating transfers, divisions, purchases
//! - `allocation` - Equal splitting with exact remainder accounting

pub mod allocation;
pub mod person;
pub mod product;
pub mod wallet;
