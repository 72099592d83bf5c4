//! Cagnotte demo walkthrough.
//!
//! Exercises the ledger end to end: funding, a transfer, a shared-pot
//! division, and product purchases, with every movement logged.
//!
//! Usage: cargo run --bin cagnotte

use anyhow::Context;
use rust_decimal_macros::dec;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cagnotte_core::person::Person;
use cagnotte_core::product::{Category, Prices, Product};
use cagnotte_shared::Currency;

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cagnotte=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Fund the pot and a couple of friends
    let mut pot = Person::new("Pot".to_string(), Currency::Eur);
    pot.wallet_mut()
        .set_balance(dec!(100))
        .context("funding the pot")?;
    info!(balance = %pot.wallet().balance(), "pot funded");

    let john = Person::new("John".to_string(), Currency::Eur);
    let jane = Person::new("Jane".to_string(), Currency::Eur);
    let mut bob = Person::new("Bob".to_string(), Currency::Usd);
    bob.wallet_mut().set_balance(dec!(40))?;

    // Split the pot three ways; Bob holds dollars and is skipped
    let mut friends = vec![john, jane, bob];
    pot.divide_wallet(&mut friends)
        .context("dividing the pot")?;
    for friend in &friends {
        info!(
            name = friend.name(),
            balance = %friend.wallet().balance(),
            currency = %friend.wallet().currency(),
            "after division"
        );
    }
    let [mut john, mut jane, mut bob]: [Person; 3] =
        friends.try_into().expect("exactly three friends");

    // John pays Jane back a cent he owed her
    john.transfer_funds(dec!(0.01), &mut jane)
        .context("settling up with jane")?;
    info!(
        john = %john.wallet().balance(),
        jane = %jane.wallet().balance(),
        "after transfer"
    );

    // A cross-currency transfer is refused outright
    if let Err(err) = jane.transfer_funds(dec!(10), &mut bob) {
        warn!(%err, "cross-currency transfer refused");
    }

    // Products: prices are filtered, taxes stay queryable
    let baguette = Product::new(
        "Baguette".to_string(),
        Prices::from_code_entries([("EUR", dec!(1.20)), ("GBP", dec!(1.10))]),
        Category::Food,
    );
    info!(
        product = baguette.name(),
        currencies = ?baguette.currencies(),
        tax_rate = %baguette.tax_rate(),
        price_with_tax = %baguette
            .price_with_tax(Currency::Eur)
            .context("pricing the baguette")?,
        "product listed"
    );

    john.buy_product(&baguette).context("buying a baguette")?;
    info!(balance = %john.wallet().balance(), "john bought a baguette");

    let headphones = Product::new(
        "Headphones".to_string(),
        Prices::from_entries([(Currency::Eur, dec!(75)), (Currency::Usd, dec!(80))]),
        Category::Tech,
    );

    // Jane cannot afford these yet
    if let Err(err) = jane.buy_product(&headphones) {
        warn!(%err, balance = %jane.wallet().balance(), "purchase refused");
    }

    // Bob can, in his own currency
    bob.wallet_mut().add_funds(dec!(50))?;
    bob.buy_product(&headphones).context("buying headphones")?;
    info!(balance = %bob.wallet().balance(), "bob bought headphones");

    info!("walkthrough complete");
    Ok(())
}
