//! Property-based tests for wallet balance operations.

use proptest::prelude::*;
use rust_decimal::Decimal;

use cagnotte_shared::Currency;

use super::{Wallet, WalletError};

/// Strategy for non-negative cent amounts (0.00 to 10,000.00).
fn cent_amount() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Adding then removing the same amount restores the balance exactly.
    #[test]
    fn prop_add_remove_round_trip(initial in cent_amount(), amount in cent_amount()) {
        let mut wallet = Wallet::new(Currency::Eur);
        wallet.set_balance(initial).unwrap();

        wallet.add_funds(amount).unwrap();
        wallet.remove_funds(amount).unwrap();

        prop_assert_eq!(wallet.balance(), initial);
    }

    /// Removing more than the balance is always refused without mutation.
    #[test]
    fn prop_overdraft_always_refused(balance in cent_amount(), extra in 1i64..1_000_000i64) {
        let mut wallet = Wallet::new(Currency::Usd);
        wallet.set_balance(balance).unwrap();
        let requested = balance + Decimal::new(extra, 2);

        let result = wallet.remove_funds(requested);

        // Bound separately: a brace pattern inside prop_assert! would be
        // stringified into its format string
        let refused = matches!(result, Err(WalletError::InsufficientFunds { .. }));
        prop_assert!(refused);
        prop_assert_eq!(wallet.balance(), balance);
    }

    /// No sequence of adds and removes drives the balance negative.
    #[test]
    fn prop_balance_never_negative(
        operations in prop::collection::vec((-100_000i64..100_000i64), 1..20),
    ) {
        let mut wallet = Wallet::new(Currency::Eur);

        for cents in operations {
            let amount = Decimal::new(cents.abs(), 2);
            if cents < 0 {
                // Overdrafts are refused and leave the balance alone
                let _ = wallet.remove_funds(amount);
            } else {
                wallet.add_funds(amount).unwrap();
            }
            prop_assert!(wallet.balance() >= Decimal::ZERO);
        }
    }

    /// Negative amounts are rejected by both add and remove.
    #[test]
    fn prop_negative_amounts_rejected(balance in cent_amount(), cents in 1i64..1_000_000i64) {
        let mut wallet = Wallet::new(Currency::Eur);
        wallet.set_balance(balance).unwrap();
        let negative = Decimal::new(-cents, 2);

        prop_assert!(matches!(
            wallet.add_funds(negative),
            Err(WalletError::InvalidAmount(_))
        ));
        prop_assert!(matches!(
            wallet.remove_funds(negative),
            Err(WalletError::InvalidAmount(_))
        ));
        prop_assert_eq!(wallet.balance(), balance);
    }
}
