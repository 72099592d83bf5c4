//! Property-based tests for person-level money movements.

use proptest::prelude::*;
use rust_decimal::Decimal;

use cagnotte_shared::Currency;

use super::Person;

/// Strategy for non-negative cent amounts (0.00 to 10,000.00).
fn cent_amount() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for totals of at least one unit, where every split share stays
/// non-negative.
fn unit_amount() -> impl Strategy<Value = Decimal> {
    (100i64..1_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Transfers conserve the combined balance of the two wallets.
    #[test]
    fn prop_transfer_conserves_total(initial in cent_amount(), amount in cent_amount()) {
        prop_assume!(amount <= initial);
        let mut sender = Person::new("Sender".to_string(), Currency::Eur);
        let mut receiver = Person::new("Receiver".to_string(), Currency::Eur);
        sender.wallet_mut().set_balance(initial).unwrap();

        sender.transfer_funds(amount, &mut receiver).unwrap();

        prop_assert_eq!(
            sender.wallet().balance() + receiver.wallet().balance(),
            initial
        );
        prop_assert_eq!(receiver.wallet().balance(), amount);
    }

    /// A refused transfer leaves both balances untouched.
    #[test]
    fn prop_refused_transfer_mutates_nothing(initial in cent_amount(), extra in 1i64..1_000_000i64) {
        let mut sender = Person::new("Sender".to_string(), Currency::Eur);
        let mut receiver = Person::new("Receiver".to_string(), Currency::Eur);
        sender.wallet_mut().set_balance(initial).unwrap();
        let requested = initial + Decimal::new(extra, 2);

        let result = sender.transfer_funds(requested, &mut receiver);

        prop_assert!(result.is_err());
        prop_assert_eq!(sender.wallet().balance(), initial);
        prop_assert_eq!(receiver.wallet().balance(), Decimal::ZERO);
    }

    /// Division distributes the entire balance: recipient shares sum to the
    /// source total and the source ends at zero.
    #[test]
    fn prop_division_is_exact(total in unit_amount(), count in 1usize..8) {
        let mut source = Person::new("Source".to_string(), Currency::Eur);
        source.wallet_mut().set_balance(total).unwrap();
        let mut recipients: Vec<Person> = (0..count)
            .map(|i| Person::new(format!("Recipient {i}"), Currency::Eur))
            .collect();

        source.divide_wallet(&mut recipients).unwrap();

        let distributed: Decimal = recipients.iter().map(|p| p.wallet().balance()).sum();
        prop_assert_eq!(distributed, total);
        prop_assert_eq!(source.wallet().balance(), Decimal::ZERO);
    }

    /// Mismatched recipients receive nothing and do not disturb exactness
    /// for the matching ones.
    #[test]
    fn prop_division_skips_mismatched(
        total in unit_amount(),
        matching in 1usize..5,
        mismatched in 0usize..5,
    ) {
        let mut source = Person::new("Source".to_string(), Currency::Eur);
        source.wallet_mut().set_balance(total).unwrap();

        let mut recipients = Vec::new();
        for i in 0..mismatched {
            recipients.push(Person::new(format!("Other {i}"), Currency::Usd));
        }
        for i in 0..matching {
            recipients.push(Person::new(format!("Friend {i}"), Currency::Eur));
        }

        source.divide_wallet(&mut recipients).unwrap();

        let (others, friends) = recipients.split_at(mismatched);
        for other in others {
            prop_assert_eq!(other.wallet().balance(), Decimal::ZERO);
        }
        let distributed: Decimal = friends.iter().map(|p| p.wallet().balance()).sum();
        prop_assert_eq!(distributed, total);
        prop_assert_eq!(source.wallet().balance(), Decimal::ZERO);
    }
}
