//! Equal splitting of an amount with exact remainder accounting.
//!
//! Dividing an amount into equal cent-rounded shares rarely lands exactly on
//! the total. The residue is folded into the first share so that the sum of
//! all shares equals the original amount, no cents lost or invented.

use cagnotte_shared::round_money;
use rust_decimal::Decimal;

/// Splits `total` into `count` cent-rounded shares that sum to `total`.
///
/// Every share except the first is `round(total / count)`; the first share
/// additionally absorbs the rounding remainder, which may be negative (for
/// example a total of 100 over 6 recipients yields a first share of 16.65
/// next to five shares of 16.67). Sub-cent totals spread over many
/// recipients can push the first share below zero; callers are expected to
/// feed shares through wallet validation rather than pre-check here.
///
/// # Example
///
/// ```
/// use cagnotte_core::allocation::split_equal;
/// use rust_decimal_macros::dec;
///
/// let shares = split_equal(dec!(100), 3);
/// assert_eq!(shares, vec![dec!(33.34), dec!(33.33), dec!(33.33)]);
/// assert_eq!(shares.iter().sum::<rust_decimal::Decimal>(), dec!(100));
/// ```
#[must_use]
pub fn split_equal(total: Decimal, count: usize) -> Vec<Decimal> {
    if count == 0 {
        return vec![];
    }

    let count_dec = Decimal::from(count as u64);
    let share = round_money(total / count_dec);
    let remainder = round_money(total - share * count_dec);

    (0..count)
        .map(|i| if i == 0 { share + remainder } else { share })
        .collect()
}
