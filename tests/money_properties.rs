//! Property tests for bundle arithmetic and ledger formatting.

use cashbox::{Bundle, DENOMINATIONS, DigitLedger, MAX_DIGITS};
use proptest::prelude::*;

fn denomination() -> impl Strategy<Value = u32> {
    prop::sample::select(DENOMINATIONS.to_vec())
}

proptest! {
    /// Adding bundles of one denomination adds their totals.
    #[test]
    fn prop_add_sums_totals(d in denomination(), c1 in 1u32..100_000, c2 in 1u32..100_000) {
        let sum = Bundle::new(d, c1).unwrap().add(&Bundle::new(d, c2).unwrap()).unwrap();
        prop_assert_eq!(sum.total_value(), u64::from(d) * u64::from(c1 + c2));
        prop_assert_eq!(sum.denomination(), d);
    }

    /// Subtraction undoes addition.
    #[test]
    fn prop_subtract_inverts_add(d in denomination(), c1 in 1u32..100_000, c2 in 1u32..100_000) {
        let first = Bundle::new(d, c1).unwrap();
        let second = Bundle::new(d, c2).unwrap();
        let back = first.add(&second).unwrap().subtract(&second).unwrap();
        prop_assert_eq!(back.count(), c1);
    }

    /// Multiplying scales the total value.
    #[test]
    fn prop_multiply_scales_total(d in denomination(), c in 1u32..10_000, k in 1u32..10_000) {
        let product = Bundle::new(d, c).unwrap().multiply(k).unwrap();
        prop_assert_eq!(product.total_value(), u64::from(d) * u64::from(c) * u64::from(k));
    }

    /// Ordering agrees with total value regardless of denomination.
    #[test]
    fn prop_order_follows_total(
        d1 in denomination(), c1 in 1u32..1_000,
        d2 in denomination(), c2 in 1u32..1_000,
    ) {
        let left = Bundle::new(d1, c1).unwrap();
        let right = Bundle::new(d2, c2).unwrap();
        prop_assert_eq!(left.cmp(&right), left.total_value().cmp(&right.total_value()));
        prop_assert_eq!(left == right, left.total_value() == right.total_value());
    }

    /// Denominations outside the accepted set are always rejected.
    #[test]
    fn prop_rejects_unknown_denominations(d in any::<u32>(), c in 1u32..100) {
        prop_assume!(!DENOMINATIONS.contains(&d));
        prop_assert!(Bundle::new(d, c).is_err());
    }

    /// Display of a digit string always places the point before the last two digits.
    #[test]
    fn prop_display_splits_cents(digits in "[0-9]{3,100}") {
        let money: DigitLedger = digits.parse().unwrap();
        let (whole, cents) = digits.split_at(digits.len() - 2);
        prop_assert_eq!(money.to_string(), format!("{whole}.{cents}"));
        prop_assert_eq!(money.count(), digits.len());
    }

    /// Appending then removing a digit restores the ledger.
    #[test]
    fn prop_append_remove_restores(digits in "[0-9]{0,99}", digit in 0u8..=9) {
        let original: DigitLedger = digits.parse().unwrap();
        let mut money = original.clone();
        money.append_digit(digit).unwrap();
        prop_assert_eq!(money.get(digits.len()), Ok(digit));
        prop_assert_eq!(money.remove_last_digit(), Ok(digit));
        prop_assert_eq!(money, original);
        prop_assert!(digits.len() < MAX_DIGITS);
    }

    /// Numbers always yield at least three digits, two of them fractional.
    #[test]
    fn prop_numbers_have_cents(amount in 0.0f64..1.0e12) {
        let money = DigitLedger::from_number(amount).unwrap();
        prop_assert!(money.count() >= 3);
        prop_assert_eq!(money.to_string(), format!("{amount:.2}"));
    }
}
