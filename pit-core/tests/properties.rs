//! Property tests for the comprehensive income evaluator.

use pit_core::{COMPREHENSIVE_BRACKETS, STANDARD_DEDUCTION, TaxErrorKind, compute};
use pretty_assertions::assert_eq;
use proptest::prelude::{prop_assert, prop_assert_eq, proptest};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Whole cents up to 20 million, so every bracket gets exercised.
const MAX_CENTS: i64 = 2_000_000_000;

fn cents(value: i64) -> Decimal {
    Decimal::new(value, 2)
}

proptest! {
    #![proptest_config(proptest::test_runner::Config::with_cases(256))]

    #[test]
    fn prop_tax_is_non_negative_and_net_is_exact(
        income in 0i64..MAX_CENTS,
        deductions in 0i64..MAX_CENTS,
    ) {
        let income = cents(income);
        let result = compute(income, cents(deductions)).unwrap();

        prop_assert!(result.tax_due >= Decimal::ZERO);
        prop_assert!(result.taxable_income >= Decimal::ZERO);
        prop_assert_eq!(result.net_income, income - result.tax_due);
    }

    #[test]
    fn prop_tax_never_decreases_as_income_rises(
        income in 0i64..MAX_CENTS,
        raise in 0i64..50_000_000,
        deductions in 0i64..10_000_000,
    ) {
        let deductions = cents(deductions);
        let lower = compute(cents(income), deductions).unwrap();
        let higher = compute(cents(income + raise), deductions).unwrap();

        prop_assert!(higher.tax_due >= lower.tax_due);
    }

    #[test]
    fn prop_tax_never_exceeds_top_rate(
        income in 0i64..MAX_CENTS,
    ) {
        let result = compute(cents(income), Decimal::ZERO).unwrap();

        prop_assert!(result.tax_due <= result.taxable_income * dec!(0.45));
    }

    #[test]
    fn prop_negative_income_is_invalid_input(
        income in 1i64..MAX_CENTS,
    ) {
        let err = compute(-cents(income), Decimal::ZERO).unwrap_err();

        prop_assert_eq!(err.kind(), TaxErrorKind::InvalidInput);
    }

    #[test]
    fn prop_negative_deductions_are_invalid_input(
        deductions in 1i64..MAX_CENTS,
    ) {
        let err = compute(dec!(100000), -cents(deductions)).unwrap_err();

        prop_assert_eq!(err.kind(), TaxErrorKind::InvalidInput);
    }
}

#[test]
fn tax_is_continuous_across_every_bracket_bound() {
    for bracket in COMPREHENSIVE_BRACKETS.iter().filter(|b| !b.is_unbounded()) {
        let bound = bracket.upper_bound.unwrap();
        let at_bound = compute(bound + STANDARD_DEDUCTION, Decimal::ZERO).unwrap();
        let just_above = compute(bound + STANDARD_DEDUCTION + dec!(0.01), Decimal::ZERO).unwrap();

        assert_eq!(at_bound.tax_rate, bracket.rate);
        assert!(just_above.tax_rate > bracket.rate);
        // A cent of extra income costs at most a cent of tax.
        assert!(
            just_above.tax_due - at_bound.tax_due <= dec!(0.01),
            "jump in tax at bound {bound}"
        );
    }
}

#[test]
fn tax_at_each_bound_matches_cumulative_schedule() {
    let expected = [
        (dec!(36000), dec!(1080)),
        (dec!(144000), dec!(11880)),
        (dec!(300000), dec!(43080)),
        (dec!(420000), dec!(73080)),
        (dec!(660000), dec!(145080)),
        (dec!(960000), dec!(250080)),
    ];

    for (taxable, tax) in expected {
        let result = compute(taxable + STANDARD_DEDUCTION, Decimal::ZERO).unwrap();

        assert_eq!(result.tax_due, tax, "taxable income {taxable}");
    }
}
