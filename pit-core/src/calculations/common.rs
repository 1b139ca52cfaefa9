//! Common helpers shared by the evaluator and the presentation layer.

use rust_decimal::Decimal;

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Values at exactly 0.005 are rounded away from zero. Only used when
/// figures are presented; the evaluator itself never rounds.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use pit_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    let mut rounded =
        value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

/// Clamps negative values to zero.
///
/// ```
/// use rust_decimal_macros::dec;
/// use pit_core::calculations::common::floor_at_zero;
///
/// assert_eq!(floor_at_zero(dec!(-1.50)), dec!(0));
/// assert_eq!(floor_at_zero(dec!(1.50)), dec!(1.50));
/// ```
pub fn floor_at_zero(value: Decimal) -> Decimal {
    value.max(Decimal::ZERO)
}

/// Expresses a rate as a whole-number percentage, e.g. `0.45` → `45`.
pub fn rate_as_percent(rate: Decimal) -> Decimal {
    (rate * Decimal::ONE_HUNDRED).normalize()
}
