use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row of a progressive rate schedule.
///
/// `upper_bound` is the largest taxable income the bracket covers. The
/// open-ended top bracket has no upper bound and is written as `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub upper_bound: Option<Decimal>,
    pub rate: Decimal,
    pub quick_deduction: Decimal,
}

impl TaxBracket {
    pub const fn new(
        upper_bound: Option<Decimal>,
        rate: Decimal,
        quick_deduction: Decimal,
    ) -> Self {
        Self {
            upper_bound,
            rate,
            quick_deduction,
        }
    }

    /// Returns `true` when `taxable_income` does not exceed this bracket's upper bound.
    pub fn contains(
        &self,
        taxable_income: Decimal,
    ) -> bool {
        self.upper_bound
            .is_none_or(|upper_bound| taxable_income <= upper_bound)
    }

    /// `taxable_income × rate − quick_deduction`, without the zero floor.
    pub fn gross_tax(
        &self,
        taxable_income: Decimal,
    ) -> Decimal {
        taxable_income * self.rate - self.quick_deduction
    }

    pub fn is_unbounded(&self) -> bool {
        self.upper_bound.is_none()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn second_bracket() -> TaxBracket {
        TaxBracket::new(Some(dec!(144000)), dec!(0.10), dec!(2520))
    }

    #[test]
    fn contains_includes_upper_bound() {
        let bracket = second_bracket();

        assert!(bracket.contains(dec!(144000)));
        assert!(bracket.contains(dec!(60000)));
        assert!(!bracket.contains(dec!(144000.01)));
    }

    #[test]
    fn unbounded_bracket_contains_everything() {
        let bracket = TaxBracket::new(None, dec!(0.45), dec!(181920));

        assert!(bracket.is_unbounded());
        assert!(bracket.contains(Decimal::MAX));
    }

    #[test]
    fn gross_tax_applies_rate_then_quick_deduction() {
        let bracket = second_bracket();

        assert_eq!(bracket.gross_tax(dec!(60000)), dec!(3480.00));
    }

    #[test]
    fn gross_tax_can_go_negative_below_the_bracket() {
        let bracket = second_bracket();

        assert_eq!(bracket.gross_tax(dec!(1000)), dec!(-2420.00));
    }
}
