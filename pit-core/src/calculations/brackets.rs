//! Rate schedule for comprehensive income (wages, remuneration and similar).
//!
//! | Taxable income (annual) | Rate | Quick deduction |
//! |-------------------------|------|-----------------|
//! | up to 36,000            | 3%   | 0               |
//! | 36,000 – 144,000        | 10%  | 2,520           |
//! | 144,000 – 300,000       | 20%  | 16,920          |
//! | 300,000 – 420,000       | 25%  | 31,920          |
//! | 420,000 – 660,000       | 30%  | 52,920          |
//! | 660,000 – 960,000       | 35%  | 85,920          |
//! | above 960,000           | 45%  | 181,920         |
//!
//! Each quick deduction is chosen so that `rate × income − quick_deduction`
//! equals the tax obtained by summing every lower bracket, which makes
//! neighbouring brackets agree at their shared bound.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use thiserror::Error;

use crate::TaxBracket;

/// Yearly allowance subtracted from gross income before bracket lookup.
pub const STANDARD_DEDUCTION: Decimal = dec!(60000);

/// Annual brackets, sorted by upper bound. The last one is open-ended.
pub const COMPREHENSIVE_BRACKETS: [TaxBracket; 7] = [
    TaxBracket::new(Some(dec!(36000)), dec!(0.03), dec!(0)),
    TaxBracket::new(Some(dec!(144000)), dec!(0.10), dec!(2520)),
    TaxBracket::new(Some(dec!(300000)), dec!(0.20), dec!(16920)),
    TaxBracket::new(Some(dec!(420000)), dec!(0.25), dec!(31920)),
    TaxBracket::new(Some(dec!(660000)), dec!(0.30), dec!(52920)),
    TaxBracket::new(Some(dec!(960000)), dec!(0.35), dec!(85920)),
    TaxBracket::new(None, dec!(0.45), dec!(181920)),
];

/// Ways a bracket table can fail to cover every non-negative income.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BracketTableError {
    #[error("bracket table is empty")]
    Empty,

    /// Only the last bracket may be open-ended.
    #[error("bracket {0} has no upper bound but is not the last bracket")]
    UnboundedBeforeEnd(usize),

    #[error("bracket {index} upper bound {bound} does not exceed the previous bound")]
    NotAscending { index: usize, bound: Decimal },

    #[error("last bracket is capped at {0}; it must have no upper bound")]
    BoundedTopBracket(Decimal),
}

/// Checks that `brackets` is non-empty, strictly ascending and ends with an
/// open-ended bracket, so that every lookup succeeds.
pub fn validate_brackets(brackets: &[TaxBracket]) -> Result<(), BracketTableError> {
    let Some((last, rest)) = brackets.split_last() else {
        return Err(BracketTableError::Empty);
    };

    let mut previous: Option<Decimal> = None;
    for (index, bracket) in rest.iter().enumerate() {
        let bound = bracket
            .upper_bound
            .ok_or(BracketTableError::UnboundedBeforeEnd(index))?;
        if previous.is_some_and(|prev| bound <= prev) {
            return Err(BracketTableError::NotAscending { index, bound });
        }
        previous = Some(bound);
    }

    match last.upper_bound {
        None => Ok(()),
        Some(bound) => Err(BracketTableError::BoundedTopBracket(bound)),
    }
}
