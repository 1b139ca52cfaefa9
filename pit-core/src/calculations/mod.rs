//! Income tax calculations for comprehensive income.
//!
//! The evaluator works on annual figures only. [`TaxBreakdown`] sits on top
//! of it and handles monthly input and presentation rounding.

pub mod breakdown;
pub mod brackets;
pub mod common;
pub mod evaluator;

pub use breakdown::{TaxBreakdown, TaxSummary};
pub use brackets::{
    BracketTableError, COMPREHENSIVE_BRACKETS, STANDARD_DEDUCTION, validate_brackets,
};
pub use evaluator::{BracketTaxEvaluator, TaxError, TaxErrorKind, compute};
