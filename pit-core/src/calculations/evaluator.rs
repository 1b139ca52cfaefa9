//! Bracket tax evaluator for comprehensive income.
//!
//! # Calculation
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Taxable income = gross − standard deduction − additional deductions (minimum 0) |
//! | 2    | Select the first bracket whose upper bound is at least the taxable income |
//! | 3    | Tax due = taxable income × rate − quick deduction (minimum 0) |
//! | 4    | Net income = gross − tax due |
//!
//! All figures are annual. Nothing is rounded here; callers round when they
//! present the result.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use pit_core::compute;
//!
//! let result = compute(dec!(120000), dec!(0)).unwrap();
//!
//! assert_eq!(result.taxable_income, dec!(60000));
//! assert_eq!(result.tax_rate, dec!(0.10));
//! assert_eq!(result.tax_due, dec!(3480));
//! assert_eq!(result.net_income, dec!(116520));
//! ```

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{debug, error, warn};

use crate::calculations::brackets::{COMPREHENSIVE_BRACKETS, STANDARD_DEDUCTION};
use crate::calculations::common::floor_at_zero;
use crate::{TaxBracket, TaxResult};

/// Errors that can occur while evaluating tax.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaxError {
    #[error("income cannot be negative, got {0}")]
    NegativeIncome(Decimal),

    #[error("deductions cannot be negative, got {0}")]
    NegativeDeductions(Decimal),

    /// An amount could not be annualized without overflowing.
    #[error("amount {0} is too large")]
    AmountTooLarge(Decimal),

    /// The bracket table does not cover the taxable income. Cannot happen
    /// with [`COMPREHENSIVE_BRACKETS`].
    #[error("no tax bracket found for taxable income {0}")]
    NoMatchingBracket(Decimal),
}

/// Broad classification of a [`TaxError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaxErrorKind {
    /// The caller supplied a value that can be corrected and retried.
    InvalidInput,
    /// The bracket table is broken. This is a defect, not a user error.
    InternalInvariantViolation,
}

impl TaxError {
    pub fn kind(&self) -> TaxErrorKind {
        match self {
            Self::NegativeIncome(_) | Self::NegativeDeductions(_) | Self::AmountTooLarge(_) => {
                TaxErrorKind::InvalidInput
            }
            Self::NoMatchingBracket(_) => TaxErrorKind::InternalInvariantViolation,
        }
    }

    pub fn is_invalid_input(&self) -> bool {
        self.kind() == TaxErrorKind::InvalidInput
    }
}

/// Evaluates tax against a bracket table and a standard deduction.
///
/// The table must be sorted by upper bound in ascending order and end with
/// an open-ended bracket; see
/// [`validate_brackets`](crate::calculations::validate_brackets).
#[derive(Debug, Clone, Copy)]
pub struct BracketTaxEvaluator<'a> {
    brackets: &'a [TaxBracket],
    standard_deduction: Decimal,
}

impl<'a> BracketTaxEvaluator<'a> {
    pub fn new(
        brackets: &'a [TaxBracket],
        standard_deduction: Decimal,
    ) -> Self {
        Self {
            brackets,
            standard_deduction,
        }
    }

    pub fn brackets(&self) -> &'a [TaxBracket] {
        self.brackets
    }

    pub fn standard_deduction(&self) -> Decimal {
        self.standard_deduction
    }

    /// Computes tax on an annual gross income.
    ///
    /// # Errors
    ///
    /// Returns [`TaxError`] if:
    /// - `gross_annual_income` is negative
    /// - `additional_deductions` is negative
    /// - the bracket table does not cover the taxable income
    pub fn compute(
        &self,
        gross_annual_income: Decimal,
        additional_deductions: Decimal,
    ) -> Result<TaxResult, TaxError> {
        ensure_non_negative_income(gross_annual_income)?;
        ensure_non_negative_deductions(additional_deductions)?;

        let taxable_income = self.taxable_income(gross_annual_income, additional_deductions);
        let bracket = self.select_bracket(taxable_income)?;
        let tax_due = self.tax_due(bracket, taxable_income);

        debug!(
            %taxable_income,
            rate = %bracket.rate,
            quick_deduction = %bracket.quick_deduction,
            %tax_due,
            "evaluated bracket"
        );

        Ok(TaxResult {
            taxable_income,
            tax_rate: bracket.rate,
            quick_deduction: bracket.quick_deduction,
            tax_due,
            net_income: gross_annual_income - tax_due,
        })
    }

    /// Calculates taxable income, never below zero.
    ///
    /// Deductions too large to add up exceed any income, so they leave
    /// nothing to tax.
    fn taxable_income(
        &self,
        gross: Decimal,
        additional_deductions: Decimal,
    ) -> Decimal {
        match self.standard_deduction.checked_add(additional_deductions) {
            Some(total_deductions) => floor_at_zero(gross - total_deductions),
            None => Decimal::ZERO,
        }
    }

    /// Finds the lowest bracket whose upper bound covers `taxable_income`.
    fn select_bracket(
        &self,
        taxable_income: Decimal,
    ) -> Result<&'a TaxBracket, TaxError> {
        self.brackets
            .iter()
            .find(|bracket| bracket.contains(taxable_income))
            .ok_or_else(|| {
                error!(%taxable_income, "bracket table does not cover taxable income");
                TaxError::NoMatchingBracket(taxable_income)
            })
    }

    /// Applies the bracket's rate and quick deduction, never below zero.
    fn tax_due(
        &self,
        bracket: &TaxBracket,
        taxable_income: Decimal,
    ) -> Decimal {
        floor_at_zero(bracket.gross_tax(taxable_income))
    }
}

/// Rejects a negative income amount.
pub(crate) fn ensure_non_negative_income(income: Decimal) -> Result<(), TaxError> {
    if income < Decimal::ZERO {
        warn!(%income, "rejected negative income");
        return Err(TaxError::NegativeIncome(income));
    }
    Ok(())
}

/// Rejects a negative deduction amount.
pub(crate) fn ensure_non_negative_deductions(deductions: Decimal) -> Result<(), TaxError> {
    if deductions < Decimal::ZERO {
        warn!(%deductions, "rejected negative deductions");
        return Err(TaxError::NegativeDeductions(deductions));
    }
    Ok(())
}

impl Default for BracketTaxEvaluator<'static> {
    fn default() -> Self {
        Self::comprehensive()
    }
}

impl BracketTaxEvaluator<'static> {
    /// Evaluator over [`COMPREHENSIVE_BRACKETS`] and [`STANDARD_DEDUCTION`].
    pub fn comprehensive() -> Self {
        Self::new(&COMPREHENSIVE_BRACKETS, STANDARD_DEDUCTION)
    }
}

/// Computes comprehensive income tax with the built-in table.
///
/// Both arguments are annual amounts.
pub fn compute(
    gross_annual_income: Decimal,
    additional_deductions: Decimal,
) -> Result<TaxResult, TaxError> {
    BracketTaxEvaluator::comprehensive().compute(gross_annual_income, additional_deductions)
}
