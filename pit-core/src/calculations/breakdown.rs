//! Turns a user-facing [`TaxRequest`] into an evaluated, presentable breakdown.
//!
//! Monthly requests are annualized before evaluation: income, social
//! insurance and additional deductions are each multiplied by twelve. The
//! resulting annual figures are divided back by twelve for presentation.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use pit_core::{TaxBreakdown, TaxRequest};
//!
//! let request = TaxRequest::monthly(dec!(15000)).with_social_insurance(dec!(2000));
//! let breakdown = TaxBreakdown::calculate(&request).unwrap();
//!
//! // (15000 - 2000) * 12 - 60000 = 96000 taxable, 96000 * 10% - 2520 = 7080 a year
//! assert_eq!(breakdown.result().taxable_income, dec!(96000));
//! assert_eq!(breakdown.summary().tax_due, dec!(590.00));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::common::round_half_up;
use crate::calculations::evaluator::{
    BracketTaxEvaluator, TaxError, ensure_non_negative_deductions, ensure_non_negative_income,
};
use crate::{IncomeMode, TaxRequest, TaxResult};

/// An evaluated request, keeping both the input and the annual result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxBreakdown {
    request: TaxRequest,
    annual_income: Decimal,
    annual_deductions: Decimal,
    result: TaxResult,
}

/// Rounded figures ready for display, expressed per period of the request's mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxSummary {
    pub mode: IncomeMode,
    pub gross_income: Decimal,
    pub social_insurance: Decimal,
    pub additional_deductions: Decimal,
    /// Additional deductions plus social insurance.
    pub total_deductions: Decimal,
    pub taxable_income: Decimal,
    pub tax_rate: Decimal,
    pub quick_deduction: Decimal,
    pub tax_due: Decimal,
    pub net_income: Decimal,
}

impl TaxBreakdown {
    /// Evaluates `request` with the built-in comprehensive income table.
    pub fn calculate(request: &TaxRequest) -> Result<Self, TaxError> {
        Self::calculate_with(&BracketTaxEvaluator::comprehensive(), request)
    }

    /// Evaluates `request` with a specific evaluator.
    ///
    /// # Errors
    ///
    /// Returns [`TaxError`] if any amount is negative, if an amount
    /// overflows when annualized, or if the evaluator's table is malformed.
    pub fn calculate_with(
        evaluator: &BracketTaxEvaluator<'_>,
        request: &TaxRequest,
    ) -> Result<Self, TaxError> {
        ensure_non_negative_income(request.income)?;
        ensure_non_negative_deductions(request.additional_deductions)?;
        ensure_non_negative_deductions(request.social_insurance)?;

        let annual_income = annualize(request.mode, request.income)?;
        let per_period_deductions = request
            .additional_deductions
            .checked_add(request.social_insurance)
            .ok_or(TaxError::AmountTooLarge(request.additional_deductions))?;
        let annual_deductions = annualize(request.mode, per_period_deductions)?;

        debug!(
            mode = %request.mode,
            %annual_income,
            %annual_deductions,
            "annualized request"
        );

        let result = evaluator.compute(annual_income, annual_deductions)?;

        Ok(Self {
            request: *request,
            annual_income,
            annual_deductions,
            result,
        })
    }

    pub fn mode(&self) -> IncomeMode {
        self.request.mode
    }

    pub fn annual_income(&self) -> Decimal {
        self.annual_income
    }

    /// Additional deductions and social insurance, annualized.
    pub fn annual_deductions(&self) -> Decimal {
        self.annual_deductions
    }

    /// The annual evaluator output.
    pub fn result(&self) -> &TaxResult {
        &self.result
    }

    /// Scales an annual amount to one period of the request's mode.
    pub fn per_period(
        &self,
        annual_amount: Decimal,
    ) -> Decimal {
        self.request.mode.per_period(annual_amount)
    }

    /// Rounds every figure for display. This is the only place rounding happens.
    pub fn summary(&self) -> TaxSummary {
        let request = &self.request;
        TaxSummary {
            mode: request.mode,
            gross_income: round_half_up(request.income),
            social_insurance: round_half_up(request.social_insurance),
            additional_deductions: round_half_up(request.additional_deductions),
            total_deductions: round_half_up(self.per_period(self.annual_deductions)),
            taxable_income: round_half_up(self.per_period(self.result.taxable_income)),
            tax_rate: self.result.tax_rate,
            quick_deduction: round_half_up(self.per_period(self.result.quick_deduction)),
            tax_due: round_half_up(self.per_period(self.result.tax_due)),
            net_income: round_half_up(self.per_period(self.result.net_income)),
        }
    }
}

fn annualize(
    mode: IncomeMode,
    amount: Decimal,
) -> Result<Decimal, TaxError> {
    mode.annualize(amount).ok_or(TaxError::AmountTooLarge(amount))
}
