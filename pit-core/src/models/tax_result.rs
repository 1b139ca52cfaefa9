use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Outcome of a single bracket evaluation. All amounts are annual and unrounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxResult {
    /// Gross income minus the standard and additional deductions, floored at zero.
    pub taxable_income: Decimal,

    /// Marginal rate of the selected bracket.
    pub tax_rate: Decimal,

    /// Quick deduction of the selected bracket.
    pub quick_deduction: Decimal,

    pub tax_due: Decimal,

    /// Gross income minus tax due.
    pub net_income: Decimal,
}
