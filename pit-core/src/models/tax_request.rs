use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::IncomeMode;

/// Figures as the user supplied them, in the units selected by `mode`.
///
/// Social insurance is an additional deduction; it is kept separate only so
/// it can be shown on its own line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TaxRequest {
    pub income: Decimal,
    pub additional_deductions: Decimal,
    pub social_insurance: Decimal,
    pub mode: IncomeMode,
}

impl TaxRequest {
    pub fn annual(income: Decimal) -> Self {
        Self {
            income,
            ..Self::default()
        }
    }

    pub fn monthly(income: Decimal) -> Self {
        Self {
            income,
            mode: IncomeMode::Monthly,
            ..Self::default()
        }
    }

    pub fn with_deductions(
        mut self,
        additional_deductions: Decimal,
    ) -> Self {
        self.additional_deductions = additional_deductions;
        self
    }

    pub fn with_social_insurance(
        mut self,
        social_insurance: Decimal,
    ) -> Self {
        self.social_insurance = social_insurance;
        self
    }
}
