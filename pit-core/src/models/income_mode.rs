use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How the amounts of a [`crate::TaxRequest`] are expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IncomeMode {
    #[default]
    Annual,
    Monthly,
}

impl IncomeMode {
    /// Number of periods making up one tax year.
    pub fn periods_per_year(&self) -> Decimal {
        match self {
            Self::Annual => Decimal::ONE,
            Self::Monthly => Decimal::from(12),
        }
    }

    /// Scales a per-period amount up to a yearly one.
    ///
    /// Returns `None` if the yearly amount does not fit in a [`Decimal`].
    pub fn annualize(
        &self,
        amount: Decimal,
    ) -> Option<Decimal> {
        amount.checked_mul(self.periods_per_year())
    }

    /// Scales a yearly amount back down to one period.
    pub fn per_period(
        &self,
        annual_amount: Decimal,
    ) -> Decimal {
        annual_amount / self.periods_per_year()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Annual => "annual",
            Self::Monthly => "monthly",
        }
    }
}

impl fmt::Display for IncomeMode {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
