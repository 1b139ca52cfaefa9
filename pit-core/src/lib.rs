pub mod calculations;
pub mod models;

pub use calculations::{
    BracketTaxEvaluator, COMPREHENSIVE_BRACKETS, STANDARD_DEDUCTION, TaxBreakdown, TaxError,
    TaxErrorKind, TaxSummary, compute,
};
pub use models::*;
