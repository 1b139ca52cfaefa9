mod income_mode;
mod tax_bracket;
mod tax_request;
mod tax_result;

pub use income_mode::IncomeMode;
pub use tax_bracket::TaxBracket;
pub use tax_request::TaxRequest;
pub use tax_result::TaxResult;
