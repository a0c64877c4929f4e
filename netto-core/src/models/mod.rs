mod tax_bracket;
mod tax_result;

pub use tax_bracket::TaxBracket;
pub use tax_result::{TaxResult, TheoreticalAmounts};
