mod tax_bracket;
mod tax_breakdown;
mod tax_input;

pub use tax_bracket::{INCOME_TAX_BRACKETS, TaxBracket};
pub use tax_breakdown::TaxBreakdown;
pub use tax_input::TaxInput;
