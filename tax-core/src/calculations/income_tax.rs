//! Bracketed income tax.
//!
//! | Income | Tax |
//! |--------|-----|
//! | up to 40,000 | 2% |
//! | 40,000 – 80,000 | 800 + 7% over 40,000 |
//! | 80,000 – 120,000 | 3,600 + 12% over 80,000 |
//! | over 120,000 | 7,600 + 17% over 120,000 |
//!
//! Upper bounds are inclusive.

use rust_decimal::Decimal;
use tracing::trace;

use crate::models::{INCOME_TAX_BRACKETS, TaxBracket};

/// Returns the bracket that applies to `income`.
pub fn bracket_for(income: Decimal) -> &'static TaxBracket {
    let last = &INCOME_TAX_BRACKETS[INCOME_TAX_BRACKETS.len() - 1];

    INCOME_TAX_BRACKETS
        .iter()
        .find(|b| b.contains(income))
        .unwrap_or(last)
}

/// Calculates income tax from the fixed bracket schedule.
///
/// The result is not rounded. Negative income is not meaningful here and
/// must be rejected before calling.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::calculate_income_tax;
///
/// assert_eq!(calculate_income_tax(dec!(40000)), dec!(800));
/// assert_eq!(calculate_income_tax(dec!(81000)), dec!(3720));
/// ```
pub fn calculate_income_tax(income: Decimal) -> Decimal {
    let bracket = bracket_for(income);
    let tax = bracket.tax_for(income);

    trace!(%income, min_income = %bracket.min_income, rate = %bracket.tax_rate, %tax, "income tax");
    tax
}
