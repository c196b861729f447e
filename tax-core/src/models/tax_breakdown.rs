use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Result of a tax estimate: gross tax, capped exemptions and the net figure.
///
/// A negative `tax_after_exemptions` is a refund.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBreakdown {
    pub income_tax: Decimal,
    pub exemptions: Decimal,
    pub tax_after_exemptions: Decimal,
}

impl TaxBreakdown {
    /// True when exemptions exceed the income tax.
    pub fn is_refund(&self) -> bool {
        self.tax_after_exemptions < Decimal::ZERO
    }
}
