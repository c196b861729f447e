use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The three values a user enters on the estimate form.
///
/// Counts are unsigned; `income` is expected to be non-negative and is
/// checked by the form layer before a `TaxInput` is built.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxInput {
    pub income: Decimal,
    pub num_children: u32,
    pub num_parents: u32,
}

impl TaxInput {
    pub fn new(
        income: Decimal,
        num_children: u32,
        num_parents: u32,
    ) -> Self {
        Self {
            income,
            num_children,
            num_parents,
        }
    }
}
