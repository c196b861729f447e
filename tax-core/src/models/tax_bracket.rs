use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// One row of the income tax schedule.
///
/// Income above `min_income` and up to and including `max_income` is taxed
/// as `base_tax + (income - min_income) * tax_rate`. The last bracket has no
/// upper bound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub min_income: Decimal,
    pub max_income: Option<Decimal>,
    pub tax_rate: Decimal,
    pub base_tax: Decimal,
}

impl TaxBracket {
    /// Whether `income` falls at or below this bracket's upper bound.
    ///
    /// Brackets are searched in ascending order, so the first one that
    /// contains an income is the one that applies.
    pub fn contains(
        &self,
        income: Decimal,
    ) -> bool {
        self.max_income.is_none_or(|max| income <= max)
    }

    /// Tax owed on `income` under this bracket. Not rounded.
    pub fn tax_for(
        &self,
        income: Decimal,
    ) -> Decimal {
        self.base_tax + (income - self.min_income) * self.tax_rate
    }
}

/// The fixed income tax schedule, sorted by `min_income`.
///
/// The top bracket's base is 7600, not the 8400 the third bracket reaches at
/// 120000, so tax drops just above that boundary.
pub static INCOME_TAX_BRACKETS: [TaxBracket; 4] = [
    TaxBracket {
        min_income: dec!(0),
        max_income: Some(dec!(40000)),
        tax_rate: dec!(0.02),
        base_tax: dec!(0),
    },
    TaxBracket {
        min_income: dec!(40000),
        max_income: Some(dec!(80000)),
        tax_rate: dec!(0.07),
        base_tax: dec!(800),
    },
    TaxBracket {
        min_income: dec!(80000),
        max_income: Some(dec!(120000)),
        tax_rate: dec!(0.12),
        base_tax: dec!(3600),
    },
    TaxBracket {
        min_income: dec!(120000),
        max_income: None,
        tax_rate: dec!(0.17),
        base_tax: dec!(7600),
    },
];
