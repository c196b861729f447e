//! Presentation of a [`TaxBreakdown`].
//!
//! Amounts are shown as dollars with thousands separators and two decimal
//! places, e.g. `$65,000.00` or `-$2,650.00`.

use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;
use tax_core::calculations::common::round_half_up;
use tax_core::{TaxBreakdown, TaxCalculator, TaxInput, TaxRules};

/// Formats `value` as currency, rounded half-up to cents.
pub fn format_currency(value: Decimal) -> String {
    let mut rounded = round_half_up(value);
    rounded.rescale(2);

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let digits = rounded.abs().to_string();
    let (whole, cents) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    format!("{sign}${}.{cents}", group_thousands(whole))
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Text view of a breakdown: one labelled line per field.
#[derive(Debug, Clone, Copy)]
pub struct BreakdownView<'a>(pub &'a TaxBreakdown);

impl BreakdownView<'_> {
    pub fn lines(&self) -> [String; 3] {
        let breakdown = self.0;
        [
            format!("Base tax: {}", format_currency(breakdown.income_tax)),
            format!("Total exemptions: {}", format_currency(breakdown.exemptions)),
            format!(
                "Tax due/Refund: {}",
                format_currency(breakdown.tax_after_exemptions)
            ),
        ]
    }
}

impl fmt::Display for BreakdownView<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Renders the calculator's breakdown, or `None` before the first calculation.
pub fn render_computed<R: TaxRules>(calculator: &TaxCalculator<R>) -> Option<String> {
    calculator
        .computed()
        .map(|breakdown| BreakdownView(breakdown).to_string())
}

/// An input together with its computed breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EstimateRecord {
    pub input: TaxInput,
    pub breakdown: TaxBreakdown,
}

/// Renders estimates as text, one block per estimate.
pub fn render_text(records: &[EstimateRecord]) -> String {
    match records {
        [record] => BreakdownView(&record.breakdown).to_string(),
        _ => records
            .iter()
            .enumerate()
            .map(|(idx, record)| {
                format!(
                    "Estimate {} (income {}, {} children, {} parents)\n{}",
                    idx + 1,
                    format_currency(record.input.income),
                    record.input.num_children,
                    record.input.num_parents,
                    BreakdownView(&record.breakdown)
                )
            })
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

/// Renders estimates as pretty-printed JSON.
///
/// A single estimate is written as an object, several as an array.
pub fn render_json(records: &[EstimateRecord]) -> serde_json::Result<String> {
    match records {
        [record] => serde_json::to_string_pretty(record),
        _ => serde_json::to_string_pretty(records),
    }
}
