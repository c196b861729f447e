//! Ties the form, the calculator and the presentation together.

use std::path::Path;

use anyhow::{Context, Result};
use tax_core::{TaxCalculator, estimate};
use tracing::{debug, info};

use crate::config::OutputFormat;
use crate::csv_loader;
use crate::display::{self, EstimateRecord};
use crate::form::TaxForm;

/// Validates a single form submission and renders its breakdown.
///
/// # Errors
///
/// Fails with the list of invalid fields if the form does not validate.
pub fn estimate_form(
    form: &TaxForm,
    format: OutputFormat,
) -> Result<String> {
    let input = form.validate().context("invalid input")?;

    let mut calculator = TaxCalculator::new();
    let breakdown = *calculator.calculate(input);
    info!(
        tax_after_exemptions = %breakdown.tax_after_exemptions,
        refund = breakdown.is_refund(),
        "estimate calculated"
    );

    render(&[EstimateRecord { input, breakdown }], format)
}

/// Loads every row of a CSV file and renders a breakdown for each.
///
/// # Errors
///
/// Fails if the file cannot be read or any row is invalid; nothing is
/// rendered in that case.
pub fn estimate_csv(
    path: &Path,
    format: OutputFormat,
) -> Result<String> {
    let inputs = csv_loader::load_from_file(path)
        .with_context(|| format!("failed to load estimates from {}", path.display()))?;
    debug!(rows = inputs.len(), path = %path.display(), "loaded estimate inputs");

    let records: Vec<EstimateRecord> = inputs
        .into_iter()
        .map(|input| EstimateRecord {
            input,
            breakdown: estimate(input),
        })
        .collect();
    info!(count = records.len(), "estimates calculated");

    render(&records, format)
}

fn render(
    records: &[EstimateRecord],
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(display::render_text(records)),
        OutputFormat::Json => {
            display::render_json(records).context("failed to serialize estimates")
        }
    }
}
