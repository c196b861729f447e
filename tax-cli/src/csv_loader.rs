//! CSV loader for batches of estimate form entries.
//!
//! ## CSV Format
//!
//! Column order does **not** matter (headers are matched by name). Header
//! names are case-sensitive and must match exactly.
//!
//! | Column         | Required | Type    | Notes                          |
//! |----------------|----------|---------|--------------------------------|
//! | `income`       | yes      | decimal | e.g. `65000.00`                |
//! | `num_children` | yes      | integer | must not be negative           |
//! | `num_parents`  | yes      | integer | must not be negative           |
//!
//! Each row goes through the same validation as the form, so a blank cell is
//! reported as a missing value.
//!
//! ### Example
//!
//! ```csv
//! income,num_children,num_parents
//! 40000,0,0
//! 65000.00,2,1
//! ```
use std::path::Path;

use tax_core::TaxInput;

use crate::form::{FormError, TaxForm};

/// Errors that can occur while loading or converting CSV data.
#[derive(Debug, thiserror::Error)]
pub enum CsvLoadError {
    /// The file could not be read.
    #[error("cannot read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The underlying CSV deserialisation failed (bad structure, missing
    /// column, etc.).
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    /// A row failed form validation. `row` is 1-based (header = row 0).
    #[error("invalid input on row {row}: {source}")]
    InvalidRow {
        row: usize,
        #[source]
        source: FormError,
    },
}

/// Parse CSV text and return one [`TaxInput`] per row, in file order.
///
/// # Errors
///
/// * [CsvLoadError::Parse] – if the CSV is structurally invalid or a column
///   is missing.
/// * [CsvLoadError::InvalidRow] – if any row fails validation.
pub fn load_from_str(input: &str) -> Result<Vec<TaxInput>, CsvLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All) // tolerate whitespace around values
        .flexible(false) // strict column count
        .from_reader(input.as_bytes());

    reader
        .deserialize::<TaxForm>()
        .enumerate()
        .map(|(idx, result)| {
            let form = result?;
            let row = idx + 1; // 1-based for user-facing messages
            form.validate()
                .map_err(|source| CsvLoadError::InvalidRow { row, source })
        })
        .collect()
}

/// Read a file from disk and delegate to [load_from_str].
pub fn load_from_file(path: &Path) -> Result<Vec<TaxInput>, CsvLoadError> {
    let contents = std::fs::read_to_string(path).map_err(|source| CsvLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    load_from_str(&contents)
}
