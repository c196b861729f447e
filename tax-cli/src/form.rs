//! The estimate form: raw field text in, validated [`TaxInput`] out.
//!
//! Every field is required and must be a number no smaller than zero. The
//! dependant counts must also be whole numbers. Calculation only runs once
//! the whole form is valid.

use std::fmt;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use tax_core::TaxInput;
use thiserror::Error;

use crate::utils::parse_decimal;

/// A form field, used to label validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Income,
    NumChildren,
    NumParents,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::NumChildren => "number of children",
            Self::NumParents => "number of parents",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Why a single field was rejected.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("{field} is required")]
    Required { field: Field },

    #[error("{field} must be a number, got '{input}'")]
    NotANumber { field: Field, input: String },

    #[error("{field} must not be negative")]
    Negative { field: Field },

    #[error("{field} must be a whole number")]
    NotWholeNumber { field: Field },

    #[error("{field} is too large")]
    OutOfRange { field: Field },
}

impl FieldError {
    pub fn field(&self) -> Field {
        match self {
            Self::Required { field }
            | Self::NotANumber { field, .. }
            | Self::Negative { field }
            | Self::NotWholeNumber { field }
            | Self::OutOfRange { field } => *field,
        }
    }
}

/// All field errors found in one form submission.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{}", join_errors(.errors))]
pub struct FormError {
    errors: Vec<FieldError>,
}

impl FormError {
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }
}

fn join_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Raw text of the estimate form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxForm {
    pub income: String,
    pub num_children: String,
    pub num_parents: String,
}

impl TaxForm {
    pub fn new(
        income: impl Into<String>,
        num_children: impl Into<String>,
        num_parents: impl Into<String>,
    ) -> Self {
        Self {
            income: income.into(),
            num_children: num_children.into(),
            num_parents: num_parents.into(),
        }
    }

    /// Whether the form would pass [`validate`](Self::validate).
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Checks every field and builds a [`TaxInput`].
    ///
    /// # Errors
    ///
    /// Returns a [`FormError`] listing every invalid field, in form order.
    pub fn validate(&self) -> Result<TaxInput, FormError> {
        let income = parse_amount(Field::Income, &self.income);
        let num_children = parse_count(Field::NumChildren, &self.num_children);
        let num_parents = parse_count(Field::NumParents, &self.num_parents);

        match (income, num_children, num_parents) {
            (Ok(income), Ok(num_children), Ok(num_parents)) => {
                Ok(TaxInput::new(income, num_children, num_parents))
            }
            (income, num_children, num_parents) => {
                let errors = [income.err(), num_children.err(), num_parents.err()]
                    .into_iter()
                    .flatten()
                    .collect();
                Err(FormError { errors })
            }
        }
    }
}

/// Parses a required, non-negative amount.
fn parse_amount(
    field: Field,
    input: &str,
) -> Result<Decimal, FieldError> {
    let value = parse_decimal(input)
        .map_err(|e| FieldError::NotANumber {
            field,
            input: e.input().to_string(),
        })?
        .ok_or(FieldError::Required { field })?;

    if value < Decimal::ZERO {
        return Err(FieldError::Negative { field });
    }
    Ok(value)
}

/// Parses a required, non-negative whole number.
fn parse_count(
    field: Field,
    input: &str,
) -> Result<u32, FieldError> {
    let value = parse_amount(field, input)?;

    if !value.fract().is_zero() {
        return Err(FieldError::NotWholeNumber { field });
    }
    value.to_u32().ok_or(FieldError::OutOfRange { field })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn valid_form_builds_input() {
        let form = TaxForm::new("65,000", "2", "1");

        assert_eq!(form.validate(), Ok(TaxInput::new(dec!(65000), 2, 1)));
        assert!(form.is_valid());
    }

    #[test]
    fn zero_values_are_valid() {
        let form = TaxForm::new("0", "0", "0");

        assert_eq!(form.validate(), Ok(TaxInput::new(dec!(0), 0, 0)));
    }

    #[test]
    fn empty_form_is_invalid() {
        let err = TaxForm::default().validate().unwrap_err();

        assert_eq!(
            err.errors(),
            &[
                FieldError::Required {
                    field: Field::Income
                },
                FieldError::Required {
                    field: Field::NumChildren
                },
                FieldError::Required {
                    field: Field::NumParents
                },
            ]
        );
        assert!(!TaxForm::default().is_valid());
    }

    #[test]
    fn negative_income_is_rejected() {
        let err = TaxForm::new("-1", "0", "0").validate().unwrap_err();

        assert_eq!(
            err.errors(),
            &[FieldError::Negative {
                field: Field::Income
            }]
        );
    }

    #[test]
    fn non_numeric_field_is_rejected() {
        let err = TaxForm::new("lots", "0", "0").validate().unwrap_err();

        assert_eq!(
            err.errors(),
            &[FieldError::NotANumber {
                field: Field::Income,
                input: "lots".to_string(),
            }]
        );
    }

    #[test]
    fn fractional_count_is_rejected() {
        let err = TaxForm::new("1000", "1.5", "0").validate().unwrap_err();

        assert_eq!(err.errors()[0].field(), Field::NumChildren);
        assert_eq!(
            err.errors()[0],
            FieldError::NotWholeNumber {
                field: Field::NumChildren
            }
        );
    }

    #[test]
    fn whole_count_with_decimal_point_is_accepted() {
        let form = TaxForm::new("1000", "2.0", "1.00");

        assert_eq!(form.validate(), Ok(TaxInput::new(dec!(1000), 2, 1)));
    }

    #[test]
    fn oversized_count_is_rejected() {
        let err = TaxForm::new("1000", "0", "99999999999").validate().unwrap_err();

        assert_eq!(
            err.errors(),
            &[FieldError::OutOfRange {
                field: Field::NumParents
            }]
        );
    }

    #[test]
    fn negative_count_is_rejected() {
        let err = TaxForm::new("1000", "0", "-2").validate().unwrap_err();

        assert_eq!(
            err.errors(),
            &[FieldError::Negative {
                field: Field::NumParents
            }]
        );
    }

    #[test]
    fn form_error_lists_every_field() {
        let err = TaxForm::new("", "x", "-1").validate().unwrap_err();

        assert_eq!(
            err.to_string(),
            "income is required; number of children must be a number, got 'x'; \
             number of parents must not be negative"
        );
    }
}
