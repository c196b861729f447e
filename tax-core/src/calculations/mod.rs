//! Tax calculation logic for the estimate form.
//!
//! The income tax and exemption rules are plain functions over the three
//! form inputs; [`TaxCalculator`] runs them in order and keeps the latest
//! [`TaxBreakdown`](crate::TaxBreakdown).

pub mod calculator;
pub mod common;
pub mod exemptions;
pub mod income_tax;

pub use calculator::{StandardRules, TaxCalculator, TaxRules, estimate, estimate_with};
pub use exemptions::{
    calculate_child_exemption, calculate_parent_exemption, calculate_total_exemptions,
};
pub use income_tax::calculate_income_tax;
