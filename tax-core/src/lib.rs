pub mod calculations;
pub mod models;

pub use calculations::{StandardRules, TaxCalculator, TaxRules, estimate, estimate_with};
pub use models::*;
