//! Dependant exemptions.
//!
//! Each child and each supported parent earns a fixed exemption. The
//! per-category amounts are uncapped; the cap applies to their sum.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Exemption per child.
pub const CHILD_EXEMPTION: Decimal = dec!(4000);

/// Exemption per parent.
pub const PARENT_EXEMPTION: Decimal = dec!(2000);

/// Maximum combined exemption.
pub const MAX_TOTAL_EXEMPTIONS: Decimal = dec!(8000);

/// Calculates the child exemption: 4,000 per child.
pub fn calculate_child_exemption(num_children: u32) -> Decimal {
    Decimal::from(num_children) * CHILD_EXEMPTION
}

/// Calculates the parent exemption: 2,000 per parent.
pub fn calculate_parent_exemption(num_parents: u32) -> Decimal {
    Decimal::from(num_parents) * PARENT_EXEMPTION
}

/// Caps the combined child and parent exemptions at 8,000.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::calculate_total_exemptions;
///
/// assert_eq!(calculate_total_exemptions(dec!(7000)), dec!(7000));
/// assert_eq!(calculate_total_exemptions(dec!(9000)), dec!(8000));
/// ```
pub fn calculate_total_exemptions(exemptions: Decimal) -> Decimal {
    exemptions.min(MAX_TOTAL_EXEMPTIONS)
}
