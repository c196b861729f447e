//! The estimate form's calculator.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use tax_core::{TaxCalculator, TaxInput};
//!
//! let mut calculator = TaxCalculator::new();
//! let breakdown = calculator.calculate(TaxInput::new(dec!(65000), 2, 1));
//!
//! assert_eq!(breakdown.income_tax, dec!(2550));
//! assert_eq!(breakdown.exemptions, dec!(8000));
//! assert_eq!(breakdown.tax_after_exemptions, dec!(-5450));
//! assert!(breakdown.is_refund());
//! ```

use rust_decimal::Decimal;
use tracing::debug;

use crate::calculations::exemptions::{
    calculate_child_exemption, calculate_parent_exemption, calculate_total_exemptions,
};
use crate::calculations::income_tax::calculate_income_tax;
use crate::models::{TaxBreakdown, TaxInput};

/// The individual rules a calculation is made of.
///
/// Every method defaults to the fixed schedule, so [`StandardRules`] is an
/// empty impl.
pub trait TaxRules {
    fn income_tax(
        &self,
        income: Decimal,
    ) -> Decimal {
        calculate_income_tax(income)
    }

    fn child_exemption(
        &self,
        num_children: u32,
    ) -> Decimal {
        calculate_child_exemption(num_children)
    }

    fn parent_exemption(
        &self,
        num_parents: u32,
    ) -> Decimal {
        calculate_parent_exemption(num_parents)
    }

    fn total_exemptions(
        &self,
        exemptions: Decimal,
    ) -> Decimal {
        calculate_total_exemptions(exemptions)
    }
}

/// The fixed bracket and exemption schedule.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardRules;

impl TaxRules for StandardRules {}

/// Computes a [`TaxBreakdown`] from a [`TaxInput`] using `rules`.
///
/// Always succeeds. The net figure is negative when exemptions exceed the
/// income tax.
pub fn estimate_with<R: TaxRules + ?Sized>(
    rules: &R,
    input: TaxInput,
) -> TaxBreakdown {
    let income_tax = rules.income_tax(input.income);
    let child_exemption = rules.child_exemption(input.num_children);
    let parent_exemption = rules.parent_exemption(input.num_parents);
    let exemptions = rules.total_exemptions(child_exemption + parent_exemption);
    let tax_after_exemptions = income_tax - exemptions;

    debug!(
        income = %input.income,
        num_children = input.num_children,
        num_parents = input.num_parents,
        %income_tax,
        %child_exemption,
        %parent_exemption,
        %exemptions,
        %tax_after_exemptions,
        "calculated tax breakdown"
    );

    TaxBreakdown {
        income_tax,
        exemptions,
        tax_after_exemptions,
    }
}

/// Computes a [`TaxBreakdown`] with the fixed schedule.
pub fn estimate(input: TaxInput) -> TaxBreakdown {
    estimate_with(&StandardRules, input)
}

/// Holds the breakdown shown by the estimate form.
///
/// Starts out zeroed and not computed. Each call to
/// [`calculate`](Self::calculate) replaces the whole breakdown.
#[derive(Debug, Clone, Default)]
pub struct TaxCalculator<R = StandardRules> {
    rules: R,
    breakdown: TaxBreakdown,
    computed: bool,
}

impl TaxCalculator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R: TaxRules> TaxCalculator<R> {
    pub fn with_rules(rules: R) -> Self {
        Self {
            rules,
            breakdown: TaxBreakdown::default(),
            computed: false,
        }
    }

    /// Recomputes the breakdown from `input` and returns it.
    pub fn calculate(
        &mut self,
        input: TaxInput,
    ) -> &TaxBreakdown {
        self.breakdown = estimate_with(&self.rules, input);
        self.computed = true;
        &self.breakdown
    }

    /// The current breakdown. All zeros until the first calculation.
    pub fn breakdown(&self) -> &TaxBreakdown {
        &self.breakdown
    }

    /// The breakdown, or `None` if nothing has been calculated yet.
    pub fn computed(&self) -> Option<&TaxBreakdown> {
        self.computed.then_some(&self.breakdown)
    }

    pub fn is_computed(&self) -> bool {
        self.computed
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn input(
        income: Decimal,
        num_children: u32,
        num_parents: u32,
    ) -> TaxInput {
        TaxInput::new(income, num_children, num_parents)
    }

    /// Returns fixed amounts and counts the exemption lookups.
    #[derive(Default)]
    struct FixedRules {
        child_calls: Cell<u32>,
        parent_calls: Cell<u32>,
    }

    impl TaxRules for FixedRules {
        fn income_tax(
            &self,
            _income: Decimal,
        ) -> Decimal {
            dec!(5350)
        }

        fn child_exemption(
            &self,
            _num_children: u32,
        ) -> Decimal {
            self.child_calls.set(self.child_calls.get() + 1);
            dec!(8000)
        }

        fn parent_exemption(
            &self,
            _num_parents: u32,
        ) -> Decimal {
            self.parent_calls.set(self.parent_calls.get() + 1);
            dec!(2000)
        }

        fn total_exemptions(
            &self,
            _exemptions: Decimal,
        ) -> Decimal {
            dec!(8000)
        }
    }

    // =========================================================================
    // estimate tests
    // =========================================================================

    #[test]
    fn estimate_without_dependants_is_income_tax() {
        let breakdown = estimate(input(dec!(40000), 0, 0));

        assert_eq!(
            breakdown,
            TaxBreakdown {
                income_tax: dec!(800),
                exemptions: dec!(0),
                tax_after_exemptions: dec!(800),
            }
        );
    }

    #[test]
    fn estimate_caps_many_children() {
        let breakdown = estimate(input(dec!(0), 10, 0));

        assert_eq!(breakdown.exemptions, dec!(8000));
        assert_eq!(breakdown.tax_after_exemptions, dec!(-8000));
    }

    #[test]
    fn estimate_two_children_one_parent() {
        let breakdown = estimate(input(dec!(65000), 2, 1));

        assert_eq!(breakdown.income_tax, dec!(2550));
        assert_eq!(breakdown.exemptions, dec!(8000));
        assert_eq!(breakdown.tax_after_exemptions, dec!(-5450));
    }

    #[test]
    fn estimate_partial_exemptions_below_cap() {
        let breakdown = estimate(input(dec!(999999), 1, 1));

        assert_eq!(breakdown.income_tax, dec!(157199.83));
        assert_eq!(breakdown.exemptions, dec!(6000));
        assert_eq!(breakdown.tax_after_exemptions, dec!(151199.83));
    }

    #[test]
    fn estimate_with_uses_each_rule_once() {
        let rules = FixedRules::default();

        let breakdown = estimate_with(&rules, input(dec!(65000), 2, 1));

        assert_eq!(rules.child_calls.get(), 1);
        assert_eq!(rules.parent_calls.get(), 1);
        assert_eq!(breakdown.income_tax, dec!(5350));
        assert_eq!(breakdown.exemptions, dec!(8000));
        assert_eq!(breakdown.tax_after_exemptions, dec!(-2650));
    }

    // =========================================================================
    // TaxCalculator tests
    // =========================================================================

    #[test]
    fn new_calculator_is_zeroed_and_not_computed() {
        let calculator = TaxCalculator::new();

        assert_eq!(calculator.breakdown(), &TaxBreakdown::default());
        assert!(!calculator.is_computed());
        assert_eq!(calculator.computed(), None);
    }

    #[test]
    fn calculate_populates_breakdown() {
        let mut calculator = TaxCalculator::new();

        calculator.calculate(input(dec!(81000), 0, 0));

        assert!(calculator.is_computed());
        assert_eq!(calculator.breakdown().income_tax, dec!(3720));
        assert_eq!(
            calculator.computed().map(|b| b.income_tax),
            Some(dec!(3720))
        );
    }

    #[test]
    fn calculate_with_custom_rules() {
        let mut calculator = TaxCalculator::with_rules(FixedRules::default());

        let breakdown = *calculator.calculate(input(dec!(65000), 2, 1));

        assert_eq!(breakdown.tax_after_exemptions, dec!(-2650));
    }

    #[test]
    fn calculate_is_idempotent() {
        let mut calculator = TaxCalculator::new();
        let tax_input = input(dec!(65000), 2, 1);

        let first = *calculator.calculate(tax_input);
        let second = *calculator.calculate(tax_input);

        assert_eq!(first, second);
    }

    #[test]
    fn calculate_replaces_previous_breakdown() {
        let mut calculator = TaxCalculator::new();

        calculator.calculate(input(dec!(999999), 0, 3));
        let breakdown = *calculator.calculate(input(dec!(40000), 0, 0));

        assert_eq!(breakdown, estimate(input(dec!(40000), 0, 0)));
        assert_eq!(breakdown.exemptions, dec!(0));
    }
}
