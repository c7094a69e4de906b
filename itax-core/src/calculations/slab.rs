//! Progressive slab taxation.
//!
//! Income is split across ascending brackets; each slice is taxed at its
//! bracket's marginal rate.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use itax_core::NEW_REGIME_SLABS;
//! use itax_core::calculations::SlabTaxCalculator;
//!
//! let calculator = SlabTaxCalculator::new(NEW_REGIME_SLABS);
//! let result = calculator.calculate(dec!(1000000));
//!
//! // 0-4L at 0%, 4-8L at 5%, 8-10L at 10%
//! assert_eq!(result.tax, dec!(40000));
//! assert_eq!(result.breakdown.len(), 3);
//! assert_eq!(result.breakdown[2].range_label, "8.0L-12.0L");
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::format_lakhs;
use crate::models::{SlabBracket, SlabTaxItem};

/// Total slab tax and the per-bracket contributions that make it up.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlabTax {
    pub tax: Decimal,
    /// Brackets with a positive taxable slice, ascending.
    pub breakdown: Vec<SlabTaxItem>,
}

#[derive(Debug, Clone, Copy)]
pub struct SlabTaxCalculator<'a> {
    brackets: &'a [SlabBracket],
}

impl<'a> SlabTaxCalculator<'a> {
    /// Brackets must be sorted by `lower_bound`, contiguous from zero, with
    /// an unbounded last bracket (see [`crate::models::validate_slabs`]).
    pub fn new(brackets: &'a [SlabBracket]) -> Self {
        Self { brackets }
    }

    pub fn calculate(
        &self,
        taxable_income: Decimal,
    ) -> SlabTax {
        let mut result = SlabTax::default();

        for bracket in self.brackets {
            if taxable_income <= bracket.lower_bound {
                break;
            }

            let in_bracket = self.amount_in_bracket(taxable_income, bracket);
            if in_bracket <= Decimal::ZERO {
                continue;
            }

            let amount = in_bracket * bracket.rate;
            result.tax += amount;
            result.breakdown.push(SlabTaxItem {
                range_label: range_label(bracket),
                rate: bracket.rate,
                taxable_amount: in_bracket,
                amount,
            });
        }

        result
    }

    /// `clamp(income - lower, 0, width)`; the top bracket has no width cap.
    fn amount_in_bracket(
        &self,
        taxable_income: Decimal,
        bracket: &SlabBracket,
    ) -> Decimal {
        let above_lower = (taxable_income - bracket.lower_bound).max(Decimal::ZERO);
        match bracket.width() {
            Some(width) => above_lower.min(width),
            None => above_lower,
        }
    }
}

/// Tax on `taxable_income` under `brackets`.
pub fn compute_slab_tax(
    taxable_income: Decimal,
    brackets: &[SlabBracket],
) -> SlabTax {
    SlabTaxCalculator::new(brackets).calculate(taxable_income)
}

fn range_label(bracket: &SlabBracket) -> String {
    match bracket.upper_bound {
        Some(upper) => format!(
            "{}-{}",
            format_lakhs(bracket.lower_bound),
            format_lakhs(upper)
        ),
        None => format!("> {}", format_lakhs(bracket.lower_bound)),
    }
}
