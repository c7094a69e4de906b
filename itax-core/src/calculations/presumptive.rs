//! Presumptive taxation for professionals (section 44ADA).
//!
//! Half of gross receipts is deemed to be income. That income, together
//! with any other income, is passed to the regime comparison with no salary.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use itax_core::calculations::{PresumptiveInput, calculate_presumptive_tax};
//!
//! let result = calculate_presumptive_tax(&PresumptiveInput::with_revenue(dec!(2000000)));
//!
//! assert_eq!(result.presumptive_income, dec!(1000000));
//! assert_eq!(result.tax_comparison.new_regime.total_tax_payable, dec!(0));
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::calculations::common::max;
use crate::calculations::comparator::compare_regimes;
use crate::calculations::limits::StatutoryLimits;
use crate::models::{TaxComparisonResult, TaxInput};

/// Share of gross receipts deemed to be taxable income.
pub const PRESUMPTIVE_INCOME_RATE: Decimal = dec!(0.50);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresumptiveInput {
    pub annual_revenue: Decimal,
    pub other_income: Option<Decimal>,
    pub section_80c: Option<Decimal>,
    pub section_80d: Option<Decimal>,
    pub section_80ccd1b: Option<Decimal>,
    pub other_deductions: Option<Decimal>,
    /// Caps applied to the claimed deductions before the comparison.
    pub limits: Option<StatutoryLimits>,
}

impl PresumptiveInput {
    pub fn with_revenue(annual_revenue: Decimal) -> Self {
        Self {
            annual_revenue,
            ..Self::default()
        }
    }

    fn tax_input(
        &self,
        income: Decimal,
    ) -> TaxInput {
        let input = TaxInput {
            gross_salary: Decimal::ZERO,
            other_income: Some(income),
            section_80c: self.section_80c,
            section_80d: self.section_80d,
            section_80ccd1b: self.section_80ccd1b,
            other_deductions: self.other_deductions,
            ..TaxInput::default()
        };
        match &self.limits {
            Some(limits) => limits.apply(&input),
            None => input,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresumptiveResult {
    pub presumptive_income: Decimal,
    /// Presumptive income plus other income.
    pub total_taxable_income: Decimal,
    pub tax_comparison: TaxComparisonResult,
    /// Extra tax that declaring the full revenue as income would have cost.
    pub tax_saved_if_declared_fully: Decimal,
}

pub fn calculate_presumptive_tax(input: &PresumptiveInput) -> PresumptiveResult {
    let other_income = input.other_income.unwrap_or(Decimal::ZERO);
    let presumptive_income = input.annual_revenue * PRESUMPTIVE_INCOME_RATE;
    let total_taxable_income = presumptive_income + other_income;

    let tax_comparison = compare_regimes(&input.tax_input(total_taxable_income));
    let declared_fully = compare_regimes(&input.tax_input(input.annual_revenue + other_income));

    let tax_saved_if_declared_fully = max(
        declared_fully.payable() - tax_comparison.payable(),
        Decimal::ZERO,
    );

    PresumptiveResult {
        presumptive_income,
        total_taxable_income,
        tax_comparison,
        tax_saved_if_declared_fully,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn twenty_lakh_revenue_is_fully_rebated_under_new_regime() {
        let result = calculate_presumptive_tax(&PresumptiveInput::with_revenue(dec!(2000000)));

        assert_eq!(result.presumptive_income, dec!(1000000));
        assert_eq!(result.total_taxable_income, dec!(1000000));
        assert_eq!(
            result.tax_comparison.new_regime.gross_total_income,
            dec!(1000000)
        );
        assert_eq!(result.tax_comparison.new_regime.total_tax_payable, dec!(0));
    }

    #[test]
    fn high_revenue_attracts_tax() {
        let result = calculate_presumptive_tax(&PresumptiveInput::with_revenue(dec!(5000000)));

        assert_eq!(result.presumptive_income, dec!(2500000));
        // 24.25L taxable: 20000 + 40000 + 60000 + 80000 + 100000 + 7500 = 307500
        assert_eq!(
            result.tax_comparison.new_regime.total_tax_payable,
            dec!(319800)
        );
    }

    #[test]
    fn other_income_is_added() {
        let input = PresumptiveInput {
            annual_revenue: dec!(2000000),
            other_income: Some(dec!(500000)),
            ..PresumptiveInput::default()
        };

        let result = calculate_presumptive_tax(&input);

        assert_eq!(result.presumptive_income, dec!(1000000));
        assert_eq!(result.total_taxable_income, dec!(1500000));
    }

    #[test]
    fn tax_saved_against_full_declaration() {
        let result = calculate_presumptive_tax(&PresumptiveInput::with_revenue(dec!(2000000)));

        // Full 20L under New: 19.25L taxable -> 185000 + 4% cess
        assert_eq!(result.tax_saved_if_declared_fully, dec!(192400));
    }

    #[test]
    fn deductions_flow_to_old_regime() {
        let input = PresumptiveInput {
            annual_revenue: dec!(3000000),
            section_80c: Some(dec!(150000)),
            section_80d: Some(dec!(25000)),
            ..PresumptiveInput::default()
        };

        let result = calculate_presumptive_tax(&input);

        assert_eq!(
            result.tax_comparison.old_regime.total_deductions,
            dec!(225000)
        );
        assert_eq!(
            result.tax_comparison.new_regime.total_deductions,
            dec!(75000)
        );
    }

    #[test]
    fn limits_cap_claimed_deductions() {
        let uncapped = PresumptiveInput {
            annual_revenue: dec!(3000000),
            section_80c: Some(dec!(500000)),
            section_80ccd1b: Some(dec!(200000)),
            ..PresumptiveInput::default()
        };
        let capped = PresumptiveInput {
            limits: Some(StatutoryLimits::default()),
            ..uncapped.clone()
        };

        let raw = calculate_presumptive_tax(&uncapped);
        let result = calculate_presumptive_tax(&capped);

        assert_eq!(raw.tax_comparison.old_regime.total_deductions, dec!(750000));
        // 50000 standard + 150000 80C + 50000 80CCD(1B)
        assert_eq!(
            result.tax_comparison.old_regime.total_deductions,
            dec!(250000)
        );
        assert_eq!(
            result.tax_comparison.new_regime.total_deductions,
            dec!(75000)
        );
    }

    #[test]
    fn zero_revenue_saves_nothing() {
        let result = calculate_presumptive_tax(&PresumptiveInput::default());

        assert_eq!(result.tax_saved_if_declared_fully, dec!(0));
    }
}
