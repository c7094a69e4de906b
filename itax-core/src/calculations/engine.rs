//! Single-regime tax computation.
//!
//! # Computation order
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | House-property income (regime-specific caps and set-off) |
//! | 2    | Other sources: interest + other income |
//! | 3    | Digital-asset income, kept apart from slab income |
//! | 4    | Total deductions for the regime |
//! | 5    | Gross total income (house property counted only when positive) |
//! | 6    | Taxable slab income: salary + other + house property - deductions, min 0 |
//! | 7    | Slab tax |
//! | 8    | Flat 30% tax on digital-asset income |
//! | 9    | Tax before rebate (Step 7 + Step 8) |
//! | 10   | Section 87A rebate, with marginal relief under the New regime |
//! | 11   | Tax after rebate, min 0 |
//! | 12   | 4% cess |
//! | 13   | Total payable, rounded to whole rupees |
//! | 14   | Effective rate against gross total income |
//!
//! Surcharge is not computed and is always reported as zero.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use itax_core::{Regime, TaxInput};
//! use itax_core::calculations::RegimeEngine;
//!
//! let input = TaxInput::salaried(dec!(600000));
//!
//! let old = RegimeEngine::new(Regime::Old).calculate(&input);
//! let new = RegimeEngine::new(Regime::New).calculate(&input);
//!
//! assert_eq!(old.total_tax_payable, dec!(23400));
//! assert_eq!(new.total_tax_payable, dec!(0));
//! ```

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::calculations::common::{max, round_half_up, round_to_rupee};
use crate::calculations::deductions::resolve_deductions;
use crate::calculations::house_property::resolve_house_property;
use crate::calculations::slab::SlabTaxCalculator;
use crate::models::{
    CESS_RATE, Regime, RegimePolicy, SPECIAL_INCOME_RATE, TaxCalculationDetail, TaxInput,
};

/// Runs the full computation for one regime.
#[derive(Debug, Clone, Copy)]
pub struct RegimeEngine {
    regime: Regime,
    policy: &'static RegimePolicy,
}

impl RegimeEngine {
    pub fn new(regime: Regime) -> Self {
        Self {
            regime,
            policy: regime.policy(),
        }
    }

    pub fn regime(&self) -> Regime {
        self.regime
    }

    /// Computes tax payable under this engine's regime.
    ///
    /// Absent amounts count as zero. Negative amounts are not rejected here;
    /// validate the input first if that matters to the caller.
    pub fn calculate(
        &self,
        input: &TaxInput,
    ) -> TaxCalculationDetail {
        let input = input.resolve();

        // Step 1: house property
        let house_property = resolve_house_property(
            input.rental_income,
            input.home_loan_let_out,
            input.home_loan_self_occupied,
            self.regime,
        );

        // Steps 2-3: other sources and special-rate income
        let other_sources = input.interest_income + input.other_income;
        let special_income = input.digital_assets_income;

        // Step 4: deductions
        let total_deductions = resolve_deductions(&input, self.regime);

        // Step 5: gross total income
        let gross_total_income = input.gross_salary
            + other_sources
            + special_income
            + max(house_property, Decimal::ZERO);

        // Step 6: taxable slab income
        let taxable_slab_income = self.taxable_slab_income(
            input.gross_salary + other_sources + house_property,
            total_deductions,
        );

        // Steps 7-9: slab tax, special tax, tax before rebate
        let slab_tax = SlabTaxCalculator::new(self.policy.slabs).calculate(taxable_slab_income);
        let tax_from_special = special_income * SPECIAL_INCOME_RATE;
        let tax_before_rebate = slab_tax.tax + tax_from_special;

        // Step 10: rebate
        let rebate = self.rebate(taxable_slab_income + special_income, tax_before_rebate);

        // Steps 11-13: tax after rebate, cess, total
        let tax_after_rebate = max(tax_before_rebate - rebate, Decimal::ZERO);
        let cess = tax_after_rebate * CESS_RATE;
        let total_tax_payable = round_to_rupee(tax_after_rebate + cess);

        // Step 14: effective rate
        let effective_tax_rate = self.effective_tax_rate(total_tax_payable, gross_total_income);

        debug!(
            regime = %self.regime,
            taxable_slab_income = %taxable_slab_income,
            tax_before_rebate = %tax_before_rebate,
            rebate = %rebate,
            total_tax_payable = %total_tax_payable,
            "regime computed"
        );

        TaxCalculationDetail {
            regime: self.regime,
            gross_total_income,
            house_property_income: house_property,
            total_deductions,
            taxable_slab_income,
            taxable_special_income: special_income,
            tax_from_slabs: slab_tax.tax,
            tax_from_special,
            rebate,
            tax_after_rebate,
            surcharge: Decimal::ZERO,
            cess,
            total_tax_payable,
            effective_tax_rate,
            slab_breakdown: slab_tax.breakdown,
        }
    }

    fn taxable_slab_income(
        &self,
        income: Decimal,
        deductions: Decimal,
    ) -> Decimal {
        max(income - deductions, Decimal::ZERO)
    }

    /// Section 87A rebate on `tax` for total income `rebate_base`.
    ///
    /// Within the threshold the rebate is the whole tax up to the cap. Above
    /// it, regimes without marginal relief get nothing; with marginal relief
    /// the tax is limited to the income in excess of the threshold.
    fn rebate(
        &self,
        rebate_base: Decimal,
        tax: Decimal,
    ) -> Decimal {
        let policy = &self.policy.rebate;

        if rebate_base <= policy.threshold {
            return tax.min(policy.max_rebate);
        }

        let excess = rebate_base - policy.threshold;

        if !policy.marginal_relief {
            if excess < tax.min(policy.max_rebate) {
                warn!(
                    regime = %self.regime,
                    excess = %excess,
                    tax = %tax,
                    "income just above rebate threshold; rebate lost in full"
                );
            }
            return Decimal::ZERO;
        }

        if tax > excess {
            debug!(
                regime = %self.regime,
                excess = %excess,
                tax = %tax,
                "marginal relief applied"
            );
            tax - excess
        } else {
            Decimal::ZERO
        }
    }

    fn effective_tax_rate(
        &self,
        total_tax_payable: Decimal,
        gross_total_income: Decimal,
    ) -> Decimal {
        if gross_total_income > Decimal::ZERO {
            round_half_up(total_tax_payable / gross_total_income * Decimal::ONE_HUNDRED)
        } else {
            Decimal::ZERO
        }
    }
}

/// Computes `input` under `regime`.
pub fn run_regime(
    input: &TaxInput,
    regime: Regime,
) -> TaxCalculationDetail {
    RegimeEngine::new(regime).calculate(input)
}
