//! Salary structure and in-hand pay from cost to company (CTC).
//!
//! # Components (annual)
//!
//! | Component        | Rule |
//! |------------------|------|
//! | Basic            | (CTC - superannuation) x basic % |
//! | HRA              | 50% of basic in a metro, 40% otherwise |
//! | Employer PF      | 12% of basic |
//! | Food coupons     | monthly amount x 12 |
//! | Special          | balancing figure, min 0 |
//! | Taxable gross    | basic + HRA + special + employer NPS |
//!
//! Employee PF (12% of basic) plus VPF is claimed under 80C, employer NPS
//! under 80CCD(2), and professional tax as an other deduction.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calculations::common::{max, round_half_up};
use crate::calculations::comparator::compare_regimes;
use crate::models::{Regime, TaxComparisonResult, TaxInput};

const PF_RATE: Decimal = dec!(0.12);
const METRO_HRA_RATE: Decimal = dec!(0.50);
const NON_METRO_HRA_RATE: Decimal = dec!(0.40);
const MONTHS: Decimal = dec!(12);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SalaryError {
    #[error("basic percentage must be greater than 0 and at most 100, got {0}")]
    InvalidBasicPercentage(Decimal),

    #[error("{field} must not be negative, got {value}")]
    NegativeAmount { field: &'static str, value: Decimal },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryInput {
    pub ctc: Decimal,
    /// Basic pay as a percentage of CTC net of superannuation, e.g. `50`.
    pub basic_percentage: Decimal,
    pub vpf_monthly: Decimal,
    pub professional_tax_monthly: Decimal,
    pub food_coupon_monthly: Decimal,
    /// Annual.
    pub super_annuation: Decimal,
    /// Annual employer contribution to NPS.
    pub nps_employer: Decimal,
    pub is_metro: bool,
    pub tax_regime: Regime,
}

impl SalaryInput {
    pub fn validate(&self) -> Result<(), SalaryError> {
        if self.basic_percentage <= Decimal::ZERO || self.basic_percentage > Decimal::ONE_HUNDRED {
            return Err(SalaryError::InvalidBasicPercentage(self.basic_percentage));
        }

        let amounts = [
            ("ctc", self.ctc),
            ("vpf_monthly", self.vpf_monthly),
            ("professional_tax_monthly", self.professional_tax_monthly),
            ("food_coupon_monthly", self.food_coupon_monthly),
            ("super_annuation", self.super_annuation),
            ("nps_employer", self.nps_employer),
        ];
        match amounts.into_iter().find(|(_, value)| *value < Decimal::ZERO) {
            Some((field, value)) => Err(SalaryError::NegativeAmount { field, value }),
            None => Ok(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySalary {
    pub basic: Decimal,
    pub hra: Decimal,
    pub special: Decimal,
    pub gross_cash: Decimal,
    pub pf_employee: Decimal,
    pub vpf: Decimal,
    pub professional_tax: Decimal,
    pub tax: Decimal,
    pub total_deductions: Decimal,
    pub net_in_hand: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnualSalary {
    pub ctc: Decimal,
    pub basic: Decimal,
    pub hra: Decimal,
    pub special: Decimal,
    pub food_coupon: Decimal,
    pub nps_employer: Decimal,
    pub employer_pf: Decimal,
    pub super_annuation: Decimal,
    pub gross_taxable_salary: Decimal,
    /// Tax under the regime chosen in [`SalaryInput::tax_regime`].
    pub total_tax: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryResult {
    pub monthly: MonthlySalary,
    pub annual: AnnualSalary,
    pub tax_comparison: TaxComparisonResult,
}

/// Splits `input.ctc` into salary components and computes in-hand pay.
///
/// # Errors
///
/// Returns [`SalaryError`] when the basic percentage is out of range or an
/// amount is negative.
pub fn calculate_salary_breakdown(input: &SalaryInput) -> Result<SalaryResult, SalaryError> {
    input.validate()?;

    let basic = (input.ctc - input.super_annuation) * input.basic_percentage / dec!(100);
    let hra_rate = if input.is_metro {
        METRO_HRA_RATE
    } else {
        NON_METRO_HRA_RATE
    };
    let hra = basic * hra_rate;
    let employer_pf = basic * PF_RATE;
    let food_coupon = input.food_coupon_monthly * MONTHS;

    let special = max(
        input.ctc
            - (basic
                + hra
                + employer_pf
                + input.nps_employer
                + input.super_annuation
                + food_coupon),
        Decimal::ZERO,
    );

    // Food coupons are treated as exempt and left out of taxable gross.
    let gross_taxable_salary = basic + hra + special + input.nps_employer;

    let employee_pf = basic * PF_RATE;
    let vpf = input.vpf_monthly * MONTHS;
    let professional_tax = input.professional_tax_monthly * MONTHS;

    let tax_comparison = compare_regimes(&TaxInput {
        gross_salary: gross_taxable_salary,
        nps_employer_80ccd2: Some(input.nps_employer),
        section_80c: Some(employee_pf + vpf),
        other_deductions: Some(professional_tax),
        ..TaxInput::default()
    });
    let total_tax = tax_comparison.detail(input.tax_regime).total_tax_payable;

    let monthly_gross_cash = (basic + hra + special) / MONTHS;
    let monthly_pf = employee_pf / MONTHS;
    let monthly_tax = round_half_up(total_tax / MONTHS);
    let monthly_deductions =
        monthly_pf + input.vpf_monthly + input.professional_tax_monthly + monthly_tax;

    Ok(SalaryResult {
        monthly: MonthlySalary {
            basic: round_half_up(basic / MONTHS),
            hra: round_half_up(hra / MONTHS),
            special: round_half_up(special / MONTHS),
            gross_cash: round_half_up(monthly_gross_cash),
            pf_employee: round_half_up(monthly_pf),
            vpf: input.vpf_monthly,
            professional_tax: input.professional_tax_monthly,
            tax: monthly_tax,
            total_deductions: round_half_up(monthly_deductions),
            net_in_hand: round_half_up(monthly_gross_cash - monthly_deductions),
        },
        annual: AnnualSalary {
            ctc: input.ctc,
            basic,
            hra,
            special,
            food_coupon,
            nps_employer: input.nps_employer,
            employer_pf,
            super_annuation: input.super_annuation,
            gross_taxable_salary,
            total_tax,
        },
        tax_comparison,
    })
}
