use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Regime;

/// Tax attributable to one slab bracket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlabTaxItem {
    /// Display range in lakhs, e.g. `"4.0L-8.0L"` or `"> 24.0L"`.
    pub range_label: String,
    /// Marginal rate as a fraction.
    pub rate: Decimal,
    /// Portion of taxable income that falls inside the bracket.
    pub taxable_amount: Decimal,
    /// Tax levied on `taxable_amount`.
    pub amount: Decimal,
}

/// Full computation for one regime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxCalculationDetail {
    pub regime: Regime,

    /// Salary + other sources + digital assets + house property (if positive).
    /// A house-property loss never lowers this figure.
    pub gross_total_income: Decimal,
    /// Signed; negative only under the Old regime.
    pub house_property_income: Decimal,
    pub total_deductions: Decimal,
    pub taxable_slab_income: Decimal,
    pub taxable_special_income: Decimal,

    pub tax_from_slabs: Decimal,
    pub tax_from_special: Decimal,

    /// Section 87A rebate, including any marginal relief.
    pub rebate: Decimal,
    pub tax_after_rebate: Decimal,
    /// Not computed; always zero.
    pub surcharge: Decimal,
    pub cess: Decimal,
    /// Whole rupees.
    pub total_tax_payable: Decimal,
    /// Percentage of gross total income, two decimal places.
    pub effective_tax_rate: Decimal,

    pub slab_breakdown: Vec<SlabTaxItem>,
}

impl TaxCalculationDetail {
    /// Slab tax plus special-rate tax, before the rebate.
    pub fn tax_before_rebate(&self) -> Decimal {
        self.tax_from_slabs + self.tax_from_special
    }

    /// Slab income plus special-rate income.
    pub fn total_taxable_income(&self) -> Decimal {
        self.taxable_slab_income + self.taxable_special_income
    }
}
