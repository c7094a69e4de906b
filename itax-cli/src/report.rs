//! Plain-text rendering of calculation results.

use std::io::{self, Write};

use itax_core::calculations::common::format_inr;
use itax_core::calculations::{HraResult, PresumptiveResult, SalaryResult};
use itax_core::{Regime, TaxCalculationDetail, TaxComparisonResult};
use rust_decimal::Decimal;

const LABEL_WIDTH: usize = 26;
const VALUE_WIDTH: usize = 16;

fn rupees(value: Decimal) -> String {
    format!("₹{}", format_inr(value))
}

fn percent(rate: Decimal) -> String {
    format!("{}%", (rate * Decimal::ONE_HUNDRED).normalize())
}

fn line(
    out: &mut impl Write,
    label: &str,
    value: Decimal,
) -> io::Result<()> {
    writeln!(out, "{label:<LABEL_WIDTH$}{:>VALUE_WIDTH$}", rupees(value))
}

fn pair(
    out: &mut impl Write,
    label: &str,
    old: Decimal,
    new: Decimal,
) -> io::Result<()> {
    writeln!(
        out,
        "{label:<LABEL_WIDTH$}{:>VALUE_WIDTH$}{:>VALUE_WIDTH$}",
        rupees(old),
        rupees(new)
    )
}

pub fn write_comparison(
    out: &mut impl Write,
    result: &TaxComparisonResult,
) -> io::Result<()> {
    let old = &result.old_regime;
    let new = &result.new_regime;

    writeln!(
        out,
        "{:<LABEL_WIDTH$}{:>VALUE_WIDTH$}{:>VALUE_WIDTH$}",
        "",
        Regime::Old.to_string(),
        Regime::New.to_string()
    )?;
    pair(out, "Gross total income", old.gross_total_income, new.gross_total_income)?;
    pair(out, "House property", old.house_property_income, new.house_property_income)?;
    pair(out, "Deductions", old.total_deductions, new.total_deductions)?;
    pair(out, "Taxable (slab)", old.taxable_slab_income, new.taxable_slab_income)?;
    pair(out, "Taxable (special rate)", old.taxable_special_income, new.taxable_special_income)?;
    pair(out, "Tax on slabs", old.tax_from_slabs, new.tax_from_slabs)?;
    pair(out, "Tax on special income", old.tax_from_special, new.tax_from_special)?;
    pair(out, "Rebate u/s 87A", old.rebate, new.rebate)?;
    pair(out, "Cess", old.cess, new.cess)?;
    pair(out, "Total tax payable", old.total_tax_payable, new.total_tax_payable)?;
    writeln!(
        out,
        "{:<LABEL_WIDTH$}{:>VALUE_WIDTH$}{:>VALUE_WIDTH$}",
        "Effective rate",
        format!("{}%", old.effective_tax_rate),
        format!("{}%", new.effective_tax_rate)
    )?;
    writeln!(out)?;
    writeln!(
        out,
        "Recommended: {}. {}",
        result.recommendation.better_regime, result.recommendation.reason
    )
}

pub fn write_detail(
    out: &mut impl Write,
    detail: &TaxCalculationDetail,
) -> io::Result<()> {
    writeln!(out, "{}", detail.regime)?;
    line(out, "Gross total income", detail.gross_total_income)?;
    line(out, "House property", detail.house_property_income)?;
    line(out, "Deductions", detail.total_deductions)?;
    line(out, "Taxable (slab)", detail.taxable_slab_income)?;
    line(out, "Taxable (special rate)", detail.taxable_special_income)?;
    line(out, "Total taxable income", detail.total_taxable_income())?;

    writeln!(out)?;
    writeln!(out, "Slab breakdown")?;
    for item in &detail.slab_breakdown {
        writeln!(
            out,
            "  {:<14}{:>6}{:>VALUE_WIDTH$}{:>VALUE_WIDTH$}",
            item.range_label,
            percent(item.rate),
            rupees(item.taxable_amount),
            rupees(item.amount)
        )?;
    }
    writeln!(out)?;

    line(out, "Tax on slabs", detail.tax_from_slabs)?;
    line(out, "Tax on special income", detail.tax_from_special)?;
    line(out, "Tax before rebate", detail.tax_before_rebate())?;
    line(out, "Rebate u/s 87A", detail.rebate)?;
    line(out, "Tax after rebate", detail.tax_after_rebate)?;
    line(out, "Surcharge", detail.surcharge)?;
    line(out, "Cess", detail.cess)?;
    line(out, "Total tax payable", detail.total_tax_payable)?;
    writeln!(
        out,
        "{:<LABEL_WIDTH$}{:>VALUE_WIDTH$}",
        "Effective rate",
        format!("{}%", detail.effective_tax_rate)
    )
}

pub fn write_batch(
    out: &mut impl Write,
    results: &[(String, TaxComparisonResult)],
) -> io::Result<()> {
    writeln!(
        out,
        "{:<24}{:>VALUE_WIDTH$}{:>VALUE_WIDTH$}{:>8}{:>VALUE_WIDTH$}",
        "Scenario", "Old", "New", "Better", "Savings"
    )?;
    for (name, result) in results {
        writeln!(
            out,
            "{:<24}{:>VALUE_WIDTH$}{:>VALUE_WIDTH$}{:>8}{:>VALUE_WIDTH$}",
            name,
            rupees(result.old_regime.total_tax_payable),
            rupees(result.new_regime.total_tax_payable),
            result.recommendation.better_regime.as_str(),
            rupees(result.recommendation.savings_amount)
        )?;
    }
    Ok(())
}

pub fn write_presumptive(
    out: &mut impl Write,
    result: &PresumptiveResult,
) -> io::Result<()> {
    line(out, "Presumptive income (50%)", result.presumptive_income)?;
    line(out, "Total taxable income", result.total_taxable_income)?;
    line(out, "Saved vs full declaration", result.tax_saved_if_declared_fully)?;
    writeln!(out)?;
    write_comparison(out, &result.tax_comparison)
}

pub fn write_salary(
    out: &mut impl Write,
    result: &SalaryResult,
) -> io::Result<()> {
    let annual = &result.annual;
    let monthly = &result.monthly;

    writeln!(out, "Annual")?;
    line(out, "CTC", annual.ctc)?;
    line(out, "Basic", annual.basic)?;
    line(out, "HRA", annual.hra)?;
    line(out, "Special allowance", annual.special)?;
    line(out, "Food coupons", annual.food_coupon)?;
    line(out, "Employer NPS", annual.nps_employer)?;
    line(out, "Employer PF", annual.employer_pf)?;
    line(out, "Superannuation", annual.super_annuation)?;
    line(out, "Taxable gross salary", annual.gross_taxable_salary)?;
    line(out, "Income tax", annual.total_tax)?;

    writeln!(out)?;
    writeln!(out, "Monthly")?;
    line(out, "Gross cash", monthly.gross_cash)?;
    line(out, "Employee PF", monthly.pf_employee)?;
    line(out, "VPF", monthly.vpf)?;
    line(out, "Professional tax", monthly.professional_tax)?;
    line(out, "Income tax (TDS)", monthly.tax)?;
    line(out, "Total deductions", monthly.total_deductions)?;
    line(out, "Net in-hand", monthly.net_in_hand)
}

pub fn write_hra(
    out: &mut impl Write,
    result: &HraResult,
) -> io::Result<()> {
    line(out, "Actual HRA received", result.breakdown.actual_hra)?;
    line(out, "Rent - 10% of salary", result.breakdown.rent_minus_ten_percent)?;
    line(out, "Salary cap (50%/40%)", result.breakdown.salary_cap)?;
    writeln!(out)?;
    line(out, "Exempt", result.exempt_amount)?;
    line(out, "Taxable", result.taxable_amount)
}
