//! Integration tests for properties that must hold across the income range.

use itax_core::calculations::RegimeEngine;
use itax_core::calculations::common::round_to_rupee;
use itax_core::{NEW_REGIME, Regime, TaxInput, compare_regimes, run_regime};
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn salaries(
    from: Decimal,
    to: Decimal,
    step: Decimal,
) -> impl Iterator<Item = Decimal> {
    std::iter::successors(Some(from), move |salary| Some(salary + step))
        .take_while(move |salary| *salary <= to)
}

/// Holds for slab income only. With special-rate income the rebate base
/// includes that income, so crossing into marginal relief can lower tax.
#[test]
fn test_tax_never_decreases_with_salary() {
    for regime in Regime::ALL {
        let engine = RegimeEngine::new(regime);
        let mut previous = Decimal::ZERO;

        for salary in salaries(dec!(0), dec!(3000000), dec!(5000)) {
            let payable = engine.calculate(&TaxInput::salaried(salary)).total_tax_payable;
            assert!(
                payable >= previous,
                "{}: tax fell from {previous} to {payable} at salary {salary}",
                engine.regime()
            );
            previous = payable;
        }
    }
}

#[test]
fn test_tax_is_never_negative() {
    let inputs = [
        TaxInput::default(),
        TaxInput {
            home_loan_self_occupied: Some(dec!(500000)),
            ..TaxInput::default()
        },
        TaxInput {
            gross_salary: dec!(300000),
            section_80c: Some(dec!(900000)),
            rental_income: Some(dec!(10000)),
            home_loan_let_out: Some(dec!(800000)),
            ..TaxInput::default()
        },
    ];

    for input in &inputs {
        let result = compare_regimes(input);
        for detail in [&result.old_regime, &result.new_regime] {
            assert!(detail.total_tax_payable >= Decimal::ZERO);
            assert!(detail.tax_after_rebate >= Decimal::ZERO);
            assert!(detail.taxable_slab_income >= Decimal::ZERO);
        }
    }
}

#[test]
fn test_old_regime_rebate_cliff() {
    // 50,000 standard deduction puts taxable income on either side of 5L
    let at_threshold = run_regime(&TaxInput::salaried(dec!(550000)), Regime::Old);
    let above_threshold = run_regime(&TaxInput::salaried(dec!(550001)), Regime::Old);

    assert_eq!(at_threshold.taxable_slab_income, dec!(500000));
    assert_eq!(at_threshold.total_tax_payable, dec!(0));

    assert_eq!(above_threshold.taxable_slab_income, dec!(500001));
    assert_eq!(above_threshold.rebate, dec!(0));
    assert_eq!(above_threshold.total_tax_payable, dec!(13000));
}

#[test]
fn test_new_regime_marginal_relief_bound() {
    let threshold = NEW_REGIME.rebate.threshold;

    for salary in salaries(dec!(1275000), dec!(1400000), dec!(1000)) {
        let detail = run_regime(&TaxInput::salaried(salary), Regime::New);
        let excess = detail.taxable_slab_income - threshold;
        let bound = round_to_rupee(excess * dec!(1.04));

        assert!(
            detail.total_tax_payable <= bound,
            "salary {salary}: payable {} exceeds relief bound {bound}",
            detail.total_tax_payable
        );
    }
}

#[test]
fn test_digital_assets_do_not_touch_slab_income() {
    let salary_only = TaxInput::salaried(dec!(1500000));
    let with_crypto = TaxInput {
        digital_assets_income: Some(dec!(400000)),
        ..salary_only.clone()
    };

    for regime in Regime::ALL {
        let base = run_regime(&salary_only, regime);
        let detail = run_regime(&with_crypto, regime);

        assert_eq!(detail.taxable_slab_income, base.taxable_slab_income);
        assert_eq!(detail.tax_from_slabs, base.tax_from_slabs);
        assert_eq!(detail.slab_breakdown, base.slab_breakdown);
        assert_eq!(detail.tax_from_special, dec!(120000));
        assert_eq!(
            detail.gross_total_income,
            base.gross_total_income + dec!(400000)
        );
    }
}

#[test]
fn test_house_property_loss_only_reduces_old_regime() {
    let input = TaxInput {
        gross_salary: dec!(1000000),
        rental_income: Some(dec!(100000)),
        home_loan_let_out: Some(dec!(300000)),
        ..TaxInput::default()
    };

    let result = compare_regimes(&input);

    assert_eq!(result.old_regime.house_property_income, dec!(-200000));
    assert_eq!(result.new_regime.house_property_income, dec!(0));
    assert_eq!(
        result.new_regime.taxable_slab_income,
        run_regime(&TaxInput::salaried(dec!(1000000)), Regime::New).taxable_slab_income
    );
}

#[test]
fn test_breakdown_sums_to_slab_tax() {
    for regime in Regime::ALL {
        for salary in salaries(dec!(0), dec!(3000000), dec!(125000)) {
            let detail = run_regime(&TaxInput::salaried(salary), regime);
            let sum: Decimal = detail.slab_breakdown.iter().map(|item| item.amount).sum();

            assert_eq!(sum, detail.tax_from_slabs, "{regime} at salary {salary}");
        }
    }
}
