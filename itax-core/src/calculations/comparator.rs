//! Old vs New regime comparison.
//!
//! Both regimes are computed from the same input. The regime with strictly
//! lower payable tax wins; a tie goes to the New regime.

use rust_decimal::Decimal;
use tracing::info;

use crate::calculations::common::format_inr;
use crate::calculations::engine::RegimeEngine;
use crate::models::{
    Recommendation, Regime, TaxCalculationDetail, TaxComparisonResult, TaxInput, TaxInputError,
};

/// Computes both regimes and recommends the cheaper one.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use itax_core::{Regime, TaxInput, compare_regimes};
///
/// let result = compare_regimes(&TaxInput::salaried(dec!(600000)));
///
/// assert_eq!(result.recommendation.better_regime, Regime::New);
/// assert_eq!(result.recommendation.savings_amount, dec!(23400));
/// ```
pub fn compare_regimes(input: &TaxInput) -> TaxComparisonResult {
    let old_regime = RegimeEngine::new(Regime::Old).calculate(input);
    let new_regime = RegimeEngine::new(Regime::New).calculate(input);

    let recommendation = recommend(&old_regime, &new_regime);
    info!(
        better_regime = %recommendation.better_regime,
        savings = %recommendation.savings_amount,
        "regimes compared"
    );

    TaxComparisonResult {
        old_regime,
        new_regime,
        recommendation,
    }
}

/// Like [`compare_regimes`], but rejects negative amounts first.
///
/// # Errors
///
/// Returns [`TaxInputError::NegativeAmount`] for the first negative field.
pub fn try_compare_regimes(input: &TaxInput) -> Result<TaxComparisonResult, TaxInputError> {
    input.validate()?;
    Ok(compare_regimes(input))
}

fn recommend(
    old_regime: &TaxCalculationDetail,
    new_regime: &TaxCalculationDetail,
) -> Recommendation {
    let old_total = old_regime.total_tax_payable;
    let new_total = new_regime.total_tax_payable;

    let better_regime = if old_total < new_total {
        Regime::Old
    } else {
        Regime::New
    };
    let savings_amount = (old_total - new_total).abs();

    Recommendation {
        better_regime,
        savings_amount,
        reason: reason(better_regime, savings_amount),
    }
}

fn reason(
    better_regime: Regime,
    savings_amount: Decimal,
) -> String {
    if savings_amount.is_zero() {
        return "Both regimes result in the same tax.".to_string();
    }

    let savings = format_inr(savings_amount);
    match better_regime {
        Regime::New => format!(
            "New Regime saves ₹{savings} due to lower slab rates and Section 87A rebate up to ₹12L."
        ),
        Regime::Old => format!(
            "Old Regime saves ₹{savings} due to House Property set-off and high deductions."
        ),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn new_regime_wins_for_plain_salary() {
        let result = compare_regimes(&TaxInput::salaried(dec!(600000)));

        assert_eq!(result.old_regime.total_tax_payable, dec!(23400));
        assert_eq!(result.new_regime.total_tax_payable, dec!(0));
        assert_eq!(result.recommendation.better_regime, Regime::New);
        assert_eq!(result.recommendation.savings_amount, dec!(23400));
        assert_eq!(
            result.recommendation.reason,
            "New Regime saves ₹23,400 due to lower slab rates and Section 87A rebate up to ₹12L."
        );
    }

    #[test]
    fn equal_tax_reports_same_reason() {
        let input = TaxInput {
            gross_salary: dec!(1000000),
            hra_exemption: Some(dec!(200000)),
            section_80c: Some(dec!(150000)),
            section_80d: Some(dec!(25000)),
            section_80ccd1b: Some(dec!(50000)),
            home_loan_self_occupied: Some(dec!(200000)),
            ..TaxInput::default()
        };

        let result = compare_regimes(&input);

        // Old: 10L - 2L HP - 4.75L deductions = 3.25L -> fully rebated
        assert_eq!(result.old_regime.taxable_slab_income, dec!(325000));
        assert_eq!(result.old_regime.total_tax_payable, dec!(0));
        // New: 9.25L taxable -> also fully rebated
        assert_eq!(result.new_regime.total_tax_payable, dec!(0));
        assert_eq!(result.recommendation.better_regime, Regime::New);
        assert_eq!(
            result.recommendation.reason,
            "Both regimes result in the same tax."
        );
    }

    #[test]
    fn old_regime_wins_for_high_earner_with_deductions() {
        let input = TaxInput {
            gross_salary: dec!(1600000),
            hra_exemption: Some(dec!(300000)),
            section_80c: Some(dec!(150000)),
            section_80d: Some(dec!(50000)),
            section_80ccd1b: Some(dec!(50000)),
            home_loan_self_occupied: Some(dec!(200000)),
            ..TaxInput::default()
        };

        let result = compare_regimes(&input);

        // Old: 16L - 2L - 6L = 8L -> 12500 + 60000 = 72500 * 1.04 = 75400
        assert_eq!(result.old_regime.total_tax_payable, dec!(75400));
        // New: 15.25L -> 60000 + 48750 = 108750 * 1.04 = 113100
        assert_eq!(result.new_regime.total_tax_payable, dec!(113100));
        assert_eq!(result.recommendation.better_regime, Regime::Old);
        assert_eq!(result.recommendation.savings_amount, dec!(37700));
        assert_eq!(
            result.recommendation.reason,
            "Old Regime saves ₹37,700 due to House Property set-off and high deductions."
        );
    }

    #[test]
    fn tie_goes_to_new_regime() {
        let result = compare_regimes(&TaxInput::default());

        assert_eq!(result.recommendation.better_regime, Regime::New);
        assert_eq!(result.recommendation.savings_amount, dec!(0));
    }

    #[test]
    fn payable_reads_the_better_regime() {
        let result = compare_regimes(&TaxInput::salaried(dec!(2000000)));

        assert_eq!(
            result.payable(),
            result.detail(result.recommendation.better_regime).total_tax_payable
        );
    }

    #[test]
    fn try_compare_rejects_negative_amounts() {
        let input = TaxInput {
            gross_salary: dec!(-1),
            ..TaxInput::default()
        };

        assert_eq!(
            try_compare_regimes(&input),
            Err(TaxInputError::NegativeAmount {
                field: "gross_salary",
                value: dec!(-1),
            })
        );
    }

    #[test]
    fn try_compare_accepts_valid_input() {
        let input = TaxInput::salaried(dec!(900000));

        assert_eq!(try_compare_regimes(&input), Ok(compare_regimes(&input)));
    }
}
