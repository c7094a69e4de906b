//! Total deductions from gross income under a regime.
//!
//! Both regimes allow the standard deduction and the employer's NPS
//! contribution under 80CCD(2). Only the Old regime adds HRA and LTA
//! exemptions and the Chapter VI-A deductions. Statutory ceilings are not
//! applied here.

use rust_decimal::Decimal;

use crate::models::{Regime, ResolvedInput};

pub fn resolve_deductions(
    input: &ResolvedInput,
    regime: Regime,
) -> Decimal {
    let policy = regime.policy();
    let mut total = policy.standard_deduction + input.nps_employer_80ccd2;

    if policy.allows_chapter_vi_a {
        total += input.hra_exemption + input.lta_exemption;
        total += input.section_80c
            + input.section_80d
            + input.section_80ccd1b
            + input.section_80g
            + input.section_80e
            + input.other_deductions;
    }

    total
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn loaded_input() -> ResolvedInput {
        ResolvedInput {
            gross_salary: dec!(1500000),
            hra_exemption: dec!(120000),
            lta_exemption: dec!(20000),
            nps_employer_80ccd2: dec!(60000),
            section_80c: dec!(150000),
            section_80d: dec!(25000),
            section_80ccd1b: dec!(50000),
            section_80g: dec!(10000),
            section_80e: dec!(30000),
            other_deductions: dec!(2500),
            ..ResolvedInput::default()
        }
    }

    #[test]
    fn old_regime_with_nothing_claimed_is_standard_deduction() {
        let result = resolve_deductions(&ResolvedInput::default(), Regime::Old);

        assert_eq!(result, dec!(50000));
    }

    #[test]
    fn new_regime_with_nothing_claimed_is_standard_deduction() {
        let result = resolve_deductions(&ResolvedInput::default(), Regime::New);

        assert_eq!(result, dec!(75000));
    }

    #[test]
    fn old_regime_sums_everything() {
        let result = resolve_deductions(&loaded_input(), Regime::Old);

        // 50000 + 60000 + 140000 + 267500
        assert_eq!(result, dec!(517500));
    }

    #[test]
    fn new_regime_only_allows_employer_nps() {
        let result = resolve_deductions(&loaded_input(), Regime::New);

        assert_eq!(result, dec!(135000));
    }

    #[test]
    fn amounts_are_not_capped() {
        let input = ResolvedInput {
            section_80c: dec!(400000),
            ..ResolvedInput::default()
        };

        let result = resolve_deductions(&input, Regime::Old);

        assert_eq!(result, dec!(450000));
    }
}
