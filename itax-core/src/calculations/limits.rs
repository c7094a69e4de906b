//! Statutory ceilings on individual deductions.
//!
//! The regime engine sums whatever amounts it is given. Callers that accept
//! raw user figures cap them here first, the same way an input form would
//! clamp its fields.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::TaxInput;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatutoryLimits {
    pub section_80c: Decimal,
    /// Self contribution to NPS.
    pub section_80ccd1b: Decimal,
    /// Health insurance, self + senior-citizen parents.
    pub section_80d: Decimal,
    pub home_loan_self_occupied: Decimal,
}

impl Default for StatutoryLimits {
    fn default() -> Self {
        Self {
            section_80c: dec!(150000),
            section_80ccd1b: dec!(50000),
            section_80d: dec!(100000),
            home_loan_self_occupied: dec!(200000),
        }
    }
}

impl StatutoryLimits {
    /// Returns a copy of `input` with each capped field clamped to its limit.
    pub fn apply(
        &self,
        input: &TaxInput,
    ) -> TaxInput {
        TaxInput {
            section_80c: cap("section_80c", input.section_80c, self.section_80c),
            section_80ccd1b: cap(
                "section_80ccd1b",
                input.section_80ccd1b,
                self.section_80ccd1b,
            ),
            section_80d: cap("section_80d", input.section_80d, self.section_80d),
            home_loan_self_occupied: cap(
                "home_loan_self_occupied",
                input.home_loan_self_occupied,
                self.home_loan_self_occupied,
            ),
            ..input.clone()
        }
    }
}

fn cap(
    field: &'static str,
    value: Option<Decimal>,
    limit: Decimal,
) -> Option<Decimal> {
    value.map(|claimed| {
        if claimed > limit {
            debug!(field, claimed = %claimed, limit = %limit, "deduction capped at statutory limit");
            limit
        } else {
            claimed
        }
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn caps_fields_above_their_limit() {
        let input = TaxInput {
            gross_salary: dec!(2000000),
            section_80c: Some(dec!(250000)),
            section_80ccd1b: Some(dec!(75000)),
            section_80d: Some(dec!(125000)),
            home_loan_self_occupied: Some(dec!(350000)),
            ..TaxInput::default()
        };

        let capped = StatutoryLimits::default().apply(&input);

        assert_eq!(capped.section_80c, Some(dec!(150000)));
        assert_eq!(capped.section_80ccd1b, Some(dec!(50000)));
        assert_eq!(capped.section_80d, Some(dec!(100000)));
        assert_eq!(capped.home_loan_self_occupied, Some(dec!(200000)));
        assert_eq!(capped.gross_salary, dec!(2000000));
    }

    #[test]
    fn leaves_amounts_within_limits_alone() {
        let input = TaxInput {
            section_80c: Some(dec!(100000)),
            section_80g: Some(dec!(900000)),
            ..TaxInput::default()
        };

        let capped = StatutoryLimits::default().apply(&input);

        assert_eq!(capped, input);
    }

    #[test]
    fn absent_fields_stay_absent() {
        let capped = StatutoryLimits::default().apply(&TaxInput::default());

        assert_eq!(capped.section_80c, None);
    }
}
