//! House rent allowance exemption, section 10(13A).
//!
//! The exempt portion is the least of:
//!
//! 1. HRA actually received
//! 2. Rent paid minus 10% of salary (never below zero)
//! 3. 50% of salary in a metro city, 40% elsewhere
//!
//! Salary here means basic plus dearness allowance.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calculations::common::max;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HraError {
    #[error("{field} must not be negative, got {value}")]
    NegativeAmount { field: &'static str, value: Decimal },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HraInput {
    pub basic_salary: Decimal,
    pub dearness_allowance: Decimal,
    pub hra_received: Decimal,
    pub rent_paid: Decimal,
    pub is_metro: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HraBreakdown {
    pub actual_hra: Decimal,
    pub rent_minus_ten_percent: Decimal,
    pub salary_cap: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HraResult {
    pub exempt_amount: Decimal,
    pub taxable_amount: Decimal,
    pub breakdown: HraBreakdown,
}

/// # Errors
///
/// Returns [`HraError::NegativeAmount`] for the first negative amount.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use itax_core::calculations::{HraInput, calculate_hra_exemption};
///
/// let result = calculate_hra_exemption(&HraInput {
///     basic_salary: dec!(600000),
///     hra_received: dec!(300000),
///     rent_paid: dec!(240000),
///     is_metro: true,
///     ..HraInput::default()
/// })
/// .unwrap();
///
/// assert_eq!(result.exempt_amount, dec!(180000));
/// assert_eq!(result.taxable_amount, dec!(120000));
/// ```
pub fn calculate_hra_exemption(input: &HraInput) -> Result<HraResult, HraError> {
    let amounts = [
        ("basic_salary", input.basic_salary),
        ("dearness_allowance", input.dearness_allowance),
        ("hra_received", input.hra_received),
        ("rent_paid", input.rent_paid),
    ];
    if let Some((field, value)) = amounts.into_iter().find(|(_, value)| *value < Decimal::ZERO) {
        return Err(HraError::NegativeAmount { field, value });
    }

    let salary = input.basic_salary + input.dearness_allowance;

    let actual_hra = input.hra_received;
    let rent_minus_ten_percent = max(input.rent_paid - salary * dec!(0.10), Decimal::ZERO);
    let salary_cap = if input.is_metro {
        salary * dec!(0.50)
    } else {
        salary * dec!(0.40)
    };

    let exempt_amount = actual_hra.min(rent_minus_ten_percent).min(salary_cap);

    Ok(HraResult {
        exempt_amount,
        taxable_amount: max(input.hra_received - exempt_amount, Decimal::ZERO),
        breakdown: HraBreakdown {
            actual_hra,
            rent_minus_ten_percent,
            salary_cap,
        },
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn rent_rule_binds() {
        let input = HraInput {
            basic_salary: dec!(600000),
            hra_received: dec!(300000),
            rent_paid: dec!(240000),
            is_metro: true,
            ..HraInput::default()
        };

        let result = calculate_hra_exemption(&input).unwrap();

        assert_eq!(
            result.breakdown,
            HraBreakdown {
                actual_hra: dec!(300000),
                rent_minus_ten_percent: dec!(180000),
                salary_cap: dec!(300000),
            }
        );
        assert_eq!(result.exempt_amount, dec!(180000));
        assert_eq!(result.taxable_amount, dec!(120000));
    }

    #[test]
    fn actual_hra_binds() {
        let input = HraInput {
            basic_salary: dec!(600000),
            hra_received: dec!(100000),
            rent_paid: dec!(500000),
            is_metro: true,
            ..HraInput::default()
        };

        let result = calculate_hra_exemption(&input).unwrap();

        assert_eq!(result.exempt_amount, dec!(100000));
        assert_eq!(result.taxable_amount, dec!(0));
    }

    #[test]
    fn non_metro_salary_cap_binds() {
        let input = HraInput {
            basic_salary: dec!(400000),
            dearness_allowance: dec!(100000),
            hra_received: dec!(250000),
            rent_paid: dec!(600000),
            is_metro: false,
        };

        let result = calculate_hra_exemption(&input).unwrap();

        assert_eq!(result.breakdown.salary_cap, dec!(200000));
        assert_eq!(result.exempt_amount, dec!(200000));
        assert_eq!(result.taxable_amount, dec!(50000));
    }

    #[test]
    fn low_rent_gives_no_exemption() {
        let input = HraInput {
            basic_salary: dec!(600000),
            hra_received: dec!(240000),
            rent_paid: dec!(50000),
            is_metro: true,
            ..HraInput::default()
        };

        let result = calculate_hra_exemption(&input).unwrap();

        assert_eq!(result.breakdown.rent_minus_ten_percent, dec!(0));
        assert_eq!(result.exempt_amount, dec!(0));
        assert_eq!(result.taxable_amount, dec!(240000));
    }

    #[test]
    fn rejects_negative_rent() {
        let input = HraInput {
            rent_paid: dec!(-100),
            ..HraInput::default()
        };

        assert_eq!(
            calculate_hra_exemption(&input),
            Err(HraError::NegativeAmount {
                field: "rent_paid",
                value: dec!(-100),
            })
        );
    }
}
