use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Errors raised when validating a [`TaxInput`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaxInputError {
    /// An income, exemption or deduction amount was below zero.
    #[error("{field} must not be negative, got {value}")]
    NegativeAmount { field: &'static str, value: Decimal },
}

/// A taxpayer's income, exemptions and deductions for one financial year.
///
/// Only `gross_salary` is required; every other head is optional and treated
/// as zero when absent. Statutory ceilings (80C, 80CCD(1B), ...) are not
/// applied by the engine; see [`crate::calculations::StatutoryLimits`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxInput {
    // Income
    pub gross_salary: Decimal,
    /// Savings and deposit interest.
    pub interest_income: Option<Decimal>,
    /// Gross rent received from a let-out property.
    pub rental_income: Option<Decimal>,
    /// Crypto and other virtual digital assets, taxed at a flat rate.
    pub digital_assets_income: Option<Decimal>,
    /// Freelance, dividends and other residual income.
    pub other_income: Option<Decimal>,

    // House property loan interest
    pub home_loan_self_occupied: Option<Decimal>,
    pub home_loan_let_out: Option<Decimal>,

    // Exemptions (Old regime)
    pub hra_exemption: Option<Decimal>,
    pub lta_exemption: Option<Decimal>,

    // Employer NPS contribution, allowed under both regimes
    pub nps_employer_80ccd2: Option<Decimal>,

    // Chapter VI-A deductions (Old regime)
    pub section_80c: Option<Decimal>,
    pub section_80d: Option<Decimal>,
    pub section_80ccd1b: Option<Decimal>,
    pub section_80g: Option<Decimal>,
    pub section_80e: Option<Decimal>,
    pub other_deductions: Option<Decimal>,
}

/// [`TaxInput`] with every absent amount replaced by zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolvedInput {
    pub gross_salary: Decimal,
    pub interest_income: Decimal,
    pub rental_income: Decimal,
    pub digital_assets_income: Decimal,
    pub other_income: Decimal,
    pub home_loan_self_occupied: Decimal,
    pub home_loan_let_out: Decimal,
    pub hra_exemption: Decimal,
    pub lta_exemption: Decimal,
    pub nps_employer_80ccd2: Decimal,
    pub section_80c: Decimal,
    pub section_80d: Decimal,
    pub section_80ccd1b: Decimal,
    pub section_80g: Decimal,
    pub section_80e: Decimal,
    pub other_deductions: Decimal,
}

impl TaxInput {
    /// Shorthand for a salaried taxpayer with no other heads.
    pub fn salaried(gross_salary: Decimal) -> Self {
        Self {
            gross_salary,
            ..Self::default()
        }
    }

    /// Every amount paired with its field name, in declaration order.
    pub fn amounts(&self) -> [(&'static str, Decimal); 16] {
        let or_zero = |v: Option<Decimal>| v.unwrap_or(Decimal::ZERO);
        [
            ("gross_salary", self.gross_salary),
            ("interest_income", or_zero(self.interest_income)),
            ("rental_income", or_zero(self.rental_income)),
            ("digital_assets_income", or_zero(self.digital_assets_income)),
            ("other_income", or_zero(self.other_income)),
            ("home_loan_self_occupied", or_zero(self.home_loan_self_occupied)),
            ("home_loan_let_out", or_zero(self.home_loan_let_out)),
            ("hra_exemption", or_zero(self.hra_exemption)),
            ("lta_exemption", or_zero(self.lta_exemption)),
            ("nps_employer_80ccd2", or_zero(self.nps_employer_80ccd2)),
            ("section_80c", or_zero(self.section_80c)),
            ("section_80d", or_zero(self.section_80d)),
            ("section_80ccd1b", or_zero(self.section_80ccd1b)),
            ("section_80g", or_zero(self.section_80g)),
            ("section_80e", or_zero(self.section_80e)),
            ("other_deductions", or_zero(self.other_deductions)),
        ]
    }

    /// Rejects the first negative amount found.
    ///
    /// # Errors
    ///
    /// Returns [`TaxInputError::NegativeAmount`] naming the offending field.
    pub fn validate(&self) -> Result<(), TaxInputError> {
        match self
            .amounts()
            .into_iter()
            .find(|(_, value)| *value < Decimal::ZERO)
        {
            Some((field, value)) => Err(TaxInputError::NegativeAmount { field, value }),
            None => Ok(()),
        }
    }

    /// Replaces absent amounts with zero.
    ///
    /// Negative amounts are passed through unchanged; callers that need them
    /// rejected should call [`TaxInput::validate`] first.
    pub fn resolve(&self) -> ResolvedInput {
        for (field, value) in self.amounts() {
            if value < Decimal::ZERO {
                warn!(field, value = %value, "negative amount passed to tax engine");
            }
        }

        let or_zero = |v: Option<Decimal>| v.unwrap_or(Decimal::ZERO);
        ResolvedInput {
            gross_salary: self.gross_salary,
            interest_income: or_zero(self.interest_income),
            rental_income: or_zero(self.rental_income),
            digital_assets_income: or_zero(self.digital_assets_income),
            other_income: or_zero(self.other_income),
            home_loan_self_occupied: or_zero(self.home_loan_self_occupied),
            home_loan_let_out: or_zero(self.home_loan_let_out),
            hra_exemption: or_zero(self.hra_exemption),
            lta_exemption: or_zero(self.lta_exemption),
            nps_employer_80ccd2: or_zero(self.nps_employer_80ccd2),
            section_80c: or_zero(self.section_80c),
            section_80d: or_zero(self.section_80d),
            section_80ccd1b: or_zero(self.section_80ccd1b),
            section_80g: or_zero(self.section_80g),
            section_80e: or_zero(self.section_80e),
            other_deductions: or_zero(self.other_deductions),
        }
    }
}
