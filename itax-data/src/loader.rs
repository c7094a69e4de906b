//! CSV loader for batches of taxpayer scenarios.
//!
//! ## CSV Format
//!
//! Headers are matched by name, so column order does not matter. Header
//! names are case-sensitive.
//!
//! | Column                    | Required | Notes |
//! |---------------------------|----------|-------|
//! | `name`                    | yes      | Label shown in reports |
//! | `gross_salary`            | yes      | |
//! | `interest_income`         | no       | Leave cell empty for `None` |
//! | `rental_income`           | no       | |
//! | `digital_assets_income`   | no       | |
//! | `other_income`            | no       | |
//! | `home_loan_self_occupied` | no       | |
//! | `home_loan_let_out`       | no       | |
//! | `hra_exemption`           | no       | |
//! | `lta_exemption`           | no       | |
//! | `nps_employer_80ccd2`     | no       | |
//! | `section_80c`             | no       | |
//! | `section_80d`             | no       | |
//! | `section_80ccd1b`         | no       | |
//! | `section_80g`             | no       | |
//! | `section_80e`             | no       | |
//! | `other_deductions`        | no       | |
//!
//! Amounts may use Indian or western digit grouping when the cell is
//! quoted, e.g. `"12,00,000"`.
//!
//! ### Example
//!
//! ```csv
//! name,gross_salary,section_80c,home_loan_self_occupied
//! fresher,600000,,
//! "home owner","16,00,000",150000,200000
//! ```

use std::io::Read;
use std::path::Path;

use itax_core::TaxInput;
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while loading scenarios.
#[derive(Debug, Error)]
pub enum ScenarioLoadError {
    #[error("failed to read scenario file: {0}")]
    Io(#[from] std::io::Error),

    /// Bad structure, missing required column, or wrong column count.
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    /// `row` is 1-based; the header is row 0.
    #[error("invalid amount '{value}' in column '{column}' on row {row}")]
    InvalidAmount {
        row: usize,
        column: &'static str,
        value: String,
    },

    #[error("negative amount {value} in column '{column}' on row {row}")]
    NegativeAmount {
        row: usize,
        column: &'static str,
        value: Decimal,
    },
}

/// A named taxpayer input, one per CSV row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub name: String,
    pub input: TaxInput,
}

// Amounts are read as text so that grouped figures like "12,00,000" parse.
#[derive(Debug, Deserialize)]
struct ScenarioRow {
    name: String,
    gross_salary: String,
    interest_income: Option<String>,
    rental_income: Option<String>,
    digital_assets_income: Option<String>,
    other_income: Option<String>,
    home_loan_self_occupied: Option<String>,
    home_loan_let_out: Option<String>,
    hra_exemption: Option<String>,
    lta_exemption: Option<String>,
    nps_employer_80ccd2: Option<String>,
    section_80c: Option<String>,
    section_80d: Option<String>,
    section_80ccd1b: Option<String>,
    section_80g: Option<String>,
    section_80e: Option<String>,
    other_deductions: Option<String>,
}

impl ScenarioRow {
    fn into_scenario(
        self,
        row: usize,
    ) -> Result<Scenario, ScenarioLoadError> {
        let optional = |column: &'static str, cell: Option<String>| {
            cell.filter(|raw| !raw.trim().is_empty())
                .map(|raw| parse_amount(row, column, &raw))
                .transpose()
        };

        let input = TaxInput {
            gross_salary: parse_amount(row, "gross_salary", &self.gross_salary)?,
            interest_income: optional("interest_income", self.interest_income)?,
            rental_income: optional("rental_income", self.rental_income)?,
            digital_assets_income: optional("digital_assets_income", self.digital_assets_income)?,
            other_income: optional("other_income", self.other_income)?,
            home_loan_self_occupied: optional(
                "home_loan_self_occupied",
                self.home_loan_self_occupied,
            )?,
            home_loan_let_out: optional("home_loan_let_out", self.home_loan_let_out)?,
            hra_exemption: optional("hra_exemption", self.hra_exemption)?,
            lta_exemption: optional("lta_exemption", self.lta_exemption)?,
            nps_employer_80ccd2: optional("nps_employer_80ccd2", self.nps_employer_80ccd2)?,
            section_80c: optional("section_80c", self.section_80c)?,
            section_80d: optional("section_80d", self.section_80d)?,
            section_80ccd1b: optional("section_80ccd1b", self.section_80ccd1b)?,
            section_80g: optional("section_80g", self.section_80g)?,
            section_80e: optional("section_80e", self.section_80e)?,
            other_deductions: optional("other_deductions", self.other_deductions)?,
        };

        Ok(Scenario {
            name: self.name,
            input,
        })
    }
}

fn parse_amount(
    row: usize,
    column: &'static str,
    raw: &str,
) -> Result<Decimal, ScenarioLoadError> {
    let normalized: String = raw.trim().chars().filter(|c| *c != ',').collect();
    let value = normalized
        .parse::<Decimal>()
        .map_err(|_| ScenarioLoadError::InvalidAmount {
            row,
            column,
            value: raw.to_string(),
        })?;

    if value.is_sign_negative() && !value.is_zero() {
        return Err(ScenarioLoadError::NegativeAmount { row, column, value });
    }
    Ok(value)
}

/// Reads [`Scenario`]s from CSV.
pub struct ScenarioLoader;

impl ScenarioLoader {
    /// Parses scenarios from any reader. Rows are returned in file order.
    ///
    /// # Errors
    ///
    /// Fails on the first row that is structurally invalid or holds an
    /// unparseable or negative amount.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<Scenario>, ScenarioLoadError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .flexible(false)
            .from_reader(reader);

        let scenarios = csv_reader
            .deserialize::<ScenarioRow>()
            .enumerate()
            .map(|(idx, result)| result?.into_scenario(idx + 1))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(count = scenarios.len(), "scenarios parsed");
        Ok(scenarios)
    }

    pub fn load_from_str(input: &str) -> Result<Vec<Scenario>, ScenarioLoadError> {
        Self::parse(input.as_bytes())
    }

    pub fn load_from_file(path: &Path) -> Result<Vec<Scenario>, ScenarioLoadError> {
        let file = std::fs::File::open(path)?;
        Self::parse(file)
    }
}
