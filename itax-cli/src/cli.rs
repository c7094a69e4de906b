use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use itax_core::calculations::{HraInput, PresumptiveInput, SalaryInput, StatutoryLimits};
use itax_core::{Regime, TaxInput};
use rust_decimal::Decimal;

use crate::utils::{parse_amount, parse_regime};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Indian income-tax calculator for FY 2025-26.
///
/// Computes tax under the Old and New regimes and recommends the cheaper
/// one. Amounts accept digit grouping, e.g. `12,00,000`.
#[derive(Debug, Parser)]
#[command(name = "itax", version, about, long_about = None)]
pub struct Cli {
    /// Raise log verbosity (-v debug, -vv trace). `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compare both regimes and recommend the cheaper one.
    Compare(CompareArgs),
    /// Show the full computation under one regime.
    Regime(RegimeArgs),
    /// Compare every scenario in a CSV file.
    Batch(BatchArgs),
    /// Presumptive taxation for professionals (section 44ADA).
    Freelance(FreelanceArgs),
    /// Split a CTC into salary components and monthly in-hand pay.
    Salary(SalaryArgs),
    /// Exempt portion of house rent allowance.
    Hra(HraArgs),
}

/// Taxpayer amounts, from flags and/or a TOML file.
#[derive(Debug, Args)]
pub struct IncomeArgs {
    /// TOML file with the taxpayer's amounts; flags override its values.
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Gross salary after exempt allowances.
    #[arg(long, value_parser = parse_amount, required_unless_present = "input")]
    pub salary: Option<Decimal>,

    /// Savings and deposit interest.
    #[arg(long, value_parser = parse_amount)]
    pub interest: Option<Decimal>,

    /// Gross rent received from a let-out property.
    #[arg(long, value_parser = parse_amount)]
    pub rent: Option<Decimal>,

    /// Income from crypto and other virtual digital assets.
    #[arg(long, value_parser = parse_amount)]
    pub crypto: Option<Decimal>,

    #[arg(long, value_parser = parse_amount)]
    pub other_income: Option<Decimal>,

    /// Home loan interest on a self-occupied property.
    #[arg(long, value_parser = parse_amount)]
    pub home_loan_self_occupied: Option<Decimal>,

    /// Home loan interest on a let-out property.
    #[arg(long, value_parser = parse_amount)]
    pub home_loan_let_out: Option<Decimal>,

    #[arg(long, value_parser = parse_amount)]
    pub hra_exemption: Option<Decimal>,

    #[arg(long, value_parser = parse_amount)]
    pub lta_exemption: Option<Decimal>,

    /// Employer contribution to NPS, section 80CCD(2).
    #[arg(long, value_parser = parse_amount)]
    pub nps_employer: Option<Decimal>,

    #[arg(long, value_parser = parse_amount)]
    pub section_80c: Option<Decimal>,

    #[arg(long, value_parser = parse_amount)]
    pub section_80d: Option<Decimal>,

    #[arg(long, value_parser = parse_amount)]
    pub section_80ccd1b: Option<Decimal>,

    #[arg(long, value_parser = parse_amount)]
    pub section_80g: Option<Decimal>,

    #[arg(long, value_parser = parse_amount)]
    pub section_80e: Option<Decimal>,

    #[arg(long, value_parser = parse_amount)]
    pub other_deductions: Option<Decimal>,

    /// Clamp 80C, 80CCD(1B), 80D and self-occupied interest to their statutory limits.
    #[arg(long)]
    pub cap_deductions: bool,
}

impl IncomeArgs {
    /// Builds the engine input: file values first, then flag overrides,
    /// then statutory caps when requested.
    pub fn tax_input(&self) -> Result<TaxInput> {
        let mut input = match &self.input {
            Some(path) => load_input_file(path)?,
            None => TaxInput::default(),
        };

        if let Some(salary) = self.salary {
            input.gross_salary = salary;
        }
        let overrides = [
            (&mut input.interest_income, self.interest),
            (&mut input.rental_income, self.rent),
            (&mut input.digital_assets_income, self.crypto),
            (&mut input.other_income, self.other_income),
            (&mut input.home_loan_self_occupied, self.home_loan_self_occupied),
            (&mut input.home_loan_let_out, self.home_loan_let_out),
            (&mut input.hra_exemption, self.hra_exemption),
            (&mut input.lta_exemption, self.lta_exemption),
            (&mut input.nps_employer_80ccd2, self.nps_employer),
            (&mut input.section_80c, self.section_80c),
            (&mut input.section_80d, self.section_80d),
            (&mut input.section_80ccd1b, self.section_80ccd1b),
            (&mut input.section_80g, self.section_80g),
            (&mut input.section_80e, self.section_80e),
            (&mut input.other_deductions, self.other_deductions),
        ];
        for (field, flag) in overrides {
            if flag.is_some() {
                *field = flag;
            }
        }

        if self.cap_deductions {
            input = StatutoryLimits::default().apply(&input);
        }
        Ok(input)
    }
}

/// Reads a TOML-serialised [`TaxInput`].
pub fn load_input_file(path: &Path) -> Result<TaxInput> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file: {}", path.display()))?;
    toml::from_str(&contents)
        .with_context(|| format!("Failed to parse input file: {}", path.display()))
}

#[derive(Debug, Args)]
pub struct CompareArgs {
    #[command(flatten)]
    pub income: IncomeArgs,

    /// Print the result as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct RegimeArgs {
    #[command(flatten)]
    pub income: IncomeArgs,

    /// `old` or `new`.
    #[arg(long, value_parser = parse_regime)]
    pub regime: Regime,

    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct BatchArgs {
    /// CSV file with one scenario per row.
    #[arg(short, long)]
    pub file: PathBuf,

    #[arg(long)]
    pub cap_deductions: bool,

    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct FreelanceArgs {
    /// Annual gross receipts.
    #[arg(long, value_parser = parse_amount)]
    pub revenue: Decimal,

    #[arg(long, value_parser = parse_amount)]
    pub other_income: Option<Decimal>,

    #[arg(long, value_parser = parse_amount)]
    pub section_80c: Option<Decimal>,

    #[arg(long, value_parser = parse_amount)]
    pub section_80d: Option<Decimal>,

    #[arg(long, value_parser = parse_amount)]
    pub section_80ccd1b: Option<Decimal>,

    #[arg(long, value_parser = parse_amount)]
    pub other_deductions: Option<Decimal>,

    /// Clamp 80C, 80CCD(1B) and 80D to their statutory limits.
    #[arg(long)]
    pub cap_deductions: bool,

    #[arg(long)]
    pub json: bool,
}

impl FreelanceArgs {
    pub fn presumptive_input(&self) -> PresumptiveInput {
        PresumptiveInput {
            annual_revenue: self.revenue,
            other_income: self.other_income,
            section_80c: self.section_80c,
            section_80d: self.section_80d,
            section_80ccd1b: self.section_80ccd1b,
            other_deductions: self.other_deductions,
            limits: self.cap_deductions.then(StatutoryLimits::default),
        }
    }
}

#[derive(Debug, Args)]
pub struct SalaryArgs {
    /// Annual cost to company.
    #[arg(long, value_parser = parse_amount)]
    pub ctc: Decimal,

    /// Basic pay as a percentage of CTC.
    #[arg(long, value_parser = parse_amount, default_value = "50")]
    pub basic_percent: Decimal,

    /// Voluntary PF contribution per month.
    #[arg(long, value_parser = parse_amount, default_value = "0")]
    pub vpf: Decimal,

    /// Professional tax per month.
    #[arg(long, value_parser = parse_amount, default_value = "200")]
    pub professional_tax: Decimal,

    /// Food coupons per month.
    #[arg(long, value_parser = parse_amount, default_value = "0")]
    pub food_coupon: Decimal,

    /// Annual superannuation contribution.
    #[arg(long, value_parser = parse_amount, default_value = "0")]
    pub superannuation: Decimal,

    /// Annual employer NPS contribution.
    #[arg(long, value_parser = parse_amount, default_value = "0")]
    pub nps_employer: Decimal,

    /// Employee lives in a metro city (50% HRA instead of 40%).
    #[arg(long)]
    pub metro: bool,

    #[arg(long, value_parser = parse_regime, default_value = "new")]
    pub regime: Regime,

    #[arg(long)]
    pub json: bool,
}

impl SalaryArgs {
    pub fn salary_input(&self) -> SalaryInput {
        SalaryInput {
            ctc: self.ctc,
            basic_percentage: self.basic_percent,
            vpf_monthly: self.vpf,
            professional_tax_monthly: self.professional_tax,
            food_coupon_monthly: self.food_coupon,
            super_annuation: self.superannuation,
            nps_employer: self.nps_employer,
            is_metro: self.metro,
            tax_regime: self.regime,
        }
    }
}

#[derive(Debug, Args)]
pub struct HraArgs {
    /// Annual basic salary.
    #[arg(long, value_parser = parse_amount)]
    pub basic: Decimal,

    /// Annual dearness allowance.
    #[arg(long, value_parser = parse_amount, default_value = "0")]
    pub da: Decimal,

    /// Annual HRA received.
    #[arg(long, value_parser = parse_amount)]
    pub hra: Decimal,

    /// Annual rent paid.
    #[arg(long, value_parser = parse_amount)]
    pub rent: Decimal,

    #[arg(long)]
    pub metro: bool,

    #[arg(long)]
    pub json: bool,
}

impl HraArgs {
    pub fn hra_input(&self) -> HraInput {
        HraInput {
            basic_salary: self.basic,
            dearness_allowance: self.da,
            hra_received: self.hra,
            rent_paid: self.rent,
            is_metro: self.metro,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn compare_flags_build_tax_input() {
        let cli = Cli::parse_from([
            "itax",
            "compare",
            "--salary",
            "16,00,000",
            "--section-80c",
            "2,00,000",
            "--home-loan-self-occupied",
            "200000",
        ]);
        let Command::Compare(args) = cli.command else {
            panic!("expected compare subcommand");
        };

        let input = args.income.tax_input().unwrap();

        assert_eq!(input.gross_salary, dec!(1600000));
        assert_eq!(input.section_80c, Some(dec!(200000)));
        assert_eq!(input.home_loan_self_occupied, Some(dec!(200000)));
        assert_eq!(input.section_80d, None);
    }

    #[test]
    fn cap_deductions_applies_statutory_limits() {
        let cli = Cli::parse_from([
            "itax",
            "compare",
            "--salary",
            "1600000",
            "--section-80c",
            "200000",
            "--cap-deductions",
        ]);
        let Command::Compare(args) = cli.command else {
            panic!("expected compare subcommand");
        };

        let input = args.income.tax_input().unwrap();

        assert_eq!(input.section_80c, Some(dec!(150000)));
    }

    #[test]
    fn freelance_cap_deductions_sets_limits() {
        let cli = Cli::parse_from([
            "itax",
            "freelance",
            "--revenue",
            "30,00,000",
            "--section-80c",
            "5,00,000",
            "--cap-deductions",
        ]);
        let Command::Freelance(args) = cli.command else {
            panic!("expected freelance subcommand");
        };

        let input = args.presumptive_input();

        assert_eq!(input.limits, Some(StatutoryLimits::default()));
        assert_eq!(input.section_80c, Some(dec!(500000)));
    }

    #[test]
    fn salary_is_required_without_input_file() {
        let result = Cli::try_parse_from(["itax", "compare", "--interest", "1000"]);

        assert!(result.is_err());
    }

    #[test]
    fn negative_flag_is_rejected() {
        let result = Cli::try_parse_from(["itax", "compare", "--salary", "-100"]);

        assert!(result.is_err());
    }

    #[test]
    fn regime_flag_parses() {
        let cli = Cli::parse_from(["itax", "regime", "--salary", "600000", "--regime", "Old"]);
        let Command::Regime(args) = cli.command else {
            panic!("expected regime subcommand");
        };

        assert_eq!(args.regime, Regime::Old);
    }

    #[test]
    fn salary_defaults() {
        let cli = Cli::parse_from(["itax", "salary", "--ctc", "12,00,000"]);
        let Command::Salary(args) = cli.command else {
            panic!("expected salary subcommand");
        };

        let input = args.salary_input();

        assert_eq!(input.basic_percentage, dec!(50));
        assert_eq!(input.professional_tax_monthly, dec!(200));
        assert_eq!(input.tax_regime, Regime::New);
        assert!(!input.is_metro);
    }

    #[test]
    fn verbosity_counts_repeats() {
        let cli = Cli::parse_from(["itax", "-vv", "hra", "--basic", "1", "--hra", "1", "--rent", "1"]);

        assert_eq!(cli.verbose, 2);
    }
}
