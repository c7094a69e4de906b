//! Command-line front end for the `itax-core` engine.

pub mod cli;
pub mod logging;
pub mod report;
pub mod utils;

use std::io::Write;

use anyhow::{Context, Result};
use itax_core::calculations::{
    StatutoryLimits, calculate_hra_exemption, calculate_presumptive_tax, calculate_salary_breakdown,
};
use itax_core::{run_regime, try_compare_regimes};
use itax_data::ScenarioLoader;
use serde::Serialize;
use tracing::{debug, info};

use crate::cli::{BatchArgs, Command};

#[derive(Debug, Serialize)]
struct BatchEntry<'a> {
    name: &'a str,
    #[serde(flatten)]
    result: &'a itax_core::TaxComparisonResult,
}

fn write_json(
    out: &mut impl Write,
    value: &impl Serialize,
) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).context("Failed to serialize result")?;
    writeln!(out)?;
    Ok(())
}

fn run_batch(
    args: &BatchArgs,
    out: &mut impl Write,
) -> Result<()> {
    let scenarios = ScenarioLoader::load_from_file(&args.file)
        .with_context(|| format!("Failed to load scenarios: {}", args.file.display()))?;
    info!(count = scenarios.len(), file = %args.file.display(), "scenarios loaded");

    let limits = StatutoryLimits::default();
    let mut results = Vec::with_capacity(scenarios.len());
    for scenario in &scenarios {
        let input = if args.cap_deductions {
            limits.apply(&scenario.input)
        } else {
            scenario.input.clone()
        };
        let result = try_compare_regimes(&input)
            .with_context(|| format!("Invalid scenario '{}'", scenario.name))?;
        results.push((scenario.name.clone(), result));
    }

    if args.json {
        let entries: Vec<BatchEntry<'_>> = results
            .iter()
            .map(|(name, result)| BatchEntry { name, result })
            .collect();
        write_json(out, &entries)
    } else {
        report::write_batch(out, &results)?;
        Ok(())
    }
}

/// Executes `command`, writing its report to `out`.
pub fn run(
    command: &Command,
    out: &mut impl Write,
) -> Result<()> {
    debug!(?command, "running command");

    match command {
        Command::Compare(args) => {
            let input = args.income.tax_input()?;
            let result = try_compare_regimes(&input).context("Invalid taxpayer input")?;
            if args.json {
                write_json(out, &result)
            } else {
                report::write_comparison(out, &result)?;
                Ok(())
            }
        }
        Command::Regime(args) => {
            let input = args.income.tax_input()?;
            input.validate().context("Invalid taxpayer input")?;
            let detail = run_regime(&input, args.regime);
            if args.json {
                write_json(out, &detail)
            } else {
                report::write_detail(out, &detail)?;
                Ok(())
            }
        }
        Command::Batch(args) => run_batch(args, out),
        Command::Freelance(args) => {
            let result = calculate_presumptive_tax(&args.presumptive_input());
            if args.json {
                write_json(out, &result)
            } else {
                report::write_presumptive(out, &result)?;
                Ok(())
            }
        }
        Command::Salary(args) => {
            let result = calculate_salary_breakdown(&args.salary_input())
                .context("Invalid salary structure")?;
            if args.json {
                write_json(out, &result)
            } else {
                report::write_salary(out, &result)?;
                Ok(())
            }
        }
        Command::Hra(args) => {
            let result =
                calculate_hra_exemption(&args.hra_input()).context("Invalid HRA input")?;
            if args.json {
                write_json(out, &result)
            } else {
                report::write_hra(out, &result)?;
                Ok(())
            }
        }
    }
}
