//! Tax calculation components.
//!
//! The regime engine composes the slab calculator, the house property
//! resolver and the deduction aggregator. The comparator runs the engine
//! once per regime. The presumptive, salary and HRA calculators are thin
//! front ends that build a [`crate::TaxInput`] and hand it to the comparator.

pub mod common;
pub mod comparator;
pub mod deductions;
pub mod engine;
pub mod house_property;
pub mod hra;
pub mod limits;
pub mod presumptive;
pub mod salary;
pub mod slab;

pub use comparator::{compare_regimes, try_compare_regimes};
pub use deductions::resolve_deductions;
pub use engine::{RegimeEngine, run_regime};
pub use house_property::resolve_house_property;
pub use hra::{HraBreakdown, HraError, HraInput, HraResult, calculate_hra_exemption};
pub use limits::StatutoryLimits;
pub use presumptive::{
    PRESUMPTIVE_INCOME_RATE, PresumptiveInput, PresumptiveResult, calculate_presumptive_tax,
};
pub use salary::{
    AnnualSalary, MonthlySalary, SalaryError, SalaryInput, SalaryResult,
    calculate_salary_breakdown,
};
pub use slab::{SlabTax, SlabTaxCalculator, compute_slab_tax};
