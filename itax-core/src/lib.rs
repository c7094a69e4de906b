//! Indian income-tax engine for FY 2025-26.
//!
//! Computes tax under the Old and New regimes for one taxpayer and
//! recommends the cheaper regime. Everything here is a pure function of its
//! input; there is no I/O and no shared mutable state.

pub mod calculations;
pub mod models;

pub use calculations::{compare_regimes, run_regime, try_compare_regimes};
pub use models::*;
