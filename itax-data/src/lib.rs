//! Loading of taxpayer scenarios from CSV files.

pub mod loader;

pub use loader::{Scenario, ScenarioLoadError, ScenarioLoader};
