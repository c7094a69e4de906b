use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Regime, TaxCalculationDetail};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub better_regime: Regime,
    /// Absolute difference between the two regimes' payable tax.
    pub savings_amount: Decimal,
    pub reason: String,
}

/// Old and New regime computations for the same input, with a verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxComparisonResult {
    pub old_regime: TaxCalculationDetail,
    pub new_regime: TaxCalculationDetail,
    pub recommendation: Recommendation,
}

impl TaxComparisonResult {
    pub fn detail(
        &self,
        regime: Regime,
    ) -> &TaxCalculationDetail {
        match regime {
            Regime::Old => &self.old_regime,
            Regime::New => &self.new_regime,
        }
    }

    /// Tax payable under the recommended regime.
    pub fn payable(&self) -> Decimal {
        self.detail(self.recommendation.better_regime)
            .total_tax_payable
    }
}
