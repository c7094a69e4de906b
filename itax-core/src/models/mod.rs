mod regime;
mod slab_bracket;
mod tax_calculation;
mod tax_comparison;
mod tax_input;

pub use regime::{
    CESS_RATE, HOUSE_PROPERTY_LOSS_CAP, LossSetOff, NEW_REGIME, NEW_REGIME_SLABS, OLD_REGIME,
    OLD_REGIME_SLABS, RENT_STANDARD_DEDUCTION_RATE, RebatePolicy, Regime, RegimePolicy,
    SPECIAL_INCOME_RATE,
};
pub use slab_bracket::{SlabBracket, SlabTableError, validate_slabs};
pub use tax_calculation::{SlabTaxItem, TaxCalculationDetail};
pub use tax_comparison::{Recommendation, TaxComparisonResult};
pub use tax_input::{ResolvedInput, TaxInput, TaxInputError};
