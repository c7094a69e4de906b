//! The two statutory tax regimes for FY 2025-26 (AY 2026-27).
//!
//! Each regime is described by a [`RegimePolicy`] record: a standard
//! deduction, a slab table, a house-property loss set-off rule, a cap on
//! self-occupied loan interest, a rebate rule, and whether Chapter VI-A
//! deductions are allowed. The engine is a single function parameterised
//! by this record.

use std::fmt;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::SlabBracket;

/// Health and education cess applied on tax after rebate.
pub const CESS_RATE: Decimal = dec!(0.04);

/// Flat rate on income from virtual digital assets, independent of regime.
pub const SPECIAL_INCOME_RATE: Decimal = dec!(0.30);

/// Standard deduction on gross rent of a let-out property.
pub const RENT_STANDARD_DEDUCTION_RATE: Decimal = dec!(0.30);

/// Maximum house-property loss that may be set off against other heads.
pub const HOUSE_PROPERTY_LOSS_CAP: Decimal = dec!(200000);

pub const OLD_REGIME_SLABS: &[SlabBracket] = &[
    SlabBracket {
        lower_bound: dec!(0),
        upper_bound: Some(dec!(250000)),
        rate: dec!(0),
    },
    SlabBracket {
        lower_bound: dec!(250000),
        upper_bound: Some(dec!(500000)),
        rate: dec!(0.05),
    },
    SlabBracket {
        lower_bound: dec!(500000),
        upper_bound: Some(dec!(1000000)),
        rate: dec!(0.20),
    },
    SlabBracket {
        lower_bound: dec!(1000000),
        upper_bound: None,
        rate: dec!(0.30),
    },
];

pub const NEW_REGIME_SLABS: &[SlabBracket] = &[
    SlabBracket {
        lower_bound: dec!(0),
        upper_bound: Some(dec!(400000)),
        rate: dec!(0),
    },
    SlabBracket {
        lower_bound: dec!(400000),
        upper_bound: Some(dec!(800000)),
        rate: dec!(0.05),
    },
    SlabBracket {
        lower_bound: dec!(800000),
        upper_bound: Some(dec!(1200000)),
        rate: dec!(0.10),
    },
    SlabBracket {
        lower_bound: dec!(1200000),
        upper_bound: Some(dec!(1600000)),
        rate: dec!(0.15),
    },
    SlabBracket {
        lower_bound: dec!(1600000),
        upper_bound: Some(dec!(2000000)),
        rate: dec!(0.20),
    },
    SlabBracket {
        lower_bound: dec!(2000000),
        upper_bound: Some(dec!(2400000)),
        rate: dec!(0.25),
    },
    SlabBracket {
        lower_bound: dec!(2400000),
        upper_bound: None,
        rate: dec!(0.30),
    },
];

/// How a net loss under the head "income from house property" is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LossSetOff {
    /// Loss may reduce other income, floored at `-cap`.
    CappedAt(Decimal),
    /// Loss is discarded; the head contributes zero.
    Disallowed,
}

/// Section 87A rebate rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RebatePolicy {
    /// Income (slab + special) up to which the rebate applies.
    pub threshold: Decimal,
    /// Largest rebate that can be granted.
    pub max_rebate: Decimal,
    /// Whether tax just above the threshold is limited to the excess income.
    pub marginal_relief: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegimePolicy {
    pub standard_deduction: Decimal,
    pub slabs: &'static [SlabBracket],
    pub loss_set_off: LossSetOff,
    /// `None` means no deduction for self-occupied loan interest at all.
    pub self_occupied_interest_cap: Option<Decimal>,
    pub rebate: RebatePolicy,
    /// HRA/LTA exemptions and 80C/80D/80CCD(1B)/80G/80E deductions.
    pub allows_chapter_vi_a: bool,
}

pub const OLD_REGIME: RegimePolicy = RegimePolicy {
    standard_deduction: dec!(50000),
    slabs: OLD_REGIME_SLABS,
    loss_set_off: LossSetOff::CappedAt(HOUSE_PROPERTY_LOSS_CAP),
    self_occupied_interest_cap: Some(dec!(200000)),
    rebate: RebatePolicy {
        threshold: dec!(500000),
        max_rebate: dec!(12500),
        marginal_relief: false,
    },
    allows_chapter_vi_a: true,
};

pub const NEW_REGIME: RegimePolicy = RegimePolicy {
    standard_deduction: dec!(75000),
    slabs: NEW_REGIME_SLABS,
    loss_set_off: LossSetOff::Disallowed,
    self_occupied_interest_cap: None,
    rebate: RebatePolicy {
        threshold: dec!(1200000),
        max_rebate: dec!(60000),
        marginal_relief: true,
    },
    allows_chapter_vi_a: false,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Regime {
    Old,
    New,
}

impl Regime {
    pub const ALL: [Regime; 2] = [Regime::Old, Regime::New];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Old => "Old",
            Self::New => "New",
        }
    }

    /// Parses `"old"` or `"new"`, ignoring case and surrounding whitespace.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "old" => Some(Self::Old),
            "new" => Some(Self::New),
            _ => None,
        }
    }

    pub fn policy(&self) -> &'static RegimePolicy {
        match self {
            Self::Old => &OLD_REGIME,
            Self::New => &NEW_REGIME,
        }
    }
}

impl fmt::Display for Regime {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{} Regime", self.as_str())
    }
}
