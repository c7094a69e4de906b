use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One progressive bracket of a regime's slab table.
///
/// Only income between `lower_bound` and `upper_bound` is taxed at `rate`.
/// An `upper_bound` of `None` marks the open-ended top bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlabBracket {
    pub lower_bound: Decimal,
    pub upper_bound: Option<Decimal>,
    /// Marginal rate as a fraction (`0.05` for 5%).
    pub rate: Decimal,
}

impl SlabBracket {
    /// Width of the bracket, or `None` for the unbounded top bracket.
    pub fn width(&self) -> Option<Decimal> {
        self.upper_bound.map(|upper| upper - self.lower_bound)
    }
}

/// Structural problems with a slab table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SlabTableError {
    #[error("slab table is empty")]
    Empty,

    #[error("first slab must start at 0, got {0}")]
    DoesNotStartAtZero(Decimal),

    #[error("slab {index} starts at {found} but the previous slab ends at {expected}")]
    NotContiguous {
        index: usize,
        expected: Decimal,
        found: Decimal,
    },

    #[error("slab {0} has a non-positive width")]
    EmptyBracket(usize),

    #[error("slab {0} is unbounded but is not the last slab")]
    UnboundedBeforeEnd(usize),

    #[error("last slab must be unbounded")]
    BoundedTop,

    #[error("slab {index} has rate {rate} outside 0..=1")]
    InvalidRate { index: usize, rate: Decimal },
}

/// Checks that `slabs` are contiguous, ascending, start at zero and end with
/// an unbounded bracket.
pub fn validate_slabs(slabs: &[SlabBracket]) -> Result<(), SlabTableError> {
    let first = slabs.first().ok_or(SlabTableError::Empty)?;
    if first.lower_bound != Decimal::ZERO {
        return Err(SlabTableError::DoesNotStartAtZero(first.lower_bound));
    }

    let last_index = slabs.len() - 1;
    let mut expected_lower = Decimal::ZERO;

    for (index, slab) in slabs.iter().enumerate() {
        if slab.rate < Decimal::ZERO || slab.rate > Decimal::ONE {
            return Err(SlabTableError::InvalidRate {
                index,
                rate: slab.rate,
            });
        }
        if slab.lower_bound != expected_lower {
            return Err(SlabTableError::NotContiguous {
                index,
                expected: expected_lower,
                found: slab.lower_bound,
            });
        }

        match slab.upper_bound {
            Some(upper) if upper <= slab.lower_bound => {
                return Err(SlabTableError::EmptyBracket(index));
            }
            Some(upper) => expected_lower = upper,
            None if index != last_index => {
                return Err(SlabTableError::UnboundedBeforeEnd(index));
            }
            None => {}
        }
    }

    if slabs[last_index].upper_bound.is_some() {
        return Err(SlabTableError::BoundedTop);
    }

    Ok(())
}
