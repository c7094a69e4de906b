//! Income (or loss) under the head "income from house property".
//!
//! | Step | Rule |
//! |------|------|
//! | 1    | Let-out: rent less 30% standard deduction, less loan interest |
//! | 2    | Self-occupied: loan interest up to the regime's cap (Old: 2L, New: none) |
//! | 3    | Net loss: Old floors at -2L, New discards it |

use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{LossSetOff, RENT_STANDARD_DEDUCTION_RATE, Regime};

/// Net house-property income for `regime`. Negative values are losses.
pub fn resolve_house_property(
    rental_income: Decimal,
    let_out_interest: Decimal,
    self_occupied_interest: Decimal,
    regime: Regime,
) -> Decimal {
    let policy = regime.policy();
    let mut net = Decimal::ZERO;

    if rental_income > Decimal::ZERO {
        let net_rent = rental_income * (Decimal::ONE - RENT_STANDARD_DEDUCTION_RATE);
        net += net_rent - let_out_interest;
    }

    if let Some(cap) = policy.self_occupied_interest_cap {
        let allowed = self_occupied_interest.min(cap);
        if allowed < self_occupied_interest {
            debug!(
                %regime,
                claimed = %self_occupied_interest,
                allowed = %allowed,
                "self-occupied loan interest capped"
            );
        }
        net -= allowed;
    }

    if net < Decimal::ZERO {
        net = match policy.loss_set_off {
            LossSetOff::CappedAt(cap) => net.max(-cap),
            LossSetOff::Disallowed => Decimal::ZERO,
        };
    }

    net
}
