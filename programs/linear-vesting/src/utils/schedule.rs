//! Linear vesting math. Pure functions: no storage, no clock.
//!
//! - vested = 0 before `start`, `total` from `finish` on
//! - in between: `total * (checkpoint - start + 1) / (finish - start)`, truncated
//! - the product is taken in `u128`, which holds any `u64 * u64` exactly

use anchor_lang::prelude::*;

use crate::error::VestingError;
use crate::state::{Payout, VestingPlan};

/// Cumulative amount unlocked at `checkpoint` for a leg of size `total`.
pub fn vested_amount(total: u64, checkpoint: u64, start: u64, finish: u64) -> Result<u64> {
    require!(start < finish, VestingError::InvalidRange);

    if checkpoint < start {
        return Ok(0);
    }
    if checkpoint >= finish {
        return Ok(total);
    }

    let elapsed = (checkpoint - start) as u128 + 1;
    let span = (finish - start) as u128;
    let vested = (total as u128)
        .checked_mul(elapsed)
        .ok_or(VestingError::MathOverflow)?
        / span;

    // elapsed == span one slot before finish; never hand out more than total.
    let vested = u64::try_from(vested).map_err(|_| VestingError::MathOverflow)?;
    Ok(vested.min(total))
}

pub fn has_started(plan: &VestingPlan, checkpoint: u64) -> bool {
    checkpoint >= plan.start_slot
}

/// What the recipient could claim at `checkpoint`: vested minus paid, per leg.
pub fn claimable(plan: &VestingPlan, checkpoint: u64) -> Result<Payout> {
    let token = vested_amount(plan.total_token, checkpoint, plan.start_slot, plan.finish_slot)?;
    let native = vested_amount(plan.total_native, checkpoint, plan.start_slot, plan.finish_slot)?;

    Ok(Payout {
        token: token.saturating_sub(plan.paid_token),
        native: native.saturating_sub(plan.paid_native),
    })
}

/// Tolerant quote: anything that cannot be claimed, including a missing plan,
/// is `(0, 0)`.
pub fn quote(plan: Option<&VestingPlan>, checkpoint: u64) -> Payout {
    plan.and_then(|plan| claimable(plan, checkpoint).ok())
        .unwrap_or_default()
}
