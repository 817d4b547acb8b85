//! Plan creation and claim settlement, independent of the account plumbing.
//!
//! The instructions load accounts, build ledgers and call in here; the
//! test harness does the same against in-memory ledgers.

use anchor_lang::prelude::*;

use crate::error::VestingError;
use crate::ledger::AssetLedger;
use crate::state::{AssetKind, Payout, PlanId, PlanTerms, VestingConfig, VestingPlan};
use crate::utils::schedule;

/// Gate check, validation and deposit of both legs. Returns the plan to
/// persist; nothing is returned (and no escrow is kept) if any step fails.
///
/// `next_index` is the recipient's current plan count; `id.index` must match it.
#[allow(clippy::too_many_arguments)]
pub fn open_plan<T: AssetLedger, N: AssetLedger>(
    gate: &VestingConfig,
    id: PlanId,
    next_index: u64,
    depositor: Pubkey,
    terms: PlanTerms,
    bump: u8,
    mut token: Option<&mut T>,
    native: &mut N,
) -> Result<VestingPlan> {
    gate.ensure_open()?;
    require_eq!(id.index, next_index, VestingError::PlanIndexMismatch);
    let plan = VestingPlan::open(id, depositor, terms, bump)?;

    if plan.total_token > 0 {
        token
            .as_deref_mut()
            .ok_or(VestingError::MissingTokenAccounts)?
            .transfer_in(&depositor, plan.total_token)?;
    }

    if plan.total_native > 0 {
        if let Err(err) = native.transfer_in(&depositor, plan.total_native) {
            if let Some(ledger) = token.as_deref_mut().filter(|_| plan.total_token > 0) {
                ledger.transfer_out(&depositor, plan.total_token)?;
            }
            return Err(err);
        }
    }

    Ok(plan)
}

/// Pays out whatever is claimable at `checkpoint`.
///
/// The payment is recorded before any transfer. If a transfer fails the
/// claim is undone as a whole: a token leg already sent is pulled back from
/// the recipient and both paid totals are restored.
pub fn settle_claim<T: AssetLedger, N: AssetLedger>(
    plan: &mut VestingPlan,
    checkpoint: u64,
    mut token: Option<&mut T>,
    native: &mut N,
) -> Result<Payout> {
    if plan.is_exhausted() {
        return err!(VestingError::NothingToPay);
    }
    let due = schedule::claimable(plan, checkpoint)?;
    if due.is_zero() {
        if !schedule::has_started(plan, checkpoint) {
            return err!(VestingError::NotYetStarted);
        }
        return err!(VestingError::NothingToPay);
    }

    let recipient = plan.recipient;
    let before = plan.paid();
    plan.record_payment(due)?;

    if due.token > 0 {
        let sent = match token.as_deref_mut() {
            Some(ledger) => ledger.transfer_out(&recipient, due.token),
            None => err!(VestingError::MissingTokenAccounts),
        };
        if let Err(err) = sent {
            plan.paid_token = before.token;
            plan.paid_native = before.native;
            return Err(err);
        }
    }

    if due.native > 0 {
        if let Err(err) = native.transfer_out(&recipient, due.native) {
            if let Some(ledger) = token.as_deref_mut().filter(|_| due.token > 0) {
                ledger.transfer_in(&recipient, due.token)?;
            }
            plan.paid_token = before.token;
            plan.paid_native = before.native;
            return Err(err);
        }
    }

    Ok(due)
}

/// Escrow that `plans` still owe for `asset`: `Σ(total - paid)`.
pub fn outstanding<'a>(
    plans: impl IntoIterator<Item = &'a VestingPlan>,
    asset: &AssetKind,
) -> Result<u64> {
    plans.into_iter().try_fold(0u64, |sum, plan| {
        let owed = match asset {
            AssetKind::Native => plan.outstanding().native,
            AssetKind::Token { mint } if plan.token_mint == Some(*mint) => {
                plan.outstanding().token
            }
            AssetKind::Token { .. } => 0,
        };
        sum.checked_add(owed)
            .ok_or_else(|| error!(VestingError::MathOverflow))
    })
}
