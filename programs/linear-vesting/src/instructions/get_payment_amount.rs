use anchor_lang::prelude::*;

use crate::state::{Payout, VestingPlan};
use crate::utils::accounts::try_load;
use crate::utils::schedule;

/// Quotes what `recipient` could claim on plan `index` right now.
///
/// Never fails on bad input: a null recipient, an unknown index, a wrong
/// account, a plan that has not started or one already paid out all quote
/// zero. The quote is also emitted as [`PaymentQuote`] for log readers.
pub fn get_payment_amount(
    ctx: Context<GetPaymentAmount>,
    recipient: Pubkey,
    index: u64,
) -> Result<Payout> {
    let slot = Clock::get()?.slot;
    let plan = quoted_plan(&ctx.accounts.plan, &recipient, index);
    let quote = schedule::quote(plan.as_ref(), slot);

    emit!(PaymentQuote {
        recipient,
        index,
        slot,
        amount_token: quote.token,
        amount_native: quote.native,
    });
    Ok(quote)
}

/// The plan behind `info`, if it is plan `index` of `recipient`.
fn quoted_plan(info: &AccountInfo, recipient: &Pubkey, index: u64) -> Option<VestingPlan> {
    if info.key() != VestingPlan::address(recipient, index) {
        return None;
    }
    try_load::<VestingPlan>(info).ok().flatten()
}

#[derive(Accounts)]
pub struct GetPaymentAmount<'info> {
    /// CHECK: compared with the derived plan address in the handler.
    pub plan: UncheckedAccount<'info>,
}

#[event]
pub struct PaymentQuote {
    pub recipient: Pubkey,
    pub index: u64,
    pub slot: u64,
    pub amount_token: u64,
    pub amount_native: u64,
}
