use anchor_lang::prelude::*;

use crate::constants::PLAN_SEED;
use crate::error::VestingError;
use crate::state::{PlanView, VestingPlan};
use crate::utils::accounts::try_load;

pub fn get_plan(ctx: Context<GetPlan>, recipient: Pubkey, _index: u64) -> Result<PlanView> {
    require!(recipient != Pubkey::default(), VestingError::NullRecipient);
    try_load::<VestingPlan>(&ctx.accounts.plan)?
        .map(|plan| plan.view())
        .ok_or_else(|| error!(VestingError::IndexOutOfRange))
}

#[derive(Accounts)]
#[instruction(recipient: Pubkey, index: u64)]
pub struct GetPlan<'info> {
    /// CHECK: address pinned by seeds; an absent plan is `IndexOutOfRange`.
    #[account(seeds = [PLAN_SEED, recipient.as_ref(), &index.to_le_bytes()], bump)]
    pub plan: UncheckedAccount<'info>,
}
