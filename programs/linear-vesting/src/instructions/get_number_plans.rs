use anchor_lang::prelude::*;

use crate::constants::RECIPIENT_PLANS_SEED;
use crate::error::VestingError;
use crate::state::RecipientPlans;
use crate::utils::accounts::try_load;

pub fn get_number_plans(ctx: Context<GetNumberPlans>, recipient: Pubkey) -> Result<u64> {
    require!(recipient != Pubkey::default(), VestingError::NullRecipient);
    Ok(try_load::<RecipientPlans>(&ctx.accounts.recipient_plans)?
        .map_or(0, |plans| plans.count))
}

#[derive(Accounts)]
#[instruction(recipient: Pubkey)]
pub struct GetNumberPlans<'info> {
    /// CHECK: created with the recipient's first plan; absent means zero.
    #[account(seeds = [RECIPIENT_PLANS_SEED, recipient.as_ref()], bump)]
    pub recipient_plans: UncheckedAccount<'info>,
}
