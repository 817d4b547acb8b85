use anchor_lang::prelude::*;

use crate::constants::CONFIG_SEED;
use crate::state::VestingConfig;

pub fn unpause(ctx: Context<Unpause>) -> Result<()> {
    let admin = ctx.accounts.admin.key();
    let config = &mut ctx.accounts.config;
    let auth = config.authority();
    if config.set_paused(&auth, &admin, false)? {
        emit!(GateUnpaused { admin });
    }
    Ok(())
}

#[derive(Accounts)]
pub struct Unpause<'info> {
    #[account(mut, seeds = [CONFIG_SEED], bump = config.bump)]
    pub config: Account<'info, VestingConfig>,
    pub admin: Signer<'info>,
}

#[event]
pub struct GateUnpaused {
    pub admin: Pubkey,
}
