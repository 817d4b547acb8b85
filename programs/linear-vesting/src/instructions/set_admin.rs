use anchor_lang::prelude::*;

use crate::constants::CONFIG_SEED;
use crate::error::VestingError;
use crate::state::VestingConfig;

pub fn set_admin(ctx: Context<SetAdmin>, new_admin: Pubkey) -> Result<()> {
    let admin = ctx.accounts.admin.key();
    let config_key = ctx.accounts.config.key();
    let config = &mut ctx.accounts.config;
    let auth = config.authority();
    let old_admin = config.set_admin(&auth, &admin, new_admin)?;

    // Program-owned addresses cannot sign, so handing them the role locks it.
    require!(
        new_admin != config_key && new_admin != crate::ID,
        VestingError::InvalidAdmin
    );

    emit!(AdminChanged {
        old_admin,
        new_admin,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct SetAdmin<'info> {
    #[account(mut, seeds = [CONFIG_SEED], bump = config.bump)]
    pub config: Account<'info, VestingConfig>,

    pub admin: Signer<'info>,
}

#[event]
pub struct AdminChanged {
    pub old_admin: Pubkey,
    pub new_admin: Pubkey,
}
