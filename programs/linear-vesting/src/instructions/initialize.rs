use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::constants::{CONFIG_SEED, NATIVE_VAULT_SEED};
use crate::state::VestingConfig;

/// Creates the config (the signer becomes admin) and tops the native vault up
/// to its rent-exempt reserve, which is never counted as escrow.
pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
    let reserve = Rent::get()?.minimum_balance(0);
    let held = ctx.accounts.native_vault.lamports();
    if held < reserve {
        system_program::transfer(
            CpiContext::new(
                ctx.accounts.system_program.to_account_info(),
                system_program::Transfer {
                    from: ctx.accounts.admin.to_account_info(),
                    to: ctx.accounts.native_vault.to_account_info(),
                },
            ),
            reserve - held,
        )?;
    }

    let admin = ctx.accounts.admin.key();
    ctx.accounts.config.set_inner(VestingConfig {
        admin,
        paused: false,
        bump: ctx.bumps.config,
        native_vault_bump: ctx.bumps.native_vault,
    });

    emit!(ConfigInitialized {
        admin,
        native_vault: ctx.accounts.native_vault.key(),
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = admin,
        space = 8 + VestingConfig::INIT_SPACE,
        seeds = [CONFIG_SEED],
        bump
    )]
    pub config: Account<'info, VestingConfig>,

    #[account(mut, seeds = [NATIVE_VAULT_SEED], bump)]
    pub native_vault: SystemAccount<'info>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct ConfigInitialized {
    pub admin: Pubkey,
    pub native_vault: Pubkey,
}
