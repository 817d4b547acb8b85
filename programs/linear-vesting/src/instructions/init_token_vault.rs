use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{CONFIG_SEED, TOKEN_VAULT_SEED};
use crate::state::VestingConfig;

/// Opens the escrow vault for a mint. Permissionless; needed once per mint
/// before the first plan with that token leg.
pub fn init_token_vault(ctx: Context<InitTokenVault>) -> Result<()> {
    emit!(TokenVaultOpened {
        mint: ctx.accounts.mint.key(),
        vault: ctx.accounts.vault.key(),
    });
    Ok(())
}

#[derive(Accounts)]
pub struct InitTokenVault<'info> {
    #[account(seeds = [CONFIG_SEED], bump = config.bump)]
    pub config: Account<'info, VestingConfig>,

    pub mint: Account<'info, Mint>,

    #[account(
        init,
        payer = payer,
        token::mint = mint,
        token::authority = config,
        seeds = [TOKEN_VAULT_SEED, mint.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct TokenVaultOpened {
    pub mint: Pubkey,
    pub vault: Pubkey,
}
