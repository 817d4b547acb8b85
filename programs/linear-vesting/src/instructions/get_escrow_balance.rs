use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::constants::{CONFIG_SEED, NATIVE_VAULT_SEED};
use crate::error::VestingError;
use crate::ledger::token_vault_address;
use crate::state::{AssetKind, VestingConfig};
use crate::utils::accounts::try_load;

/// Amount of `asset` currently held in escrow. The native vault's rent
/// reserve is not escrow and is left out.
pub fn get_escrow_balance(ctx: Context<GetEscrowBalance>, asset: AssetKind) -> Result<u64> {
    match asset {
        AssetKind::Native => {
            let reserve = Rent::get()?.minimum_balance(0);
            Ok(ctx.accounts.native_vault.lamports().saturating_sub(reserve))
        }
        AssetKind::Token { mint } => token_escrow(ctx.accounts.token_vault.as_deref(), &mint),
    }
}

/// Balance of the vault for `mint`. The vault address must always be passed;
/// one that was never opened as a token account holds nothing.
pub fn token_escrow(vault: Option<&AccountInfo>, mint: &Pubkey) -> Result<u64> {
    let vault = vault.ok_or(VestingError::MissingTokenAccounts)?;
    require_keys_eq!(
        vault.key(),
        token_vault_address(mint),
        VestingError::InvalidVault
    );
    Ok(try_load::<TokenAccount>(vault)?.map_or(0, |vault| vault.amount))
}

#[derive(Accounts)]
pub struct GetEscrowBalance<'info> {
    #[account(seeds = [CONFIG_SEED], bump = config.bump)]
    pub config: Account<'info, VestingConfig>,

    #[account(seeds = [NATIVE_VAULT_SEED], bump = config.native_vault_bump)]
    pub native_vault: SystemAccount<'info>,

    /// CHECK: required for token queries; matched against the mint's vault
    /// address and read only if it is a token account.
    pub token_vault: Option<UncheckedAccount<'info>>,
}
