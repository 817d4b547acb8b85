//! Asset ledgers: the only place value moves in or out of escrow.
//!
//! The processor talks to [`AssetLedger`]; the instructions hand it the SPL
//! token or system-program implementation bound to the accounts of the call.

use anchor_lang::prelude::*;
use anchor_lang::system_program;
use anchor_spl::token::{self, Mint, TokenAccount, TransferChecked};

use crate::constants::{CONFIG_SEED, NATIVE_VAULT_SEED, TOKEN_VAULT_SEED};
use crate::error::VestingError;

pub trait AssetLedger {
    /// Moves `amount` from `payer` into escrow.
    fn transfer_in(&mut self, payer: &Pubkey, amount: u64) -> Result<()>;

    /// Moves `amount` out of escrow to `payee`.
    fn transfer_out(&mut self, payee: &Pubkey, amount: u64) -> Result<()>;
}

fn transfer_failed(err: Error) -> Error {
    msg!("ledger transfer failed: {}", err);
    error!(VestingError::TransferFailed)
}

pub fn token_vault_address(mint: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(&[TOKEN_VAULT_SEED, mint.as_ref()], &crate::ID).0
}

/// SPL token leg: one vault per mint, owned by the config PDA, and the
/// holder's own token account on the other side.
pub struct TokenVaultLedger<'info> {
    token_program: AccountInfo<'info>,
    mint: AccountInfo<'info>,
    decimals: u8,
    vault: AccountInfo<'info>,
    holder_account: AccountInfo<'info>,
    holder: AccountInfo<'info>,
    config: AccountInfo<'info>,
    config_bump: u8,
}

impl<'info> TokenVaultLedger<'info> {
    pub fn new(
        token_program: AccountInfo<'info>,
        mint: &Account<'info, Mint>,
        vault: &Account<'info, TokenAccount>,
        holder_account: &Account<'info, TokenAccount>,
        holder: AccountInfo<'info>,
        config: AccountInfo<'info>,
        config_bump: u8,
    ) -> Result<Self> {
        let mint_key = mint.key();
        require_keys_eq!(
            vault.key(),
            token_vault_address(&mint_key),
            VestingError::InvalidVault
        );
        require_keys_eq!(vault.mint, mint_key, VestingError::InvalidTokenMint);
        require_keys_eq!(vault.owner, config.key(), VestingError::InvalidVault);
        require_keys_eq!(holder_account.mint, mint_key, VestingError::InvalidTokenMint);
        require_keys_eq!(
            holder_account.owner,
            holder.key(),
            VestingError::InvalidTokenAccount
        );

        Ok(Self {
            token_program,
            mint: mint.to_account_info(),
            decimals: mint.decimals,
            vault: vault.to_account_info(),
            holder_account: holder_account.to_account_info(),
            holder,
            config,
            config_bump,
        })
    }
}

impl AssetLedger for TokenVaultLedger<'_> {
    fn transfer_in(&mut self, payer: &Pubkey, amount: u64) -> Result<()> {
        require_keys_eq!(*payer, self.holder.key(), VestingError::InvalidTokenAccount);
        token::transfer_checked(
            CpiContext::new(
                self.token_program.clone(),
                TransferChecked {
                    from: self.holder_account.clone(),
                    mint: self.mint.clone(),
                    to: self.vault.clone(),
                    authority: self.holder.clone(),
                },
            ),
            amount,
            self.decimals,
        )
        .map_err(transfer_failed)
    }

    fn transfer_out(&mut self, payee: &Pubkey, amount: u64) -> Result<()> {
        require_keys_eq!(*payee, self.holder.key(), VestingError::InvalidTokenAccount);
        let bump = [self.config_bump];
        let signer_seeds: &[&[&[u8]]] = &[&[CONFIG_SEED, &bump]];
        token::transfer_checked(
            CpiContext::new_with_signer(
                self.token_program.clone(),
                TransferChecked {
                    from: self.vault.clone(),
                    mint: self.mint.clone(),
                    to: self.holder_account.clone(),
                    authority: self.config.clone(),
                },
                signer_seeds,
            ),
            amount,
            self.decimals,
        )
        .map_err(transfer_failed)
    }
}

/// Native leg: lamports held by the system-owned native vault PDA.
pub struct NativeVaultLedger<'info> {
    system_program: AccountInfo<'info>,
    vault: AccountInfo<'info>,
    vault_bump: u8,
    holder: AccountInfo<'info>,
}

impl<'info> NativeVaultLedger<'info> {
    pub fn new(
        system_program: AccountInfo<'info>,
        vault: AccountInfo<'info>,
        vault_bump: u8,
        holder: AccountInfo<'info>,
    ) -> Self {
        Self {
            system_program,
            vault,
            vault_bump,
            holder,
        }
    }
}

impl AssetLedger for NativeVaultLedger<'_> {
    fn transfer_in(&mut self, payer: &Pubkey, amount: u64) -> Result<()> {
        require_keys_eq!(*payer, self.holder.key(), VestingError::Unauthorized);
        system_program::transfer(
            CpiContext::new(
                self.system_program.clone(),
                system_program::Transfer {
                    from: self.holder.clone(),
                    to: self.vault.clone(),
                },
            ),
            amount,
        )
        .map_err(transfer_failed)
    }

    fn transfer_out(&mut self, payee: &Pubkey, amount: u64) -> Result<()> {
        require_keys_eq!(*payee, self.holder.key(), VestingError::Unauthorized);
        let bump = [self.vault_bump];
        let signer_seeds: &[&[&[u8]]] = &[&[NATIVE_VAULT_SEED, &bump]];
        system_program::transfer(
            CpiContext::new_with_signer(
                self.system_program.clone(),
                system_program::Transfer {
                    from: self.vault.clone(),
                    to: self.holder.clone(),
                },
                signer_seeds,
            ),
            amount,
        )
        .map_err(transfer_failed)
    }
}
