use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{CONFIG_SEED, NATIVE_VAULT_SEED, PLAN_SEED};
use crate::error::VestingError;
use crate::ledger::{NativeVaultLedger, TokenVaultLedger};
use crate::processor;
use crate::state::{Payout, VestingConfig, VestingPlan};
use crate::utils::accounts::{store, try_load};

/// Pays the signing recipient everything claimable on plan `index` at the
/// current slot. Not affected by the pause flag.
pub fn claim_payment(ctx: Context<ClaimPayment>, index: u64) -> Result<Payout> {
    let accounts = &ctx.accounts;
    let recipient = accounts.recipient.key();
    let plan_info = accounts.plan.to_account_info();
    let mut plan =
        try_load::<VestingPlan>(&plan_info)?.ok_or(VestingError::IndexOutOfRange)?;
    let slot = Clock::get()?.slot;

    let mut token_ledger = match (
        plan.token_mint,
        &accounts.token_mint,
        &accounts.token_vault,
        &accounts.recipient_token_account,
    ) {
        (Some(expected), Some(mint), Some(vault), Some(holder_account)) => {
            require_keys_eq!(mint.key(), expected, VestingError::InvalidTokenMint);
            Some(TokenVaultLedger::new(
                accounts.token_program.to_account_info(),
                mint,
                vault,
                holder_account,
                accounts.recipient.to_account_info(),
                accounts.config.to_account_info(),
                accounts.config.bump,
            )?)
        }
        _ => None,
    };
    let mut native_ledger = NativeVaultLedger::new(
        accounts.system_program.to_account_info(),
        accounts.native_vault.to_account_info(),
        accounts.config.native_vault_bump,
        accounts.recipient.to_account_info(),
    );

    let paid = processor::settle_claim(
        &mut plan,
        slot,
        token_ledger.as_mut(),
        &mut native_ledger,
    )?;
    store(&plan_info, &plan)?;

    msg!(
        "claim {} by {} at slot {}: {} token, {} lamports",
        index,
        recipient,
        slot,
        paid.token,
        paid.native
    );
    emit!(PaymentClaimed {
        recipient,
        index,
        slot,
        token_mint: plan.token_mint,
        amount_token: paid.token,
        amount_native: paid.native,
    });

    Ok(paid)
}

#[derive(Accounts)]
#[instruction(index: u64)]
pub struct ClaimPayment<'info> {
    #[account(seeds = [CONFIG_SEED], bump = config.bump)]
    pub config: Account<'info, VestingConfig>,

    /// CHECK: the signer's plan PDA for `index`; loaded in the handler so a
    /// missing plan reads as `IndexOutOfRange`.
    #[account(
        mut,
        seeds = [PLAN_SEED, recipient.key().as_ref(), &index.to_le_bytes()],
        bump
    )]
    pub plan: UncheckedAccount<'info>,

    #[account(mut, seeds = [NATIVE_VAULT_SEED], bump = config.native_vault_bump)]
    pub native_vault: SystemAccount<'info>,

    pub token_mint: Option<Account<'info, Mint>>,

    #[account(mut)]
    pub token_vault: Option<Account<'info, TokenAccount>>,

    /// Pre-created token account owned by the recipient.
    #[account(mut)]
    pub recipient_token_account: Option<Account<'info, TokenAccount>>,

    #[account(mut)]
    pub recipient: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

/// `slot` is the slot the claim executed in.
#[event]
pub struct PaymentClaimed {
    pub recipient: Pubkey,
    pub index: u64,
    pub slot: u64,
    pub token_mint: Option<Pubkey>,
    pub amount_token: u64,
    pub amount_native: u64,
}
