use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{CONFIG_SEED, NATIVE_VAULT_SEED, PLAN_SEED, RECIPIENT_PLANS_SEED};
use crate::ledger::{NativeVaultLedger, TokenVaultLedger};
use crate::processor;
use crate::state::{PlanId, PlanTerms, RecipientPlans, VestingConfig, VestingPlan};

/// Locks `amount_token` of `token_mint` and/or `amount_native` lamports for
/// `recipient`, vesting linearly over `[start_slot, finish_slot]`.
///
/// `index` must be the recipient's current plan count; it addresses the new
/// plan account.
pub fn create_plan(
    ctx: Context<CreatePlan>,
    recipient: Pubkey,
    index: u64,
    start_slot: u64,
    finish_slot: u64,
    amount_token: u64,
    amount_native: u64,
) -> Result<()> {
    let accounts = &ctx.accounts;
    let depositor = accounts.depositor.key();
    let token_mint = accounts.token_mint.as_ref().map(|mint| mint.key());

    let mut token_ledger = match (
        &accounts.token_mint,
        &accounts.token_vault,
        &accounts.depositor_token_account,
    ) {
        (Some(mint), Some(vault), Some(holder_account)) => Some(TokenVaultLedger::new(
            accounts.token_program.to_account_info(),
            mint,
            vault,
            holder_account,
            accounts.depositor.to_account_info(),
            accounts.config.to_account_info(),
            accounts.config.bump,
        )?),
        _ => None,
    };
    let mut native_ledger = NativeVaultLedger::new(
        accounts.system_program.to_account_info(),
        accounts.native_vault.to_account_info(),
        accounts.config.native_vault_bump,
        accounts.depositor.to_account_info(),
    );

    let terms = PlanTerms {
        start_slot,
        finish_slot,
        token_mint,
        total_token: amount_token,
        total_native: amount_native,
    };
    let plan = processor::open_plan(
        &accounts.config,
        PlanId { recipient, index },
        accounts.recipient_plans.count,
        depositor,
        terms,
        ctx.bumps.plan,
        token_ledger.as_mut(),
        &mut native_ledger,
    )?;

    let recipient_plans = &mut ctx.accounts.recipient_plans;
    recipient_plans.recipient = recipient;
    recipient_plans.bump = ctx.bumps.recipient_plans;
    recipient_plans.push()?;
    ctx.accounts.plan.set_inner(plan);

    msg!(
        "plan {} for {}: {} token, {} lamports over slots {}..={}",
        index,
        recipient,
        amount_token,
        amount_native,
        start_slot,
        finish_slot
    );
    emit!(PlanCreated {
        depositor,
        recipient,
        index,
        start_slot,
        finish_slot,
        token_mint,
        amount_token,
        amount_native,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(recipient: Pubkey, index: u64)]
pub struct CreatePlan<'info> {
    #[account(seeds = [CONFIG_SEED], bump = config.bump)]
    pub config: Account<'info, VestingConfig>,

    #[account(
        init_if_needed,
        payer = depositor,
        space = 8 + RecipientPlans::INIT_SPACE,
        seeds = [RECIPIENT_PLANS_SEED, recipient.as_ref()],
        bump
    )]
    pub recipient_plans: Account<'info, RecipientPlans>,

    #[account(
        init,
        payer = depositor,
        space = 8 + VestingPlan::INIT_SPACE,
        seeds = [PLAN_SEED, recipient.as_ref(), &index.to_le_bytes()],
        bump
    )]
    pub plan: Account<'info, VestingPlan>,

    #[account(mut, seeds = [NATIVE_VAULT_SEED], bump = config.native_vault_bump)]
    pub native_vault: SystemAccount<'info>,

    /// Token leg identity; omit for a native-only plan.
    pub token_mint: Option<Account<'info, Mint>>,

    #[account(mut)]
    pub token_vault: Option<Account<'info, TokenAccount>>,

    #[account(mut)]
    pub depositor_token_account: Option<Account<'info, TokenAccount>>,

    #[account(mut)]
    pub depositor: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

#[event]
pub struct PlanCreated {
    pub depositor: Pubkey,
    pub recipient: Pubkey,
    pub index: u64,
    pub start_slot: u64,
    pub finish_slot: u64,
    pub token_mint: Option<Pubkey>,
    pub amount_token: u64,
    pub amount_native: u64,
}
