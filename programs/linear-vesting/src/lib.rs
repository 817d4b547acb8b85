#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;

pub mod auth;
pub mod constants;
pub mod error;
pub mod instructions;
pub mod ledger;
pub mod processor;
pub mod state;
pub mod utils;

#[cfg(test)]
mod testing;

pub use instructions::*;
pub use state::*;

declare_id!("Auu3VwkjFVpTPiBH6hoursFMuT8aLHCd3ne75QM6KpzR");

#[program]
pub mod linear_vesting {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize::initialize(ctx)
    }

    pub fn init_token_vault(ctx: Context<InitTokenVault>) -> Result<()> {
        instructions::init_token_vault::init_token_vault(ctx)
    }

    pub fn create_plan(
        ctx: Context<CreatePlan>,
        recipient: Pubkey,
        index: u64,
        start_slot: u64,
        finish_slot: u64,
        amount_token: u64,
        amount_native: u64,
    ) -> Result<()> {
        instructions::create_plan::create_plan(
            ctx,
            recipient,
            index,
            start_slot,
            finish_slot,
            amount_token,
            amount_native,
        )
    }

    pub fn claim_payment(ctx: Context<ClaimPayment>, index: u64) -> Result<Payout> {
        instructions::claim_payment::claim_payment(ctx, index)
    }

    pub fn get_plan(ctx: Context<GetPlan>, recipient: Pubkey, index: u64) -> Result<PlanView> {
        instructions::get_plan::get_plan(ctx, recipient, index)
    }

    pub fn get_payment_amount(
        ctx: Context<GetPaymentAmount>,
        recipient: Pubkey,
        index: u64,
    ) -> Result<Payout> {
        instructions::get_payment_amount::get_payment_amount(ctx, recipient, index)
    }

    pub fn get_number_plans(ctx: Context<GetNumberPlans>, recipient: Pubkey) -> Result<u64> {
        instructions::get_number_plans::get_number_plans(ctx, recipient)
    }

    pub fn get_escrow_balance(ctx: Context<GetEscrowBalance>, asset: AssetKind) -> Result<u64> {
        instructions::get_escrow_balance::get_escrow_balance(ctx, asset)
    }

    pub fn pause(ctx: Context<Pause>) -> Result<()> {
        instructions::pause::pause(ctx)
    }

    pub fn unpause(ctx: Context<Unpause>) -> Result<()> {
        instructions::unpause::unpause(ctx)
    }

    pub fn set_admin(ctx: Context<SetAdmin>, new_admin: Pubkey) -> Result<()> {
        instructions::set_admin::set_admin(ctx, new_admin)
    }
}
