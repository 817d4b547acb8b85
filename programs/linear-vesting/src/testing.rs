//! In-memory stand-ins for the on-chain plumbing: a mock ledger and a plan
//! book that drives [`crate::processor`] the way the instructions do.

use std::collections::BTreeMap;
use std::fmt::Debug;

use anchor_lang::prelude::*;

use crate::error::VestingError;
use crate::ledger::AssetLedger;
use crate::processor;
use crate::state::{AssetKind, Payout, PlanId, PlanTerms, PlanView, VestingConfig};
use crate::utils::schedule;

pub const ADMIN: Pubkey = Pubkey::new_from_array([1; 32]);
pub const DEPOSITOR: Pubkey = Pubkey::new_from_array([2; 32]);
pub const RECIPIENT: Pubkey = Pubkey::new_from_array([3; 32]);
pub const MINT: Pubkey = Pubkey::new_from_array([4; 32]);

pub fn assert_vesting_error<T: Debug>(res: Result<T>, expected: VestingError) {
    let code = u32::from(expected);
    match res {
        Err(anchor_lang::error::Error::AnchorError(err)) => assert_eq!(
            err.error_code_number, code,
            "expected error {code}, got {}",
            err.error_name
        ),
        other => panic!("expected error {code}, got {other:?}"),
    }
}

/// Balances per holder plus the amount sitting in escrow.
#[derive(Debug, Default)]
pub struct MockLedger {
    pub balances: BTreeMap<Pubkey, u64>,
    pub escrow: u64,
    pub fail_in: bool,
    pub fail_out: bool,
}

impl MockLedger {
    pub fn fund(&mut self, holder: Pubkey, amount: u64) {
        *self.balances.entry(holder).or_default() += amount;
    }

    pub fn balance_of(&self, holder: &Pubkey) -> u64 {
        self.balances.get(holder).copied().unwrap_or_default()
    }
}

impl AssetLedger for MockLedger {
    fn transfer_in(&mut self, payer: &Pubkey, amount: u64) -> Result<()> {
        require!(!self.fail_in, VestingError::TransferFailed);
        let balance = self.balances.entry(*payer).or_default();
        require!(*balance >= amount, VestingError::TransferFailed);
        *balance -= amount;
        self.escrow += amount;
        Ok(())
    }

    fn transfer_out(&mut self, payee: &Pubkey, amount: u64) -> Result<()> {
        require!(!self.fail_out, VestingError::TransferFailed);
        require!(self.escrow >= amount, VestingError::TransferFailed);
        self.escrow -= amount;
        *self.balances.entry(*payee).or_default() += amount;
        Ok(())
    }
}

/// Plan store kept in a map of append-only vectors, with one token ledger
/// (for [`MINT`]-style plans) and one native ledger.
pub struct PlanBook {
    pub config: VestingConfig,
    pub plans: BTreeMap<Pubkey, Vec<crate::state::VestingPlan>>,
    pub token: MockLedger,
    pub native: MockLedger,
}

impl PlanBook {
    pub fn new(admin: Pubkey) -> Self {
        Self {
            config: VestingConfig {
                admin,
                paused: false,
                bump: 255,
                native_vault_bump: 255,
            },
            plans: BTreeMap::new(),
            token: MockLedger::default(),
            native: MockLedger::default(),
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn create_plan(
        &mut self,
        depositor: Pubkey,
        recipient: Pubkey,
        start_slot: u64,
        finish_slot: u64,
        token_mint: Option<Pubkey>,
        total_token: u64,
        total_native: u64,
    ) -> Result<PlanId> {
        let index = self.plans.get(&recipient).map_or(0, |plans| plans.len() as u64);
        let id = PlanId { recipient, index };
        let terms = PlanTerms {
            start_slot,
            finish_slot,
            token_mint,
            total_token,
            total_native,
        };

        let plan = processor::open_plan(
            &self.config,
            id,
            index,
            depositor,
            terms,
            255,
            Some(&mut self.token),
            &mut self.native,
        )?;
        self.plans.entry(recipient).or_default().push(plan);
        Ok(id)
    }

    pub fn claim_payment(&mut self, recipient: &Pubkey, index: u64, slot: u64) -> Result<Payout> {
        let plan = self
            .plans
            .get_mut(recipient)
            .and_then(|plans| plans.get_mut(index as usize))
            .ok_or(VestingError::IndexOutOfRange)?;
        processor::settle_claim(plan, slot, Some(&mut self.token), &mut self.native)
    }

    pub fn get_plan(&self, recipient: &Pubkey, index: u64) -> Result<PlanView> {
        require!(*recipient != Pubkey::default(), VestingError::NullRecipient);
        self.plans
            .get(recipient)
            .and_then(|plans| plans.get(index as usize))
            .map(|plan| plan.view())
            .ok_or_else(|| error!(VestingError::IndexOutOfRange))
    }

    pub fn count(&self, recipient: &Pubkey) -> Result<u64> {
        require!(*recipient != Pubkey::default(), VestingError::NullRecipient);
        Ok(self.plans.get(recipient).map_or(0, |plans| plans.len() as u64))
    }

    pub fn payment_amount(&self, recipient: &Pubkey, index: u64, slot: u64) -> Payout {
        let plan = self
            .plans
            .get(recipient)
            .and_then(|plans| plans.get(index as usize));
        schedule::quote(plan, slot)
    }

    pub fn pause(&mut self, caller: &Pubkey) -> Result<()> {
        let auth = self.config.authority();
        self.config.set_paused(&auth, caller, true).map(|_| ())
    }

    pub fn unpause(&mut self, caller: &Pubkey) -> Result<()> {
        let auth = self.config.authority();
        self.config.set_paused(&auth, caller, false).map(|_| ())
    }

    /// Escrow held by the ledgers must equal what the plans still owe.
    pub fn check_escrow(&self) {
        let plans = || self.plans.values().flatten();
        let mints: std::collections::BTreeSet<Pubkey> =
            plans().filter_map(|plan| plan.token_mint).collect();
        let owed_token = mints
            .iter()
            .map(|mint| processor::outstanding(plans(), &AssetKind::Token { mint: *mint }).unwrap())
            .sum::<u64>();
        assert_eq!(self.token.escrow, owed_token, "token escrow out of sync");
        assert_eq!(
            self.native.escrow,
            processor::outstanding(plans(), &AssetKind::Native).unwrap(),
            "native escrow out of sync"
        );
    }
}
