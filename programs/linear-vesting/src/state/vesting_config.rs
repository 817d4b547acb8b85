use anchor_lang::prelude::*;

use crate::auth::{require_admin, AdminCheck, SingleAdmin};
use crate::error::VestingError;

/// Global configuration PDA. Doubles as the access gate and as the authority
/// of every token vault.
#[account]
#[derive(InitSpace, Debug)]
pub struct VestingConfig {
    /// Holder of the administrative capability.
    pub admin: Pubkey,
    /// Gate state: plan creation is rejected while set. Claims ignore it.
    pub paused: bool,
    pub bump: u8,
    pub native_vault_bump: u8,
}

impl VestingConfig {
    pub fn authority(&self) -> SingleAdmin {
        SingleAdmin(self.admin)
    }

    pub fn ensure_open(&self) -> Result<()> {
        require!(!self.paused, VestingError::SystemPaused);
        Ok(())
    }

    /// Sets the gate state. Repeating the current state is a silent no-op;
    /// returns whether the flag actually changed.
    pub fn set_paused<A: AdminCheck + ?Sized>(
        &mut self,
        auth: &A,
        caller: &Pubkey,
        paused: bool,
    ) -> Result<bool> {
        require_admin(auth, caller)?;
        let changed = self.paused != paused;
        self.paused = paused;
        Ok(changed)
    }

    pub fn set_admin<A: AdminCheck + ?Sized>(
        &mut self,
        auth: &A,
        caller: &Pubkey,
        new_admin: Pubkey,
    ) -> Result<Pubkey> {
        require_admin(auth, caller)?;
        require!(new_admin != Pubkey::default(), VestingError::InvalidAdmin);
        Ok(std::mem::replace(&mut self.admin, new_admin))
    }
}
