//! Administrative capability checks.
//!
//! The access gate never compares keys itself; it asks an [`AdminCheck`]
//! backend, so a different authorization scheme can be dropped in without
//! touching the gate or the processor.

use anchor_lang::prelude::*;

use crate::error::VestingError;

pub trait AdminCheck {
    fn is_admin(&self, caller: &Pubkey) -> bool;
}

/// A single admin key, as stored in [`crate::state::VestingConfig`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SingleAdmin(pub Pubkey);

impl AdminCheck for SingleAdmin {
    fn is_admin(&self, caller: &Pubkey) -> bool {
        *caller != Pubkey::default() && *caller == self.0
    }
}

pub fn require_admin<A: AdminCheck + ?Sized>(auth: &A, caller: &Pubkey) -> Result<()> {
    require!(auth.is_admin(caller), VestingError::Unauthorized);
    Ok(())
}
