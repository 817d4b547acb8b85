use anchor_lang::prelude::*;

use crate::constants::PLAN_SEED;
use crate::error::VestingError;

/// Stable identity of a plan: the recipient plus its insertion index.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlanId {
    pub recipient: Pubkey,
    pub index: u64,
}

/// Immutable terms supplied by the depositor at creation.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlanTerms {
    pub start_slot: u64,
    pub finish_slot: u64,
    /// `None` means the plan has no token leg.
    pub token_mint: Option<Pubkey>,
    pub total_token: u64,
    pub total_native: u64,
}

/// Amounts per leg. Used for claimable quotes, payments and outstanding escrow.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Payout {
    pub token: u64,
    pub native: u64,
}

impl Payout {
    pub fn is_zero(&self) -> bool {
        self.token == 0 && self.native == 0
    }
}

/// Which escrowed asset a balance query is about.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssetKind {
    Native,
    Token { mint: Pubkey },
}

/// Read view of a plan. Paid amounts are only exposed through the payment quote.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlanView {
    pub start_slot: u64,
    pub finish_slot: u64,
    pub token_mint: Option<Pubkey>,
    pub total_token: u64,
    pub total_native: u64,
}

/// One vesting plan. `start_slot`, `finish_slot`, `token_mint` and the totals
/// never change after creation; `paid_*` only grow.
#[account]
#[derive(InitSpace, Debug, PartialEq, Eq)]
pub struct VestingPlan {
    pub recipient: Pubkey,
    pub index: u64,
    pub depositor: Pubkey,
    /// First slot that pays out (inclusive).
    pub start_slot: u64,
    /// Slot at which the plan is fully vested (inclusive).
    pub finish_slot: u64,
    pub token_mint: Option<Pubkey>,
    pub total_token: u64,
    pub total_native: u64,
    pub paid_token: u64,
    pub paid_native: u64,
    pub bump: u8,
}

impl VestingPlan {
    pub fn address(recipient: &Pubkey, index: u64) -> Pubkey {
        Pubkey::find_program_address(
            &[PLAN_SEED, recipient.as_ref(), &index.to_le_bytes()],
            &crate::ID,
        )
        .0
    }

    /// Validates `terms` and builds a fresh, unpaid plan.
    pub fn open(id: PlanId, depositor: Pubkey, terms: PlanTerms, bump: u8) -> Result<Self> {
        require!(
            id.recipient != Pubkey::default(),
            VestingError::NullRecipient
        );
        require!(
            terms.start_slot < terms.finish_slot,
            VestingError::InvalidRange
        );
        require!(
            terms.total_token > 0 || terms.total_native > 0,
            VestingError::NoAmountSpecified
        );
        require!(
            terms.total_token == 0 || terms.token_mint.is_some(),
            VestingError::MissingAssetIdentity
        );

        Ok(Self {
            recipient: id.recipient,
            index: id.index,
            depositor,
            start_slot: terms.start_slot,
            finish_slot: terms.finish_slot,
            token_mint: terms.token_mint,
            total_token: terms.total_token,
            total_native: terms.total_native,
            paid_token: 0,
            paid_native: 0,
            bump,
        })
    }

    pub fn view(&self) -> PlanView {
        PlanView {
            start_slot: self.start_slot,
            finish_slot: self.finish_slot,
            token_mint: self.token_mint,
            total_token: self.total_token,
            total_native: self.total_native,
        }
    }

    pub fn paid(&self) -> Payout {
        Payout {
            token: self.paid_token,
            native: self.paid_native,
        }
    }

    /// Amounts still held in escrow for this plan.
    pub fn outstanding(&self) -> Payout {
        Payout {
            token: self.total_token.saturating_sub(self.paid_token),
            native: self.total_native.saturating_sub(self.paid_native),
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.outstanding().is_zero()
    }

    /// Credits a payment. Never lets a paid total pass its locked total.
    pub fn record_payment(&mut self, delta: Payout) -> Result<()> {
        let paid_token = self
            .paid_token
            .checked_add(delta.token)
            .ok_or(VestingError::Overflow)?;
        let paid_native = self
            .paid_native
            .checked_add(delta.native)
            .ok_or(VestingError::Overflow)?;
        require!(paid_token <= self.total_token, VestingError::Overflow);
        require!(paid_native <= self.total_native, VestingError::Overflow);

        self.paid_token = paid_token;
        self.paid_native = paid_native;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::testing::assert_vesting_error;

    const RECIPIENT: Pubkey = Pubkey::new_from_array([9; 32]);
    const MINT: Pubkey = Pubkey::new_from_array([5; 32]);

    fn terms(start: u64, finish: u64, mint: Option<Pubkey>, token: u64, native: u64) -> PlanTerms {
        PlanTerms {
            start_slot: start,
            finish_slot: finish,
            token_mint: mint,
            total_token: token,
            total_native: native,
        }
    }

    fn id(recipient: Pubkey) -> PlanId {
        PlanId {
            recipient,
            index: 0,
        }
    }

    #[test]
    fn open_builds_unpaid_plan() {
        let plan = VestingPlan::open(
            id(RECIPIENT),
            Pubkey::new_from_array([1; 32]),
            terms(10, 20, Some(MINT), 1_000, 50),
            254,
        )
        .unwrap();
        assert_eq!(plan.paid(), Payout::default());
        assert_eq!(plan.outstanding(), Payout { token: 1_000, native: 50 });
        assert_eq!(plan.view(), PlanView {
            start_slot: 10,
            finish_slot: 20,
            token_mint: Some(MINT),
            total_token: 1_000,
            total_native: 50,
        });
        assert_eq!((plan.recipient, plan.index), (RECIPIENT, 0));
    }

    #[test_case(Pubkey::default(), terms(10, 20, Some(MINT), 1, 1), VestingError::NullRecipient; "null recipient")]
    #[test_case(RECIPIENT, terms(20, 20, Some(MINT), 1, 1), VestingError::InvalidRange; "empty range")]
    #[test_case(RECIPIENT, terms(30, 20, Some(MINT), 1, 1), VestingError::InvalidRange; "reversed range")]
    #[test_case(RECIPIENT, terms(10, 20, Some(MINT), 0, 0), VestingError::NoAmountSpecified; "no amounts")]
    #[test_case(RECIPIENT, terms(10, 20, None, 1, 1), VestingError::MissingAssetIdentity; "token without mint")]
    #[test_case(Pubkey::default(), terms(30, 20, None, 0, 0), VestingError::NullRecipient; "recipient checked first")]
    fn open_rejects(recipient: Pubkey, terms: PlanTerms, expected: VestingError) {
        assert_vesting_error(
            VestingPlan::open(id(recipient), Pubkey::new_from_array([1; 32]), terms, 255),
            expected,
        );
    }

    #[test]
    fn native_only_plan_needs_no_mint() {
        let plan = VestingPlan::open(id(RECIPIENT), RECIPIENT, terms(0, 1, None, 0, 7), 255).unwrap();
        assert_eq!(plan.token_mint, None);
        assert_eq!(plan.total_native, 7);
    }

    #[test]
    fn mint_with_zero_token_amount_is_kept() {
        let plan =
            VestingPlan::open(id(RECIPIENT), RECIPIENT, terms(0, 1, Some(MINT), 0, 7), 255).unwrap();
        assert_eq!(plan.token_mint, Some(MINT));
        assert_eq!(plan.total_token, 0);
    }

    #[test]
    fn record_payment_never_exceeds_totals() {
        let mut plan =
            VestingPlan::open(id(RECIPIENT), RECIPIENT, terms(0, 10, Some(MINT), 100, 10), 255)
                .unwrap();
        plan.record_payment(Payout { token: 60, native: 6 }).unwrap();
        assert_eq!(plan.paid(), Payout { token: 60, native: 6 });

        assert_vesting_error(
            plan.record_payment(Payout { token: 41, native: 0 }),
            VestingError::Overflow,
        );
        assert_vesting_error(
            plan.record_payment(Payout { token: 0, native: u64::MAX }),
            VestingError::Overflow,
        );
        assert_eq!(plan.paid(), Payout { token: 60, native: 6 });

        plan.record_payment(Payout { token: 40, native: 4 }).unwrap();
        assert!(plan.is_exhausted());
    }
}
