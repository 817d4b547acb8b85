use anchor_lang::prelude::*;

use crate::error::VestingError;

/// Per-recipient plan counter. Plans live at indices `0..count` and an index
/// is never reused, even after the plan is fully paid.
#[account]
#[derive(InitSpace, Debug)]
pub struct RecipientPlans {
    pub recipient: Pubkey,
    pub count: u64,
    pub bump: u8,
}

impl RecipientPlans {
    /// Reserves the next index.
    pub fn push(&mut self) -> Result<u64> {
        let index = self.count;
        self.count = self
            .count
            .checked_add(1)
            .ok_or(VestingError::MathOverflow)?;
        Ok(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_are_sequential() {
        let mut plans = RecipientPlans {
            recipient: Pubkey::new_from_array([3; 32]),
            count: 0,
            bump: 255,
        };
        assert_eq!(plans.push().unwrap(), 0);
        assert_eq!(plans.push().unwrap(), 1);
        assert_eq!(plans.count, 2);
    }

    #[test]
    fn counter_overflow_is_an_error() {
        let mut plans = RecipientPlans {
            recipient: Pubkey::new_from_array([3; 32]),
            count: u64::MAX,
            bump: 255,
        };
        assert!(plans.push().is_err());
        assert_eq!(plans.count, u64::MAX);
    }
}
