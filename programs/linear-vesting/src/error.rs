use anchor_lang::prelude::*;

/// Error codes of the vesting program. Codes are stable: append, never reorder.
#[error_code]
pub enum VestingError {
    #[msg("Recipient with null address")]
    NullRecipient,

    #[msg("Start should be smaller than finish")]
    InvalidRange,

    #[msg("No specified amounts")]
    NoAmountSpecified,

    #[msg("Token amount given without a token mint")]
    MissingAssetIdentity,

    #[msg("There is no such index")]
    IndexOutOfRange,

    #[msg("Currently no payouts: vesting has not started")]
    NotYetStarted,

    #[msg("There is no payout amount")]
    NothingToPay,

    #[msg("Plan creation is paused")]
    SystemPaused,

    #[msg("Unauthorized: admin signature required")]
    Unauthorized,

    #[msg("Asset transfer failed")]
    TransferFailed,

    #[msg("Payment would exceed the plan total")]
    Overflow,

    #[msg("Math overflow")]
    MathOverflow,

    #[msg("Plan index does not match the recipient's next index")]
    PlanIndexMismatch,

    #[msg("Token leg requires mint, vault and holder token accounts")]
    MissingTokenAccounts,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Invalid vault account")]
    InvalidVault,

    #[msg("Invalid admin public key")]
    InvalidAdmin,
}
