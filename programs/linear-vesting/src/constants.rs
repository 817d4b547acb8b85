//! PDA seeds shared by the instructions and the client.

/// Global configuration (admin + pause flag).
pub const CONFIG_SEED: &[u8] = b"config";

/// System-owned PDA holding escrowed lamports.
pub const NATIVE_VAULT_SEED: &[u8] = b"native_vault";

/// Per-mint SPL token account holding escrowed tokens; `[TOKEN_VAULT_SEED, mint]`.
pub const TOKEN_VAULT_SEED: &[u8] = b"token_vault";

/// Per-recipient plan counter; `[RECIPIENT_PLANS_SEED, recipient]`.
pub const RECIPIENT_PLANS_SEED: &[u8] = b"recipient_plans";

/// One account per plan; `[PLAN_SEED, recipient, index.to_le_bytes()]`.
pub const PLAN_SEED: &[u8] = b"plan";
