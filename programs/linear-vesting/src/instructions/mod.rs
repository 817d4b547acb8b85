pub mod initialize;
pub mod init_token_vault;
pub mod create_plan;
pub mod claim_payment;
pub mod get_plan;
pub mod get_payment_amount;
pub mod get_number_plans;
pub mod get_escrow_balance;
pub mod pause;
pub mod unpause;
pub mod set_admin;

pub use initialize::*;
pub use init_token_vault::*;
pub use create_plan::*;
pub use claim_payment::*;
pub use get_plan::*;
pub use get_payment_amount::*;
pub use get_number_plans::*;
pub use get_escrow_balance::*;
pub use pause::*;
pub use unpause::*;
pub use set_admin::*;
