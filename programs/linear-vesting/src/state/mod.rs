pub mod recipient_plans;
pub mod vesting_config;
pub mod vesting_plan;

pub use recipient_plans::*;
pub use vesting_config::*;
pub use vesting_plan::*;
