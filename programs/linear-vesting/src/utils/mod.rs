pub mod accounts;
pub mod schedule;
