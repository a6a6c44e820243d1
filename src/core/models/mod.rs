pub mod account;
pub mod cost;
