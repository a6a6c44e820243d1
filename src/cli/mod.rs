pub mod account_cmd;
pub mod config_cmd;
pub mod output;
pub mod renderer;
pub mod report_cmd;
