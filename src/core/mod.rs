pub mod config;
pub mod fetch;
pub mod formatter;
pub mod models;
pub mod synth;
