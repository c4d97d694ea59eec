//! Command-line front end for the foxhole puzzle solver: flag parsing,
//! parameter validation, and result rendering (plain text or JSON).

pub mod config;
pub mod error;
pub mod json;
pub mod render;

pub use config::Cli;
pub use error::CliError;
