//! CLI module for demohub
//!
//! - serve: load configuration and run the HTTP server
//! - check-config: print the effective configuration and exit

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{check_config, run, run_command, serve};
pub use errors::{CliError, CliErrorCode, CliResult};
