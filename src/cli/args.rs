//! CLI argument definitions using clap
//!
//! - demohub serve [--config <path>] [--port <port>]
//! - demohub check-config [--config <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// demohub - tweet feed, user directory and project store over HTTP
#[derive(Parser, Debug)]
#[command(name = "demohub")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Path to a JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Port to listen on, overriding config and PORT
        #[arg(long)]
        port: Option<u16>,
    },

    /// Print the effective configuration as JSON and exit
    CheckConfig {
        /// Path to a JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve() {
        let cli = Cli::try_parse_from(["demohub", "serve", "--port", "9000"]).unwrap();
        match cli.command {
            Command::Serve { config, port } => {
                assert!(config.is_none());
                assert_eq!(port, Some(9000));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_check_config() {
        let cli =
            Cli::try_parse_from(["demohub", "check-config", "--config", "./demohub.json"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::CheckConfig { config: Some(_) }
        ));
    }

    #[test]
    fn test_invalid_port_rejected() {
        assert!(Cli::try_parse_from(["demohub", "serve", "--port", "http"]).is_err());
    }
}
