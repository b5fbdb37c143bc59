//! CLI command implementations

use std::io::{self, Write};
use std::path::Path;

use crate::config::ServiceConfig;
use crate::http_server::HttpServer;
use crate::observability::Logger;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, port } => serve(config.as_deref(), port),
        Command::CheckConfig { config } => check_config(config.as_deref()),
    }
}

fn load_config(config_path: Option<&Path>, port: Option<u16>) -> CliResult<ServiceConfig> {
    let mut config = ServiceConfig::load(config_path)?;
    if let Some(port) = port {
        config.http.port = port;
    }
    Logger::set_min_severity(config.severity()?);
    Ok(config)
}

/// Load configuration and serve HTTP until the process is stopped
pub fn serve(config_path: Option<&Path>, port: Option<u16>) -> CliResult<()> {
    let config = load_config(config_path, port)?;

    Logger::info(
        "CONFIG_LOADED",
        &[
            ("feed_capacity", config.feed_capacity.to_string().as_str()),
            ("log_level", config.log_level.as_str()),
            ("port", config.http.port.to_string().as_str()),
        ],
    );

    let server = HttpServer::new(&config)?;

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })
}

/// Print the effective configuration as pretty JSON
pub fn check_config(config_path: Option<&Path>) -> CliResult<()> {
    let config = load_config(config_path, None)?;
    let rendered = serde_json::to_string_pretty(&config)?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", rendered)?;
    Ok(())
}
