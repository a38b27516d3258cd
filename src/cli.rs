//! Command-line interface for winctl.

use crate::command::WindowCommand;
use clap::Parser;
use std::path::PathBuf;
use winctl_config::LogLevel;

/// winctl - route renderer window commands to a native window
#[derive(Parser, Debug)]
#[command(name = "winctl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log level (off, error, warn, info, debug, trace); overrides RUST_LOG and config
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Print the accepted window command names and exit
    #[arg(long)]
    pub list_commands: bool,

    /// Do not read window commands from stdin
    #[arg(long)]
    pub no_stdin: bool,
}

/// Runtime options passed from CLI to the application
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimeOptions {
    /// Explicit config file path
    pub config_path: Option<PathBuf>,
    /// Log level override
    pub log_level: Option<LogLevel>,
    /// Read window commands from stdin
    pub stdin_channel: bool,
}

impl Default for RuntimeOptions {
    fn default() -> Self {
        Self {
            config_path: None,
            log_level: None,
            stdin_channel: true,
        }
    }
}

/// Result of CLI processing
#[derive(Debug)]
pub enum CliResult {
    /// Continue with normal application startup
    Continue(RuntimeOptions),
    /// Exit with the given code
    Exit(i32),
}

/// Process CLI arguments
pub fn process_cli() -> CliResult {
    resolve(Cli::parse())
}

fn resolve(cli: Cli) -> CliResult {
    if cli.list_commands {
        for command in WindowCommand::ALL {
            println!("{}", command);
        }
        return CliResult::Exit(0);
    }

    CliResult::Continue(RuntimeOptions {
        config_path: cli.config,
        log_level: cli.log_level,
        stdin_channel: !cli.no_stdin,
    })
}
