//! Campus Records - interactive record keeper
//!
//! Entry point. Parses arguments, loads configuration, sets up logging and
//! then either runs the interactive session or a configuration command.

mod cli;
mod config;
mod error;
mod logging;
mod records;
mod session;

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info};

use crate::cli::{Cli, Commands, ConfigSubcommand};
use crate::config::AppConfig;
use crate::error::Result;
use crate::session::{Session, SessionEnd};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match dispatch(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e.format_for_log(), "Command failed");
            eprint!("{}", e.format_for_terminal());
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn dispatch(cli: &Cli) -> Result<()> {
    match cli.effective_command() {
        Commands::Config { subcommand } => {
            logging::init_simple(tracing::Level::WARN)?;
            handle_config_command(cli.config.as_deref(), subcommand)
        }
        Commands::Run => {
            let config = AppConfig::load(cli.config.as_deref())?;
            // Guards must outlive the session so file logs get flushed
            let _log_guards = logging::init_logging(&config.logging, cli.verbose, cli.quiet)?;
            info!(version = env!("CARGO_PKG_VERSION"), "Starting Campus Records");
            run_session(config)
        }
    }
}

/// Run the interactive session on the process's stdin/stdout
fn run_session(config: AppConfig) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), config.session);

    match session.run()? {
        SessionEnd::Exited => debug!("Exit selected"),
        SessionEnd::InputClosed => debug!("Stopped at end of input"),
    }
    Ok(())
}

/// Handle configuration subcommands
fn handle_config_command(config_path: Option<&str>, subcommand: ConfigSubcommand) -> Result<()> {
    match subcommand {
        ConfigSubcommand::Show => {
            let cfg = AppConfig::load(config_path)?;
            println!("{}", toml::to_string_pretty(&cfg)?);
        }
        ConfigSubcommand::Init { path, force } => {
            let written = config::init_config(path.as_deref(), force)?;
            println!("Configuration file created: {}", written.display());
        }
        ConfigSubcommand::Validate => {
            AppConfig::load(config_path)?;
            println!("Configuration is valid.");
        }
    }

    Ok(())
}
