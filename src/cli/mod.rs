//! Command-line interface for envus
//!
//! clap parses the arguments; each subcommand lives in `commands/` and
//! receives the layered configuration plus the console output handler.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};

use crate::config::EnvusConfig;

pub mod commands;
mod output;

pub use output::Output;

/// envus - generate validated config from .env.example
#[derive(Parser)]
#[command(name = "envus", author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file path
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<String>,

    /// Increase verbosity (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Subcommands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Generate envus config file from .env.example
    Init(commands::init::InitArgs),
    /// Parse .env.example and report diagnostics without writing anything
    Check(commands::check::CheckArgs),
    /// Show version information
    Version,
}

impl Cli {
    /// Execute the CLI command
    pub fn run(self) -> Result<()> {
        setup_logging(self.verbose, self.quiet);

        let output = Output::new(self.verbose > 0, self.quiet);
        let config = EnvusConfig::load_with_custom_config(self.config.as_deref())?;

        match self.command {
            Some(Commands::Init(args)) => commands::init::execute(args, &config, &output),
            Some(Commands::Check(args)) => commands::check::execute(args, &config, &output),
            Some(Commands::Version) => commands::version::execute(&output),
            None => {
                // Show help when no command is provided
                let mut cmd = Cli::command();
                cmd.print_help()?;
                Ok(())
            }
        }
    }
}

fn setup_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        match verbose {
            0 => tracing_subscriber::EnvFilter::new("warn"),
            1 => tracing_subscriber::EnvFilter::new("info"),
            2 => tracing_subscriber::EnvFilter::new("debug"),
            _ => tracing_subscriber::EnvFilter::new("trace"),
        }
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
