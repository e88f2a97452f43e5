//! Command implementations for the envus CLI
//!
//! Each command is organized into its own module. Argument handling shared
//! by commands that read a template lives here.

use anyhow::{Context, Result};
use clap::Args;
use std::path::{Path, PathBuf};

use crate::cli::Output;
use crate::config::InitConfig;
use crate::error::CliError;
use crate::parser::{GroupingMode, ParserOptions};

pub mod check;
pub mod init;
pub mod version;

/// Template selection and parsing flags
#[derive(Args, Debug, Default)]
pub struct TemplateArgs {
    /// Path to .env.example
    #[arg(short, long, value_name = "PATH")]
    pub example: Option<PathBuf>,

    /// Grouping mode: explicit | pattern
    #[arg(long, value_name = "MODE")]
    pub group: Option<String>,

    /// Disable grouping but still validate env keys
    #[arg(long)]
    pub flat: bool,
}

impl TemplateArgs {
    /// Absolute template path, CLI flag over configured default
    pub fn example_path(&self, config: &InitConfig) -> Result<PathBuf> {
        let path = self
            .example
            .clone()
            .unwrap_or_else(|| PathBuf::from(&config.example));
        absolute(&path)
    }

    /// Parser options from flags and config; unknown modes fall back to explicit
    pub fn parser_options(&self, config: &InitConfig, output: &Output) -> ParserOptions {
        let flat = self.flat || config.flat;
        let name = self.group.as_deref().unwrap_or(&config.group);

        let grouping_mode = GroupingMode::from_name(name).unwrap_or_else(|| {
            output.warning(&format!(
                "Unknown --group mode \"{}\", falling back to \"explicit\".",
                name
            ));
            GroupingMode::Explicit
        });

        ParserOptions {
            enable_grouping: !flat,
            grouping_mode,
            break_groups: true,
            flat,
        }
    }

    /// Read the template, failing with a dedicated error when it is missing
    pub fn read_template(&self, config: &InitConfig) -> Result<(PathBuf, String)> {
        let path = self.example_path(config)?;
        if !path.exists() {
            return Err(CliError::ExampleNotFound { path }.into());
        }

        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        tracing::info!("Read template {} ({} bytes)", path.display(), raw.len());
        Ok((path, raw))
    }
}

/// Resolve against the working directory without touching the filesystem
pub fn absolute(path: &Path) -> Result<PathBuf> {
    std::path::absolute(path).with_context(|| format!("Failed to resolve path {}", path.display()))
}
