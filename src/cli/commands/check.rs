//! Validate a template without generating anything

use anyhow::Result;
use clap::Args;

use super::TemplateArgs;
use crate::cli::Output;
use crate::config::EnvusConfig;
use crate::error::CliError;
use crate::parser::{Severity, parse_env_example};

#[derive(Args, Debug, Default)]
pub struct CheckArgs {
    #[command(flatten)]
    pub template: TemplateArgs,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON format
    Json,
}

/// Execute the check command
pub fn execute(args: CheckArgs, config: &EnvusConfig, output: &Output) -> Result<()> {
    let (example_path, raw) = args.template.read_template(&config.init)?;
    let options = args.template.parser_options(&config.init, output);
    let parsed = parse_env_example(&raw, &options);

    match args.format {
        OutputFormat::Json => {
            let report = serde_json::json!({
                "file": example_path.display().to_string(),
                "items": parsed.items.len(),
                "diagnostics": parsed.diagnostics,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => {
            for diagnostic in &parsed.diagnostics {
                output.diagnostic(diagnostic);
            }

            let warnings = parsed
                .diagnostics
                .iter()
                .filter(|d| d.severity == Severity::Warning)
                .count();

            output.category(&format!("Checked {}", example_path.display()));
            output.summary_stats("Keys:", parsed.items.len());
            output.summary_stats("Warnings:", warnings);
            output.summary_stats("Errors:", parsed.error_count());

            if !parsed.has_errors() {
                output.blank_line();
                output.success("Template is valid");
            }
        }
    }

    if parsed.has_errors() {
        return Err(CliError::ParserErrors {
            count: parsed.error_count(),
        }
        .into());
    }
    Ok(())
}
