//! Generate a config module from a template
//!
//! Reads the template, reports parser diagnostics, and writes the generated
//! config unless an error diagnostic was found or the output already exists.

use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::{Path, PathBuf};

use super::{TemplateArgs, absolute};
use crate::cli::Output;
use crate::config::EnvusConfig;
use crate::error::CliError;
use crate::generator::{OutputMode, generate_config_file};
use crate::parser::parse_env_example;

#[derive(Args, Debug, Default)]
pub struct InitArgs {
    #[command(flatten)]
    pub template: TemplateArgs,

    /// Output file (default ./config/index.js)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Generate TypeScript output (.ts)
    #[arg(long)]
    pub ts: bool,

    /// Generate CommonJS syntax but still output .js
    #[arg(long)]
    pub cjs: bool,

    /// Overwrite existing file
    #[arg(short, long)]
    pub force: bool,
}

impl InitArgs {
    fn output_mode(&self, config: &EnvusConfig, output: &Output) -> OutputMode {
        if self.ts {
            return OutputMode::Ts;
        }
        if self.cjs {
            return OutputMode::Cjs;
        }
        OutputMode::from_name(&config.init.module).unwrap_or_else(|| {
            output.warning(&format!(
                "Unknown module format \"{}\", falling back to \"js\".",
                config.init.module
            ));
            OutputMode::Js
        })
    }
}

/// Execute the init command
pub fn execute(args: InitArgs, config: &EnvusConfig, output: &Output) -> Result<()> {
    let (example_path, raw) = args.template.read_template(&config.init)?;
    let options = args.template.parser_options(&config.init, output);

    let parsed = parse_env_example(&raw, &options);
    for diagnostic in &parsed.diagnostics {
        output.diagnostic(diagnostic);
    }
    if parsed.has_errors() {
        return Err(CliError::ParserErrors {
            count: parsed.error_count(),
        }
        .into());
    }
    output.verbose(&format!(
        "Parsed {} keys from {}",
        parsed.items.len(),
        example_path.display()
    ));

    let mode = args.output_mode(config, output);
    let requested = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.init.output));
    let out_path = absolute(&output_file_for(&requested, mode))?;

    let code = generate_config_file(&parsed.items, mode);

    if let Some(parent) = out_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    // Prevent accidental overwrite
    if out_path.exists() && !(args.force || config.init.force) {
        return Err(CliError::OutputExists { path: out_path }.into());
    }

    fs::write(&out_path, code)
        .with_context(|| format!("Failed to write {}", out_path.display()))?;
    tracing::info!("Wrote {:?} config to {}", mode, out_path.display());

    output.success(&format!("Generated config at: {}", out_path.display()));
    Ok(())
}

/// TypeScript output swaps a trailing `.js`/`.jsx` for `.ts`
fn output_file_for(path: &Path, mode: OutputMode) -> PathBuf {
    if mode != OutputMode::Ts {
        return path.to_path_buf();
    }

    let raw = path.to_string_lossy();
    let stem = raw
        .strip_suffix(".jsx")
        .or_else(|| raw.strip_suffix(".js"));
    match stem {
        Some(stem) => PathBuf::from(format!("{}.ts", stem)),
        None => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_file_for_typescript() {
        assert_eq!(
            output_file_for(Path::new("config/index.js"), OutputMode::Ts),
            PathBuf::from("config/index.ts")
        );
        assert_eq!(
            output_file_for(Path::new("app.jsx"), OutputMode::Ts),
            PathBuf::from("app.ts")
        );
        assert_eq!(
            output_file_for(Path::new("config/index.mjs"), OutputMode::Ts),
            PathBuf::from("config/index.mjs")
        );
    }

    #[test]
    fn test_output_file_kept_for_js_modes() {
        let path = Path::new("config/index.js");
        assert_eq!(output_file_for(path, OutputMode::Cjs), path.to_path_buf());
        assert_eq!(output_file_for(path, OutputMode::Js), path.to_path_buf());
    }

    #[test]
    fn test_flags_pick_output_mode() {
        let config = EnvusConfig::default();
        let output = Output::new(false, true);

        let args = InitArgs {
            ts: true,
            cjs: true,
            ..InitArgs::default()
        };
        assert_eq!(args.output_mode(&config, &output), OutputMode::Ts);

        let args = InitArgs {
            cjs: true,
            ..InitArgs::default()
        };
        assert_eq!(args.output_mode(&config, &output), OutputMode::Cjs);

        assert_eq!(InitArgs::default().output_mode(&config, &output), OutputMode::Js);
    }

    #[test]
    fn test_config_picks_output_mode() {
        let mut config = EnvusConfig::default();
        config.init.module = "cjs".to_string();
        let output = Output::new(false, true);

        assert_eq!(InitArgs::default().output_mode(&config, &output), OutputMode::Cjs);
    }
}
