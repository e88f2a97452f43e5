//! Command failures with dedicated exit statuses

use std::path::PathBuf;
use thiserror::Error;

/// Failures of `init`/`check` that map to a distinct process exit status
#[derive(Error, Debug)]
pub enum CliError {
    /// Template file is missing
    #[error(".env.example not found at: {}", .path.display())]
    ExampleNotFound { path: PathBuf },

    /// Output exists and `--force` was not given
    #[error("File exists: {}. Use --force to overwrite.", .path.display())]
    OutputExists { path: PathBuf },

    /// Parser reported at least one error diagnostic
    #[error("Aborting due to parser errors. Fix .env.example and try again.")]
    ParserErrors { count: usize },
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::ExampleNotFound { .. } => 1,
            CliError::OutputExists { .. } => 2,
            CliError::ParserErrors { .. } => 4,
        }
    }
}

/// Exit status for any error returned by a command
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<CliError>().map_or(1, CliError::exit_code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CliError::OutputExists {
            path: PathBuf::from("/tmp/config/index.js"),
        };
        assert_eq!(
            err.to_string(),
            "File exists: /tmp/config/index.js. Use --force to overwrite."
        );
    }

    #[test]
    fn test_exit_codes() {
        let missing: anyhow::Error = CliError::ExampleNotFound {
            path: PathBuf::from(".env.example"),
        }
        .into();
        assert_eq!(exit_code(&missing), 1);

        let parser: anyhow::Error = CliError::ParserErrors { count: 2 }.into();
        assert_eq!(exit_code(&parser), 4);

        let exists: anyhow::Error = CliError::OutputExists {
            path: PathBuf::from("x"),
        }
        .into();
        assert_eq!(exit_code(&exists), 2);

        assert_eq!(exit_code(&anyhow::anyhow!("io failure")), 1);
    }
}
