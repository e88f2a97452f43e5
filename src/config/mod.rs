//! Configuration management for envus
//!
//! Settings are layered with figment: embedded defaults, a project
//! `envus.{toml,json,yaml,yml}` file (or the file passed with `--config`),
//! then `ENVUS_*` environment variables. Command-line flags are applied on
//! top by each command.

use serde::{Deserialize, Serialize};

mod core;
pub mod smart_load;

#[cfg(test)]
mod tests;

/// Main configuration structure for envus
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct EnvusConfig {
    /// Defaults for the `init` command
    #[serde(default)]
    pub init: InitConfig,
}

/// Defaults for `envus init`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct InitConfig {
    /// Template file to read
    pub example: String,

    /// Generated config file
    pub output: String,

    /// Grouping mode name (`explicit` or `pattern`)
    pub group: String,

    /// Disable grouping entirely
    pub flat: bool,

    /// Output module dialect (`js`, `ts` or `cjs`)
    pub module: String,

    /// Overwrite an existing output file
    pub force: bool,
}

impl Default for InitConfig {
    fn default() -> Self {
        Self {
            example: ".env.example".to_string(),
            output: "./config/index.js".to_string(),
            group: "explicit".to_string(),
            flat: false,
            module: "js".to_string(),
            force: false,
        }
    }
}
