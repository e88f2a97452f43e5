//! # envus - typed config from `.env.example`
//!
//! Reads an environment template (`KEY=value` lines with optional
//! `# @group: a.b` directives) and generates a JavaScript/TypeScript module
//! declaring a validated config for the `envus` runtime loader.
//!
//! ```text
//! # @group: database
//! DATABASE_URL=
//! DATABASE_POOL=10
//!
//! LOG_LEVEL=info|debug
//! ```
//!
//! becomes
//!
//! ```text
//! export const config = defineConfig({
//!   database: {
//!     url: schema("DATABASE_URL").string().required(),
//!     pool: schema("DATABASE_POOL").number().default(10),
//!   },
//!   logLevel: schema("LOG_LEVEL").string().enum(['info', 'debug']),
//! });
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! envus init -e .env.example -o config/index.js
//! envus init --group pattern --ts
//! envus check --format json
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod parser;
pub mod shared;

pub use cli::{Cli, Output};
pub use config::EnvusConfig;
pub use error::CliError;
pub use generator::{OutputMode, generate_config_file};
pub use parser::{
    Diagnostic, GroupingMode, ParseResult, ParsedItem, ParserOptions, Severity, parse_env_example,
};

/// Result type alias for envus operations
pub type Result<T> = anyhow::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const PKG_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
