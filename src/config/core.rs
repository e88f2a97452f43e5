use anyhow::{Context, Result};
use figment::{
    Figment,
    providers::{Env, Format, Json, Toml, Yaml},
};

use super::{EnvusConfig, smart_load};

// Embed the default config at compile time
const DEFAULT_CONFIG: &str = include_str!("../../default-config.toml");

/// Project config files looked up in the working directory, lowest priority first
const PROJECT_FILES: [&str; 4] = ["envus.toml", "envus.json", "envus.yaml", "envus.yml"];

impl EnvusConfig {
    pub fn load_with_custom_config(custom_config: Option<&str>) -> Result<Self> {
        let config: EnvusConfig = Self::figment(custom_config)
            .extract()
            .context("Failed to load envus configuration")?;
        tracing::debug!("Loaded configuration: {:?}", config);
        Ok(config)
    }

    /// Layered sources: embedded defaults, then project (or custom) file,
    /// then `ENVUS_` environment variables
    pub fn figment(custom_config: Option<&str>) -> Figment {
        let mut figment = Figment::new().merge(Toml::string(DEFAULT_CONFIG));

        // If custom config is specified, use only that + defaults + env vars
        if let Some(custom_path) = custom_config {
            tracing::debug!("Using custom config file: {}", custom_path);
            figment = figment.merge(smart_load::auto(custom_path));
        } else {
            let [toml, json, yaml, yml] = PROJECT_FILES;
            figment = figment
                .merge(Toml::file(toml))
                .merge(Json::file(json))
                .merge(Yaml::file(yaml))
                .merge(Yaml::file(yml));
        }

        // Environment variables always have highest priority
        figment.merge(Env::prefixed("ENVUS_").split("__"))
    }
}
