use super::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_config_loads_defaults() {
    let config = EnvusConfig::load_with_custom_config(Some("non_existent.toml"))
        .expect("Should load default config");

    assert_eq!(config.init.example, ".env.example");
    assert_eq!(config.init.output, "./config/index.js");
    assert_eq!(config.init.group, "explicit");
    assert_eq!(config.init.module, "js");
    assert!(!config.init.flat);
    assert!(!config.init.force);
}

#[test]
fn test_embedded_defaults_match_struct_defaults() {
    let config = EnvusConfig::load_with_custom_config(Some("non_existent.toml")).unwrap();
    assert_eq!(config.init, InitConfig::default());
}

#[test]
fn test_custom_toml_config_overrides_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("custom.toml");
    fs::write(&path, "[init]\ngroup = \"pattern\"\nmodule = \"cjs\"\n").unwrap();

    let config = EnvusConfig::load_with_custom_config(path.to_str()).unwrap();

    assert_eq!(config.init.group, "pattern");
    assert_eq!(config.init.module, "cjs");
    // Untouched keys keep their defaults
    assert_eq!(config.init.example, ".env.example");
}

#[test]
fn test_custom_yaml_config() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("envus.yml");
    fs::write(&path, "init:\n  flat: true\n  output: out/config.ts\n").unwrap();

    let config = EnvusConfig::load_with_custom_config(path.to_str()).unwrap();

    assert!(config.init.flat);
    assert_eq!(config.init.output, "out/config.ts");
}

#[test]
fn test_custom_json_config() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("envus.json");
    fs::write(&path, r#"{ "init": { "force": true } }"#).unwrap();

    let config = EnvusConfig::load_with_custom_config(path.to_str()).unwrap();
    assert!(config.init.force);
}

#[test]
fn test_invalid_config_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.toml");
    fs::write(&path, "[init]\nflat = \"sometimes\"\n").unwrap();

    assert!(EnvusConfig::load_with_custom_config(path.to_str()).is_err());
}
