use crate::error::ConfigError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod logging;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use logging::init_logging;
pub use settings::{Config, Display, Entry, LogLevel, Logging, Storage};

/// The file looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_NAME: &str = "nova";
/// Prefix for environment overrides, e.g. `NOVA_STORAGE__PATH`.
pub const ENV_PREFIX: &str = "NOVA";

const DEFAULT_MARKUP_PCT: Decimal = dec!(20);

/// Loads the application configuration.
///
/// Sources, lowest precedence first: built-in defaults, the TOML file
/// (`path`, or an optional `nova.toml` in the working directory), then
/// `NOVA_*` environment variables. The result is validated before it is
/// returned.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let file = match path {
        Some(path) => config::File::from(path).required(true),
        None => config::File::with_name(DEFAULT_CONFIG_NAME).required(false),
    };

    let builder = config::Config::builder()
        .set_default("storage.path", "inventory_master.json")?
        .set_default("display.title", "NOVA BI")?
        .set_default("display.currency_suffix", "DHS")?
        .set_default(
            "entry.categories",
            vec!["Electronics", "Food", "Clothing", "Other"],
        )?
        .set_default("entry.default_markup_pct", DEFAULT_MARKUP_PCT.to_string())?
        .set_default("logging.directory", "logs")?
        .set_default("logging.file_prefix", "nova.log")?
        .set_default("logging.level", "info")?
        .add_source(file)
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("entry.categories")
                .try_parsing(true),
        )
        .build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.try_deserialize::<Config>()?;
    validate_config(&config)?;

    Ok(config)
}

/// Rejects settings the shell cannot work with.
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.storage.path.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "storage.path must not be empty".to_string(),
        ));
    }
    if config.entry.categories.is_empty() {
        return Err(ConfigError::ValidationError(
            "entry.categories must list at least one category".to_string(),
        ));
    }
    if config.entry.categories.iter().any(|c| c.trim().is_empty()) {
        return Err(ConfigError::ValidationError(
            "entry.categories must not contain blank names".to_string(),
        ));
    }
    if config.entry.default_markup_pct < Decimal::ZERO {
        return Err(ConfigError::ValidationError(
            "entry.default_markup_pct must not be negative".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn write_config(contents: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nova.toml");
        fs::write(&path, contents).unwrap();
        (dir, path)
    }

    #[test]
    fn empty_file_falls_back_to_defaults() {
        let (_dir, path) = write_config("");
        let config = load_config(Some(&path)).unwrap();

        assert_eq!(config.storage.path, PathBuf::from("inventory_master.json"));
        assert_eq!(config.display.currency_suffix, "DHS");
        assert_eq!(
            config.entry.categories,
            vec!["Electronics", "Food", "Clothing", "Other"]
        );
        assert_eq!(config.entry.default_markup_pct, dec!(20));
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn file_values_override_defaults() {
        let (_dir, path) = write_config(
            r#"
            [storage]
            path = "data/stock.json"

            [display]
            currency_suffix = "EUR"

            [entry]
            categories = ["Tools", "Garden"]
            default_markup_pct = "35.5"

            [logging]
            level = "debug"
            "#,
        );
        let config = load_config(Some(&path)).unwrap();

        assert_eq!(config.storage.path, PathBuf::from("data/stock.json"));
        assert_eq!(config.display.currency_suffix, "EUR");
        assert_eq!(config.display.title, "NOVA BI");
        assert_eq!(config.entry.categories, vec!["Tools", "Garden"]);
        assert_eq!(config.entry.default_markup_pct, dec!(35.5));
        assert_eq!(config.logging.level, LogLevel::Debug);
    }

    #[test]
    fn explicit_path_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_config(Some(&dir.path().join("missing.toml")));
        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }

    #[test]
    fn blank_category_is_rejected() {
        let (_dir, path) = write_config("[entry]\ncategories = [\"Tools\", \"  \"]\n");
        let err = load_config(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("blank names"));
    }

    #[test]
    fn negative_default_markup_is_rejected() {
        let (_dir, path) = write_config("[entry]\ndefault_markup_pct = \"-1\"\n");
        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn unknown_log_level_fails_to_load() {
        let (_dir, path) = write_config("[logging]\nlevel = \"chatty\"\n");
        assert!(load_config(Some(&path)).is_err());
    }
}
