use rust_decimal::Decimal;
use serde::Deserialize;
use std::path::PathBuf;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub storage: Storage,
    pub display: Display,
    pub entry: Entry,
    pub logging: Logging,
}

/// Where the inventory lives on disk.
#[derive(Debug, Clone, Deserialize)]
pub struct Storage {
    /// The JSON file written by "sync" and read at start-up.
    pub path: PathBuf,
}

/// Presentation settings for tables and stat cards.
#[derive(Debug, Clone, Deserialize)]
pub struct Display {
    pub title: String,
    /// Appended to every formatted amount, e.g. "DHS" gives `1,250.00 DHS`.
    pub currency_suffix: String,
}

/// Settings for the guided product entry.
#[derive(Debug, Clone, Deserialize)]
pub struct Entry {
    /// The choices offered at the category step. The first one is the default.
    pub categories: Vec<String>,
    /// The markup pre-filled at the markup step.
    pub default_markup_pct: Decimal,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Logging {
    pub directory: PathBuf,
    pub file_prefix: String,
    pub level: LogLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// The level as an `EnvFilter` directive.
    pub fn as_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}
