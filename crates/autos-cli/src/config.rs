//! CLI configuration management.
//!
//! Precedence, highest first: command-line flags, environment variables
//! (`AUTOS_COUNT`, `AUTOS_SEED`, `AUTOS_FORMAT`), the JSON config file, then
//! built-in defaults.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use autos_core::GeneratorConfig;
use clap::ValueEnum;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Output document format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `autos` XML document.
    #[default]
    Xml,
    /// JSON array of automaton models.
    Json,
}

/// Application-wide configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Number of automata per batch.
    pub count: usize,

    /// Seed for reproducible output; unseeded when absent.
    pub seed: Option<u64>,

    /// Default output format.
    pub format: OutputFormat,

    /// Generator tunables.
    pub generator: GeneratorConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            count: 5,
            seed: None,
            format: OutputFormat::Xml,
            generator: GeneratorConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from the config file and environment variables.
    pub fn load() -> Result<Self> {
        // Load .env file if present (silently ignore if missing)
        let _ = dotenvy::dotenv();

        let mut config = match Self::config_file_path() {
            Some(path) if path.exists() => Self::from_file(&path)?,
            _ => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok());
        config.generator.validate()?;
        Ok(config)
    }

    /// Read a JSON config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Config = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        debug!(path = %path.display(), "config_file_loaded");
        Ok(config)
    }

    /// Override fields from environment lookups. Unparseable values are
    /// ignored with a warning.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(count) = lookup("AUTOS_COUNT") {
            match count.parse() {
                Ok(n) => self.count = n,
                Err(_) => warn!(value = %count, "ignoring invalid AUTOS_COUNT"),
            }
        }
        if let Some(seed) = lookup("AUTOS_SEED") {
            match seed.parse() {
                Ok(s) => self.seed = Some(s),
                Err(_) => warn!(value = %seed, "ignoring invalid AUTOS_SEED"),
            }
        }
        if let Some(format) = lookup("AUTOS_FORMAT") {
            match OutputFormat::from_str(&format, true) {
                Ok(f) => self.format = f,
                Err(_) => warn!(value = %format, "ignoring invalid AUTOS_FORMAT"),
            }
        }
    }

    /// Save current configuration to the config file.
    pub fn save(&self) -> Result<()> {
        if let Some(config_path) = Self::config_file_path() {
            if let Some(parent) = config_path.parent() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create config directory: {}", parent.display())
                })?;
            }
            let contents = serde_json::to_string_pretty(self)?;
            std::fs::write(&config_path, contents)
                .with_context(|| format!("Failed to write config to {}", config_path.display()))?;
        }
        Ok(())
    }

    /// Get the path to the config file.
    pub fn config_file_path() -> Option<PathBuf> {
        ProjectDirs::from("dev", "autos", "autos").map(|dirs| dirs.config_dir().join("config.json"))
    }
}
