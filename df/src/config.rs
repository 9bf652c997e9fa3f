//! Configuration for docxfill

use eyre::{Context, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main docxfill configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Log level used when `--log-level` is not given
    #[serde(rename = "log-level")]
    pub log_level: Option<String>,

    /// Defaults for the template filters that take arguments
    pub filters: FilterConfig,
}

/// Default arguments of the `delta`, `final` and `factor` filters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Days added by `delta` when no `days` argument is given
    #[serde(rename = "delta-days")]
    pub delta_days: i64,

    /// Days added to the last task end by `final`
    #[serde(rename = "final-days")]
    pub final_days: i64,

    /// Multiplier applied to the task total by `factor`
    #[serde(rename = "factor-rate")]
    pub factor_rate: Decimal,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            delta_days: 30,
            final_days: 30,
            factor_rate: Decimal::new(5, 2),
        }
    }
}

impl Config {
    /// Load configuration: `--config` path, then `./.docxfill.yml`, then
    /// `<config_dir>/docxfill/docxfill.yml`, then defaults
    ///
    /// An explicit path must load. Fallback files that fail are logged and skipped.
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        for candidate in Self::fallback_paths() {
            if !candidate.exists() {
                continue;
            }
            match Self::load_from_file(&candidate) {
                Ok(config) => return Ok(config),
                Err(e) => tracing::warn!("Failed to load config from {}: {:#}", candidate.display(), e),
            }
        }

        tracing::debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn fallback_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(".docxfill.yml")];
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("docxfill").join("docxfill.yml"));
        }
        paths
    }

    fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).context("Failed to read config file")?;
        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        tracing::info!("Loaded config from: {}", path.display());
        Ok(config)
    }
}
