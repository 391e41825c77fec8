//! Main application configuration
//!
//! This module defines the primary configuration structures for the rating
//! pipeline, including environment variable loading, optional TOML config
//! files, and validation.

use crate::config::rating::EloConfig;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub service: ServiceSettings,
    pub output: OutputSettings,
    pub rating: EloConfig,
}

/// Service-level settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    /// Service name for logging
    pub name: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

/// Output table settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Directory the output tables are written into
    pub directory: String,
    /// File name of the final standings table
    pub standings_file: String,
    /// File name of the chronological rating history table
    pub history_file: String,
    /// Number of rows printed in the console summary
    pub top_count: usize,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            name: "cagerank".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            directory: ".".to_string(),
            standings_file: "fighter_ratings.csv".to_string(),
            history_file: "rating_history.csv".to_string(),
            top_count: 15,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        // Service settings
        if let Ok(name) = env::var("CAGERANK_SERVICE_NAME") {
            config.service.name = name;
        }
        if let Ok(log_level) = env::var("CAGERANK_LOG_LEVEL") {
            config.service.log_level = log_level;
        }

        // Output settings
        if let Ok(dir) = env::var("CAGERANK_OUTPUT_DIR") {
            config.output.directory = dir;
        }
        if let Ok(top) = env::var("CAGERANK_TOP_COUNT") {
            config.output.top_count = top
                .parse()
                .map_err(|_| anyhow!("Invalid CAGERANK_TOP_COUNT value: {}", top))?;
        }

        // Rating settings
        if let Ok(k_base) = env::var("CAGERANK_K_BASE") {
            config.rating.k_base = k_base
                .parse()
                .map_err(|_| anyhow!("Invalid CAGERANK_K_BASE value: {}", k_base))?;
        }
        if let Ok(initial) = env::var("CAGERANK_INITIAL_RATING") {
            config.rating.initial_rating = initial
                .parse()
                .map_err(|_| anyhow!("Invalid CAGERANK_INITIAL_RATING value: {}", initial))?;
        }

        validate_config(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: AppConfig = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        validate_config(&config)?;
        Ok(config)
    }
}

/// Validate configuration values
pub fn validate_config(config: &AppConfig) -> Result<()> {
    // Validate log level
    match config.service.log_level.to_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        _ => return Err(anyhow!("Invalid log level: {}", config.service.log_level)),
    }

    if config.output.directory.is_empty() {
        return Err(anyhow!("Output directory cannot be empty"));
    }
    if config.output.standings_file.is_empty() {
        return Err(anyhow!("Standings file name cannot be empty"));
    }
    if config.output.history_file.is_empty() {
        return Err(anyhow!("History file name cannot be empty"));
    }
    if config.output.top_count == 0 {
        return Err(anyhow!("Top count must be greater than 0"));
    }

    config.rating.validate()?;

    Ok(())
}
