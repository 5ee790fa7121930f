//! Layered configuration loading.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::format::{Item, StrftimeItems};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use thiserror::Error;

use crate::domain::models::config::Config;

/// Default project-local configuration directory
pub const CONFIG_DIR: &str = ".maintflow";

/// Prefix for environment variable overrides
pub const ENV_PREFIX: &str = "MAINTFLOW_";

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Level is not a tracing level name
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    /// `log_dir` is set but blank
    #[error("Log directory cannot be empty when set")]
    EmptyLogDir,

    /// `date_format` is blank
    #[error("Date format cannot be empty")]
    EmptyDateFormat,

    /// `date_format` has a specifier chrono does not know
    #[error("Invalid date format: {0}. Must be a chrono strftime pattern")]
    InvalidDateFormat(String),
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. .maintflow/config.yaml (project config)
    /// 3. .maintflow/local.yaml (local overrides, optional)
    /// 4. Environment variables (MAINTFLOW_* prefix, highest priority)
    pub fn load() -> Result<Config> {
        Self::load_from_dir(CONFIG_DIR)
    }

    /// Same precedence as [`ConfigLoader::load`], rooted at `dir`.
    pub fn load_from_dir(dir: impl AsRef<Path>) -> Result<Config> {
        let dir = dir.as_ref();
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(dir.join("config.yaml")))
            .merge(Yaml::file(dir.join("local.yaml")))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path.as_ref()))
            .extract()
            .context(format!(
                "Failed to load config from {}",
                path.as_ref().display()
            ))?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        if config
            .logging
            .log_dir
            .as_ref()
            .is_some_and(|dir| dir.trim().is_empty())
        {
            return Err(ConfigError::EmptyLogDir);
        }

        if config.display.date_format.trim().is_empty() {
            return Err(ConfigError::EmptyDateFormat);
        }

        if StrftimeItems::new(&config.display.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(ConfigError::InvalidDateFormat(
                config.display.date_format.clone(),
            ));
        }

        Ok(())
    }
}
